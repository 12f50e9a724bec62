// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the resolved render settings for one still frame.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The render engine driving the frame.
///
/// The serialized names follow the host engine's identifiers so the values
/// can be passed through from the configuration file unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderEngine {
    /// The fast real-time rasterizer, used for preview passes.
    #[serde(rename = "BLENDER_EEVEE_NEXT", alias = "BLENDER_EEVEE")]
    EeveeNext,
    /// The path tracer, used for final-quality frames.
    #[serde(rename = "CYCLES")]
    Cycles,
}

impl RenderEngine {
    /// Whether this engine path-traces and therefore honors sample counts
    /// and denoising settings.
    #[inline]
    pub fn is_path_traced(self) -> bool {
        matches!(self, RenderEngine::Cycles)
    }
}

/// The still-image output format.
///
/// Only PNG is produced; the enum exists so the host document states the
/// format explicitly rather than implying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// Portable Network Graphics.
    #[serde(rename = "PNG")]
    Png,
}

/// Fully resolved settings for rendering a single still frame.
///
/// Produced by the render-settings selector after the preview/final branch
/// has been taken; every field is concrete (no defaults left to apply).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// The resolved output path, including any preview suffix.
    pub output_path: PathBuf,
    /// Horizontal resolution in pixels.
    pub resolution_x: u32,
    /// Vertical resolution in pixels.
    pub resolution_y: u32,
    /// The engine rendering the frame.
    pub engine: RenderEngine,
    /// Path-tracing sample count. Ignored by the real-time engine.
    pub samples: u32,
    /// Whether the path tracer denoises the frame. Ignored by the
    /// real-time engine.
    pub use_denoising: bool,
    /// The still-image file format.
    pub format: ImageFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_serialized_names() {
        assert_eq!(
            serde_json::to_string(&RenderEngine::EeveeNext).unwrap(),
            "\"BLENDER_EEVEE_NEXT\""
        );
        assert_eq!(
            serde_json::from_str::<RenderEngine>("\"CYCLES\"").unwrap(),
            RenderEngine::Cycles
        );
        // Pre-"Next" engine name still accepted.
        assert_eq!(
            serde_json::from_str::<RenderEngine>("\"BLENDER_EEVEE\"").unwrap(),
            RenderEngine::EeveeNext
        );
    }

    #[test]
    fn test_engine_classification() {
        assert!(RenderEngine::Cycles.is_path_traced());
        assert!(!RenderEngine::EeveeNext.is_path_traced());
    }
}
