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

//! Defines the scene document handed to the Python driver.
//!
//! The document is the complete, already-derived scene: the driver applies
//! it verbatim and performs no derivation of its own. It is versioned so a
//! stale driver and a newer host can never silently disagree about the
//! layout.

use keylight_core::scene::{
    Camera, ObjectTransform, PbrMaterial, RenderSettings, SunLight, WorldBackground,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The document layout version understood by the embedded driver.
pub const FORMAT_VERSION: u32 = 1;

/// One fully staged scene, ready to be applied and rendered by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDoc {
    /// The document layout version; always [`FORMAT_VERSION`].
    pub format_version: u32,
    /// The STL file the driver imports.
    pub mesh_path: PathBuf,
    /// The transform applied to the imported mesh.
    pub transform: ObjectTransform,
    /// The placed camera.
    pub camera: Camera,
    /// The world background color and ambient strength.
    pub background: WorldBackground,
    /// The sun lights, in staging order (key, fill, back).
    pub lights: Vec<SunLight>,
    /// The material bound to the mesh.
    pub material: PbrMaterial,
    /// The resolved render settings.
    pub render: RenderSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use keylight_core::math::{Rgba, Vec3};
    use keylight_core::scene::{ImageFormat, Projection, RenderEngine};

    fn sample_doc() -> SceneDoc {
        SceneDoc {
            format_version: FORMAT_VERSION,
            mesh_path: PathBuf::from("/in/mesh.stl"),
            transform: ObjectTransform {
                scale: Vec3::ONE,
                location: Vec3::ZERO,
                rotation_deg: Vec3::new(0.0, 0.0, 90.0),
            },
            camera: Camera {
                position: Vec3::new(0.0, -4.0, 2.0),
                lens_mm: 35.0,
                projection: Projection::Perspective,
                clip_end: 20.0,
            },
            background: WorldBackground {
                color: Rgba::WHITE,
                ambient_strength: 0.2,
            },
            lights: vec![SunLight {
                position: Vec3::new(2.0, -2.0, 2.0),
                rotation_deg: Vec3::new(-60.0, 0.0, 45.0),
                energy: 2.5,
            }],
            material: PbrMaterial {
                base_color: Rgba::new(0.8, 0.2, 0.2, 1.0),
                roughness: 0.5,
                metallic: 0.0,
            },
            render: RenderSettings {
                output_path: PathBuf::from("/out/frame.png"),
                resolution_x: 1920,
                resolution_y: 1080,
                engine: RenderEngine::Cycles,
                samples: 64,
                use_denoising: true,
                format: ImageFormat::Png,
            },
        }
    }

    #[test]
    fn test_document_layout_matches_the_driver() {
        // The driver indexes the JSON by these exact keys and layouts; this
        // pins them against accidental renames.
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&sample_doc()).unwrap()).unwrap();

        assert_eq!(json["format_version"], 1);
        assert_eq!(json["mesh_path"], "/in/mesh.stl");
        assert_eq!(json["transform"]["rotation_deg"][2], 90.0);
        assert_eq!(json["camera"]["position"][1], -4.0);
        assert_eq!(json["camera"]["projection"], "PERSP");
        assert_eq!(json["background"]["color"][0], 1.0);
        assert_eq!(json["lights"][0]["energy"], 2.5);
        assert_eq!(json["material"]["base_color"][0], 0.8);
        assert_eq!(json["render"]["engine"], "CYCLES");
        assert_eq!(json["render"]["format"], "PNG");
        assert_eq!(json["render"]["output_path"], "/out/frame.png");
    }

    #[test]
    fn test_document_roundtrip() {
        let doc = sample_doc();
        let json = serde_json::to_string(&doc).unwrap();
        let back: SceneDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
