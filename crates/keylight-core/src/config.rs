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

//! Defines the configuration schema for a pipeline run.
//!
//! The configuration is a nested, immutable tree deserialized from the
//! caller's config file. Every leaf that is not a filesystem path has
//! exactly one default, declared in this module and nowhere else; the
//! components downstream consume fully populated values and never apply
//! defaults of their own. Only `paths.input_file` and `paths.output_file`
//! are required.

use crate::math::{Rgba, Vec3};
use crate::scene::{Projection, RenderEngine};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The complete configuration tree for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input/output locations and the host engine executable.
    pub paths: PathsConfig,
    /// Transform applied to the subject mesh after import.
    #[serde(default)]
    pub object_settings: ObjectSettingsConfig,
    /// Camera lens and projection.
    #[serde(default)]
    pub camera: CameraConfig,
    /// Light intensities and ambient strength.
    #[serde(default)]
    pub light: LightConfig,
    /// Subject material properties.
    #[serde(default)]
    pub material: MaterialConfig,
    /// Flat world background color.
    #[serde(default = "defaults::background_color")]
    pub background_color: Rgba,
    /// Preview-mode render settings.
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Final-mode render settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Filesystem locations for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// The STL mesh to render.
    pub input_file: PathBuf,
    /// Where the rendered PNG is written. In preview mode a `_preview`
    /// suffix is inserted before the extension.
    pub output_file: PathBuf,
    /// The host engine executable to invoke.
    #[serde(default = "defaults::blender_executable")]
    pub blender_executable: String,
}

/// Transform applied to the subject mesh after import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSettingsConfig {
    /// Per-axis scale factors.
    #[serde(default = "defaults::mesh_scale")]
    pub mesh_scale: Vec3,
    /// World-space location offset.
    #[serde(default = "defaults::mesh_location")]
    pub mesh_location: Vec3,
    /// XYZ Euler rotation in degrees.
    #[serde(default = "defaults::rotation")]
    pub rotation: Vec3,
}

/// Camera lens and projection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Focal length in millimeters.
    #[serde(default = "defaults::camera_lens")]
    pub camera_lens: f32,
    /// Projection model (`PERSP` or `ORTHO`).
    #[serde(default = "defaults::camera_type")]
    pub camera_type: Projection,
}

/// Light intensities and ambient strength.
///
/// There is deliberately no back-light intensity: the back light always
/// receives half the fill intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    /// Energy of the key light.
    #[serde(default = "defaults::key_light_intensity")]
    pub key_light_intensity: f32,
    /// Energy of the fill light. The back light derives from this.
    #[serde(default = "defaults::fill_light_intensity")]
    pub fill_light_intensity: f32,
    /// Ambient emission strength of the world background.
    #[serde(default = "defaults::ambient_light_strength")]
    pub ambient_light_strength: f32,
}

/// Subject material properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    /// Base color of the subject material.
    #[serde(default = "defaults::material_color")]
    pub material_color: Rgba,
    /// Roughness factor (0.0 = smooth, 1.0 = rough).
    #[serde(default = "defaults::material_roughness")]
    pub material_roughness: f32,
    /// Metallic factor (0.0 = dielectric, 1.0 = metal).
    #[serde(default = "defaults::material_metallic")]
    pub material_metallic: f32,
}

/// Preview-mode render settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Whether this run renders a fast preview instead of a final frame.
    #[serde(default = "defaults::preview_mode")]
    pub preview_mode: bool,
    /// Horizontal preview resolution in pixels.
    #[serde(default = "defaults::preview_resolution_x")]
    pub preview_resolution_x: u32,
    /// Vertical preview resolution in pixels.
    #[serde(default = "defaults::preview_resolution_y")]
    pub preview_resolution_y: u32,
    /// Engine for preview frames.
    #[serde(default = "defaults::preview_engine")]
    pub preview_engine: RenderEngine,
    /// Sample count when the preview engine is the path tracer.
    #[serde(default = "defaults::preview_samples")]
    pub preview_samples: u32,
    /// Whether preview path tracing denoises the frame.
    #[serde(default = "defaults::preview_use_denoising")]
    pub preview_use_denoising: bool,
}

/// Final-mode render settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Horizontal resolution in pixels.
    #[serde(default = "defaults::render_resolution_x")]
    pub render_resolution_x: u32,
    /// Vertical resolution in pixels.
    #[serde(default = "defaults::render_resolution_y")]
    pub render_resolution_y: u32,
    /// Engine for final frames.
    #[serde(default = "defaults::render_engine")]
    pub render_engine: RenderEngine,
    /// Sample count when the engine is the path tracer.
    #[serde(default = "defaults::samples")]
    pub samples: u32,
    /// Whether final path tracing denoises the frame.
    #[serde(default = "defaults::render_use_denoising")]
    pub render_use_denoising: bool,
}

// --- Section Defaults ---

impl Default for ObjectSettingsConfig {
    fn default() -> Self {
        Self {
            mesh_scale: defaults::mesh_scale(),
            mesh_location: defaults::mesh_location(),
            rotation: defaults::rotation(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            camera_lens: defaults::camera_lens(),
            camera_type: defaults::camera_type(),
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            key_light_intensity: defaults::key_light_intensity(),
            fill_light_intensity: defaults::fill_light_intensity(),
            ambient_light_strength: defaults::ambient_light_strength(),
        }
    }
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            material_color: defaults::material_color(),
            material_roughness: defaults::material_roughness(),
            material_metallic: defaults::material_metallic(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            preview_mode: defaults::preview_mode(),
            preview_resolution_x: defaults::preview_resolution_x(),
            preview_resolution_y: defaults::preview_resolution_y(),
            preview_engine: defaults::preview_engine(),
            preview_samples: defaults::preview_samples(),
            preview_use_denoising: defaults::preview_use_denoising(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render_resolution_x: defaults::render_resolution_x(),
            render_resolution_y: defaults::render_resolution_y(),
            render_engine: defaults::render_engine(),
            samples: defaults::samples(),
            render_use_denoising: defaults::render_use_denoising(),
        }
    }
}

/// Every leaf default of the configuration schema, in one place.
mod defaults {
    use crate::math::{Rgba, Vec3};
    use crate::scene::{Projection, RenderEngine};

    pub(super) fn blender_executable() -> String {
        "blender".to_string()
    }

    pub(super) fn mesh_scale() -> Vec3 {
        Vec3::ONE
    }

    pub(super) fn mesh_location() -> Vec3 {
        Vec3::ZERO
    }

    pub(super) fn rotation() -> Vec3 {
        Vec3::ZERO
    }

    pub(super) fn camera_lens() -> f32 {
        35.0
    }

    pub(super) fn camera_type() -> Projection {
        Projection::Perspective
    }

    pub(super) fn key_light_intensity() -> f32 {
        2.5
    }

    pub(super) fn fill_light_intensity() -> f32 {
        1.5
    }

    pub(super) fn ambient_light_strength() -> f32 {
        0.2
    }

    pub(super) fn material_color() -> Rgba {
        Rgba::new(0.8, 0.2, 0.2, 1.0)
    }

    pub(super) fn material_roughness() -> f32 {
        0.5
    }

    pub(super) fn material_metallic() -> f32 {
        0.0
    }

    pub(super) fn background_color() -> Rgba {
        Rgba::WHITE
    }

    pub(super) fn preview_mode() -> bool {
        false
    }

    pub(super) fn preview_resolution_x() -> u32 {
        640
    }

    pub(super) fn preview_resolution_y() -> u32 {
        360
    }

    pub(super) fn preview_engine() -> RenderEngine {
        RenderEngine::EeveeNext
    }

    pub(super) fn preview_samples() -> u32 {
        8
    }

    pub(super) fn preview_use_denoising() -> bool {
        true
    }

    pub(super) fn render_resolution_x() -> u32 {
        1920
    }

    pub(super) fn render_resolution_y() -> u32 {
        1080
    }

    pub(super) fn render_engine() -> RenderEngine {
        RenderEngine::Cycles
    }

    pub(super) fn samples() -> u32 {
        64
    }

    pub(super) fn render_use_denoising() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> Config {
        serde_json::from_str(
            r#"{"paths": {"input_file": "/in/mesh.stl", "output_file": "/out/frame.png"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_config_gets_all_defaults() {
        let config = minimal_config();

        assert_eq!(config.paths.blender_executable, "blender");
        assert_eq!(config.object_settings, ObjectSettingsConfig::default());
        assert_eq!(config.camera.camera_lens, 35.0);
        assert_eq!(config.camera.camera_type, Projection::Perspective);
        assert_eq!(config.light.key_light_intensity, 2.5);
        assert_eq!(config.light.fill_light_intensity, 1.5);
        assert_eq!(config.light.ambient_light_strength, 0.2);
        assert_eq!(config.material.material_color, Rgba::new(0.8, 0.2, 0.2, 1.0));
        assert_eq!(config.material.material_roughness, 0.5);
        assert_eq!(config.material.material_metallic, 0.0);
        assert_eq!(config.background_color, Rgba::WHITE);
    }

    #[test]
    fn test_render_mode_resolution_defaults() {
        let config = minimal_config();

        assert!(!config.preview.preview_mode);
        assert_eq!(config.preview.preview_resolution_x, 640);
        assert_eq!(config.preview.preview_resolution_y, 360);
        assert_eq!(config.preview.preview_engine, RenderEngine::EeveeNext);
        assert_eq!(config.preview.preview_samples, 8);
        assert!(config.preview.preview_use_denoising);

        assert_eq!(config.render.render_resolution_x, 1920);
        assert_eq!(config.render.render_resolution_y, 1080);
        assert_eq!(config.render.render_engine, RenderEngine::Cycles);
        assert_eq!(config.render.samples, 64);
        assert!(config.render.render_use_denoising);
    }

    #[test]
    fn test_partial_section_keeps_other_leaves_defaulted() {
        let config: Config = serde_json::from_str(
            r#"{
                "paths": {"input_file": "/in/mesh.stl", "output_file": "/out/frame.png"},
                "light": {"fill_light_intensity": 0.0},
                "preview": {"preview_mode": true, "preview_engine": "CYCLES"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.light.fill_light_intensity, 0.0);
        assert_eq!(config.light.key_light_intensity, 2.5);
        assert!(config.preview.preview_mode);
        assert_eq!(config.preview.preview_engine, RenderEngine::Cycles);
        assert_eq!(config.preview.preview_samples, 8);
    }

    #[test]
    fn test_missing_required_path_is_an_error() {
        let result: Result<Config, _> =
            serde_json::from_str(r#"{"paths": {"input_file": "/in/mesh.stl"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_engine_is_an_error() {
        let result: Result<Config, _> = serde_json::from_str(
            r#"{
                "paths": {"input_file": "/in/a.stl", "output_file": "/out/a.png"},
                "render": {"render_engine": "LUXCORE"}
            }"#,
        );
        assert!(result.is_err());
    }
}
