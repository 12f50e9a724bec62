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

//! Selects the preview or final render settings.

use crate::config::Config;
use crate::scene::{ImageFormat, RenderSettings};
use std::path::{Path, PathBuf};

/// Inserted before the file extension of preview outputs.
const PREVIEW_SUFFIX: &str = "_preview";

/// Resolves the render settings for this run.
///
/// The branch is taken on `preview.preview_mode`: preview runs get the
/// preview resolution/engine/samples and a `_preview` output path; final
/// runs use the `render` section and the configured output path verbatim.
/// Either way the output is a single still PNG frame.
pub fn resolve_render_settings(config: &Config) -> RenderSettings {
    if config.preview.preview_mode {
        RenderSettings {
            output_path: preview_output_path(&config.paths.output_file),
            resolution_x: config.preview.preview_resolution_x,
            resolution_y: config.preview.preview_resolution_y,
            engine: config.preview.preview_engine,
            samples: config.preview.preview_samples,
            use_denoising: config.preview.preview_use_denoising,
            format: ImageFormat::Png,
        }
    } else {
        RenderSettings {
            output_path: config.paths.output_file.clone(),
            resolution_x: config.render.render_resolution_x,
            resolution_y: config.render.render_resolution_y,
            engine: config.render.render_engine,
            samples: config.render.samples,
            use_denoising: config.render.render_use_denoising,
            format: ImageFormat::Png,
        }
    }
}

/// Inserts the preview suffix between the file stem and the extension.
///
/// `/out/scene.png` becomes `/out/scene_preview.png`; a path without an
/// extension simply gets the suffix appended.
fn preview_output_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match output.extension() {
        Some(ext) => format!("{stem}{PREVIEW_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{PREVIEW_SUFFIX}"),
    };

    output.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::RenderEngine;

    fn config(preview_mode: bool) -> Config {
        serde_json::from_str(&format!(
            r#"{{
                "paths": {{"input_file": "/in/scene.stl", "output_file": "/out/scene.png"}},
                "preview": {{"preview_mode": {preview_mode}}}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_final_mode_settings() {
        let settings = resolve_render_settings(&config(false));

        assert_eq!(settings.output_path, PathBuf::from("/out/scene.png"));
        assert_eq!((settings.resolution_x, settings.resolution_y), (1920, 1080));
        assert_eq!(settings.engine, RenderEngine::Cycles);
        assert_eq!(settings.samples, 64);
        assert!(settings.use_denoising);
        assert_eq!(settings.format, ImageFormat::Png);
    }

    #[test]
    fn test_preview_mode_settings() {
        let settings = resolve_render_settings(&config(true));

        assert_eq!(settings.output_path, PathBuf::from("/out/scene_preview.png"));
        assert_eq!((settings.resolution_x, settings.resolution_y), (640, 360));
        assert_eq!(settings.engine, RenderEngine::EeveeNext);
        assert_eq!(settings.samples, 8);
        assert!(settings.use_denoising);
    }

    #[test]
    fn test_preview_with_path_traced_engine() {
        let config: Config = serde_json::from_str(
            r#"{
                "paths": {"input_file": "/in/scene.stl", "output_file": "/out/scene.png"},
                "preview": {"preview_mode": true, "preview_engine": "CYCLES"}
            }"#,
        )
        .unwrap();
        let settings = resolve_render_settings(&config);

        assert_eq!(settings.engine, RenderEngine::Cycles);
        assert_eq!(settings.samples, 8);
        assert!(settings.use_denoising);
    }

    #[test]
    fn test_preview_path_suffix() {
        assert_eq!(
            preview_output_path(Path::new("/out/scene.png")),
            PathBuf::from("/out/scene_preview.png")
        );
        assert_eq!(
            preview_output_path(Path::new("relative/frame.png")),
            PathBuf::from("relative/frame_preview.png")
        );
        assert_eq!(
            preview_output_path(Path::new("/out/noext")),
            PathBuf::from("/out/noext_preview")
        );
    }
}
