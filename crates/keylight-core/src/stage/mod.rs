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

//! The staging pipeline: parameters in, a rendered still out.
//!
//! This module owns the deterministic derivation of the whole scene from
//! two inputs: the subject mesh's bounding geometry and the configuration
//! tree. The orchestrator below mutates a fresh [`SceneHost`] in a fixed,
//! non-configurable order and fails fast: the first error terminates the
//! run with no rollback and no partial-output cleanup.

pub mod background;
pub mod camera;
pub mod framing;
pub mod lighting;
pub mod material;
pub mod settings;

pub use background::world_background;
pub use camera::camera_rig;
pub use framing::{Framing, MIN_EXTENT};
pub use lighting::three_point_rig;
pub use material::subject_material;
pub use settings::resolve_render_settings;

use crate::config::Config;
use crate::host::{HostError, SceneHost};
use crate::scene::ObjectTransform;
use std::path::PathBuf;

/// Runs the full pipeline against `host` and returns the rendered frame's
/// path.
///
/// The sequence is invariant for every valid configuration: reset the
/// scene, import and transform the mesh, derive the framing, then place
/// the camera, world background, ambient strength, light rig, and material,
/// and finally resolve the render settings and render. The host blocks in
/// `render_frame` until the frame is fully written.
pub fn render_still<H: SceneHost>(host: &mut H, config: &Config) -> Result<PathBuf, HostError> {
    host.reset()?;

    let mesh = host.import_mesh(&config.paths.input_file)?;
    let transform = ObjectTransform {
        scale: config.object_settings.mesh_scale,
        location: config.object_settings.mesh_location,
        rotation_deg: config.object_settings.rotation,
    };
    host.apply_transform(mesh, &transform)?;

    let corners = host.mesh_bounds(mesh)?;
    let framing = Framing::from_corners(&corners);
    log::debug!(
        "framing: center=({:.3}, {:.3}, {:.3}) max_extent={:.3}",
        framing.center.x,
        framing.center.y,
        framing.center.z,
        framing.max_extent
    );

    host.place_camera(&camera_rig(&framing, &config.camera))?;

    let world = world_background(config);
    host.set_background(world.color)?;
    host.set_ambient_strength(world.ambient_strength)?;

    let rig = three_point_rig(&framing, &config.light);
    for light in rig.lights() {
        host.add_sun_light(light)?;
    }

    host.assign_material(mesh, &subject_material(&config.material))?;

    let render_settings = resolve_render_settings(config);
    if render_settings.engine.is_path_traced() {
        log::debug!(
            "path tracing {} samples at {}x{} (denoising: {})",
            render_settings.samples,
            render_settings.resolution_x,
            render_settings.resolution_y,
            render_settings.use_denoising
        );
    }
    host.configure_render(&render_settings)?;
    let frame = host.render_frame()?;

    log::info!("Render saved to {}", frame.display());
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MeshHandle;
    use crate::math::{Rgba, Vec3};
    use crate::scene::{Camera, PbrMaterial, RenderSettings, SunLight};
    use std::path::Path;

    /// A host that records every operation name in call order.
    ///
    /// `ops` sits behind a `RefCell` so the read-only `mesh_bounds` query
    /// shows up in the recorded sequence too.
    #[derive(Default)]
    struct RecordingHost {
        ops: std::cell::RefCell<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingHost {
        fn record(&self, op: &str) -> Result<(), HostError> {
            self.ops.borrow_mut().push(op.to_string());
            if self.fail_on == Some(op) {
                return Err(HostError::Backend {
                    detail: format!("injected failure in {op}"),
                });
            }
            Ok(())
        }

        fn recorded(&self) -> Vec<String> {
            self.ops.borrow().clone()
        }
    }

    impl SceneHost for RecordingHost {
        fn reset(&mut self) -> Result<(), HostError> {
            self.record("reset")
        }

        fn import_mesh(&mut self, _path: &Path) -> Result<MeshHandle, HostError> {
            self.record("import_mesh")?;
            Ok(MeshHandle(0))
        }

        fn apply_transform(
            &mut self,
            _mesh: MeshHandle,
            _transform: &ObjectTransform,
        ) -> Result<(), HostError> {
            self.record("apply_transform")
        }

        fn mesh_bounds(&self, _mesh: MeshHandle) -> Result<[Vec3; 8], HostError> {
            self.record("mesh_bounds")?;
            // Unit cube centered at the origin.
            Ok(crate::math::Aabb::from_min_max(
                Vec3::new(-1.0, -1.0, -1.0),
                Vec3::new(1.0, 1.0, 1.0),
            )
            .corners())
        }

        fn place_camera(&mut self, _camera: &Camera) -> Result<(), HostError> {
            self.record("place_camera")
        }

        fn set_background(&mut self, _color: Rgba) -> Result<(), HostError> {
            self.record("set_background")
        }

        fn set_ambient_strength(&mut self, _strength: f32) -> Result<(), HostError> {
            self.record("set_ambient_strength")
        }

        fn add_sun_light(&mut self, _light: &SunLight) -> Result<(), HostError> {
            self.record("add_sun_light")
        }

        fn assign_material(
            &mut self,
            _mesh: MeshHandle,
            _material: &PbrMaterial,
        ) -> Result<(), HostError> {
            self.record("assign_material")
        }

        fn configure_render(&mut self, _settings: &RenderSettings) -> Result<(), HostError> {
            self.record("configure_render")
        }

        fn render_frame(&mut self) -> Result<PathBuf, HostError> {
            self.record("render_frame")?;
            Ok(PathBuf::from("/out/frame.png"))
        }
    }

    fn test_config(extra: &str) -> Config {
        serde_json::from_str(&format!(
            r#"{{
                "paths": {{"input_file": "/in/mesh.stl", "output_file": "/out/frame.png"}}
                {extra}
            }}"#
        ))
        .unwrap()
    }

    const EXPECTED_ORDER: &[&str] = &[
        "reset",
        "import_mesh",
        "apply_transform",
        "mesh_bounds",
        "place_camera",
        "set_background",
        "set_ambient_strength",
        "add_sun_light",
        "add_sun_light",
        "add_sun_light",
        "assign_material",
        "configure_render",
        "render_frame",
    ];

    #[test]
    fn test_pipeline_order_is_invariant() {
        // The same call sequence for a default run and a heavily customized
        // preview run.
        let configs = [
            test_config(""),
            test_config(
                r#", "preview": {"preview_mode": true, "preview_engine": "CYCLES"},
                   "light": {"fill_light_intensity": 0.0},
                   "object_settings": {"rotation": [0.0, 0.0, 90.0]}"#,
            ),
        ];

        for config in &configs {
            let mut host = RecordingHost::default();
            let frame = render_still(&mut host, config).unwrap();
            assert_eq!(frame, PathBuf::from("/out/frame.png"));
            assert_eq!(host.recorded(), EXPECTED_ORDER);
        }
    }

    #[test]
    fn test_pipeline_stops_at_first_failure() {
        let mut host = RecordingHost {
            fail_on: Some("place_camera"),
            ..RecordingHost::default()
        };

        let err = render_still(&mut host, &test_config("")).unwrap_err();
        assert!(matches!(err, HostError::Backend { .. }));

        // Nothing after the failing operation ran.
        assert_eq!(
            host.recorded(),
            ["reset", "import_mesh", "apply_transform", "mesh_bounds", "place_camera"]
        );
    }

    #[test]
    fn test_import_failure_leaves_scene_untouched_after_reset() {
        let mut host = RecordingHost {
            fail_on: Some("import_mesh"),
            ..RecordingHost::default()
        };

        let err = render_still(&mut host, &test_config("")).unwrap_err();
        assert!(matches!(err, HostError::Backend { .. }));
        assert_eq!(host.recorded(), ["reset", "import_mesh"]);
    }
}
