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

//! The Blender-backed scene host.

use crate::document::{SceneDoc, FORMAT_VERSION};
use crate::error::BlenderError;
use crate::invoke::run_blender;
use crate::stl::{self, MeshStats};

use keylight_core::host::{HostError, MeshHandle, SceneHost};
use keylight_core::math::{Aabb, Rgba, Vec3, DEG_TO_RAD};
use keylight_core::scene::{Camera, ObjectTransform, PbrMaterial, RenderSettings, SunLight};

use std::fs;
use std::path::{Path, PathBuf};

/// The embedded Python driver applied by `blender --python`.
const DRIVER_SOURCE: &str = include_str!("scripts/stage_scene.py");

/// The subject mesh as staged so far.
#[derive(Debug)]
struct StagedMesh {
    handle: MeshHandle,
    path: PathBuf,
    stats: MeshStats,
    transform: Option<ObjectTransform>,
}

/// A [`SceneHost`] that stages the scene in memory and executes it with a
/// single background Blender invocation on `render_frame`.
///
/// One host instance is one scene. Constructing a new host (or calling
/// `reset`) discards all staged state; nothing persists across runs except
/// the rendered frame on disk.
#[derive(Debug)]
pub struct BlenderHost {
    program: String,
    next_handle: u32,
    renders: u32,
    mesh: Option<StagedMesh>,
    camera: Option<Camera>,
    background: Option<Rgba>,
    ambient_strength: Option<f32>,
    lights: Vec<SunLight>,
    material: Option<PbrMaterial>,
    render: Option<RenderSettings>,
}

impl BlenderHost {
    /// Creates a host that will invoke the given Blender executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            next_handle: 0,
            renders: 0,
            mesh: None,
            camera: None,
            background: None,
            ambient_strength: None,
            lights: Vec::new(),
            material: None,
            render: None,
        }
    }

    fn staged_mesh(&self, handle: MeshHandle) -> Result<&StagedMesh, HostError> {
        match &self.mesh {
            Some(mesh) if mesh.handle == handle => Ok(mesh),
            _ => Err(HostError::UnknownMesh { handle }),
        }
    }

    fn missing(part: &str) -> HostError {
        HostError::IncompleteScene {
            missing: part.to_string(),
        }
    }

    /// Collects the staged parts into a complete scene document.
    ///
    /// Parts are checked in staging order, so the reported gap is always
    /// the first operation the pipeline skipped.
    fn staged_doc(&self) -> Result<SceneDoc, HostError> {
        let mesh = self.mesh.as_ref().ok_or_else(|| Self::missing("subject mesh"))?;
        let transform = mesh
            .transform
            .ok_or_else(|| Self::missing("object transform"))?;
        let camera = self.camera.ok_or_else(|| Self::missing("camera"))?;
        let color = self
            .background
            .ok_or_else(|| Self::missing("background color"))?;
        let ambient_strength = self
            .ambient_strength
            .ok_or_else(|| Self::missing("ambient strength"))?;
        if self.lights.is_empty() {
            return Err(Self::missing("lights"));
        }
        let material = self.material.ok_or_else(|| Self::missing("material"))?;
        let render = self
            .render
            .clone()
            .ok_or_else(|| Self::missing("render settings"))?;

        Ok(SceneDoc {
            format_version: FORMAT_VERSION,
            mesh_path: mesh.path.clone(),
            transform,
            camera,
            background: keylight_core::scene::WorldBackground {
                color,
                ambient_strength,
            },
            lights: self.lights.clone(),
            material,
            render,
        })
    }

    /// Writes the scene document and driver script into a unique staging
    /// directory and returns their paths.
    fn write_staging(&self, doc: &SceneDoc) -> Result<(PathBuf, PathBuf, PathBuf), BlenderError> {
        let dir = std::env::temp_dir().join(format!(
            "keylight-{}-{}",
            std::process::id(),
            self.renders
        ));
        fs::create_dir_all(&dir).map_err(|source| BlenderError::Staging {
            path: dir.clone(),
            source,
        })?;

        let params = dir.join("scene.json");
        let json = serde_json::to_string_pretty(doc).expect("scene document serializes");
        fs::write(&params, json).map_err(|source| BlenderError::Staging {
            path: params.clone(),
            source,
        })?;

        let driver = dir.join("stage_scene.py");
        fs::write(&driver, DRIVER_SOURCE).map_err(|source| BlenderError::Staging {
            path: driver.clone(),
            source,
        })?;

        Ok((dir, driver, params))
    }
}

impl SceneHost for BlenderHost {
    fn reset(&mut self) -> Result<(), HostError> {
        self.mesh = None;
        self.camera = None;
        self.background = None;
        self.ambient_strength = None;
        self.lights.clear();
        self.material = None;
        self.render = None;
        Ok(())
    }

    fn import_mesh(&mut self, path: &Path) -> Result<MeshHandle, HostError> {
        let stats = stl::probe(path).map_err(|err| HostError::MeshImport {
            path: path.display().to_string(),
            detail: err.to_string(),
        })?;
        log::debug!(
            "probed '{}': {} triangles, bounds {:?}",
            path.display(),
            stats.triangle_count,
            stats.bounds
        );

        let handle = MeshHandle(self.next_handle);
        self.next_handle += 1;
        self.mesh = Some(StagedMesh {
            handle,
            path: path.to_path_buf(),
            stats,
            transform: None,
        });
        Ok(handle)
    }

    fn apply_transform(
        &mut self,
        mesh: MeshHandle,
        transform: &ObjectTransform,
    ) -> Result<(), HostError> {
        self.staged_mesh(mesh)?;
        if let Some(staged) = &mut self.mesh {
            staged.transform = Some(*transform);
        }
        Ok(())
    }

    /// Returns the post-transform bounding-box corners in object space.
    ///
    /// The probe's raw vertex box goes through the same steps Blender
    /// applies to the object: per-axis scale, origin recentering on the
    /// surface center of mass, then the Euler rotation. The world-space
    /// location places the object but does not change its object-space
    /// bounds, so it is not applied here.
    fn mesh_bounds(&self, mesh: MeshHandle) -> Result<[Vec3; 8], HostError> {
        let staged = self.staged_mesh(mesh)?;
        let transform = staged.transform.unwrap_or(ObjectTransform {
            scale: Vec3::ONE,
            location: Vec3::ZERO,
            rotation_deg: Vec3::ZERO,
        });

        let origin = staged.stats.surface_centroid.scaled_by(transform.scale);
        let rotation_rad = transform.rotation_deg * DEG_TO_RAD;

        let transformed: Vec<Vec3> = staged
            .stats
            .bounds
            .corners()
            .iter()
            .map(|corner| {
                (corner.scaled_by(transform.scale) - origin).rotated_euler_xyz(rotation_rad)
            })
            .collect();

        Ok(Aabb::from_points(&transformed)
            .expect("eight corners are never empty")
            .corners())
    }

    fn place_camera(&mut self, camera: &Camera) -> Result<(), HostError> {
        self.camera = Some(*camera);
        Ok(())
    }

    fn set_background(&mut self, color: Rgba) -> Result<(), HostError> {
        self.background = Some(color);
        Ok(())
    }

    fn set_ambient_strength(&mut self, strength: f32) -> Result<(), HostError> {
        self.ambient_strength = Some(strength);
        Ok(())
    }

    fn add_sun_light(&mut self, light: &SunLight) -> Result<(), HostError> {
        self.lights.push(*light);
        Ok(())
    }

    fn assign_material(
        &mut self,
        mesh: MeshHandle,
        material: &PbrMaterial,
    ) -> Result<(), HostError> {
        self.staged_mesh(mesh)?;
        self.material = Some(*material);
        Ok(())
    }

    fn configure_render(&mut self, settings: &RenderSettings) -> Result<(), HostError> {
        self.render = Some(settings.clone());
        Ok(())
    }

    fn render_frame(&mut self) -> Result<PathBuf, HostError> {
        let doc = self.staged_doc()?;
        self.renders += 1;

        let (dir, driver, params) = self.write_staging(&doc).map_err(HostError::from)?;
        let result = run_blender(&self.program, &driver, &params);

        if let Err(err) = fs::remove_dir_all(&dir) {
            log::warn!("could not remove staging dir '{}': {err}", dir.display());
        }
        result.map_err(HostError::from)?;

        let frame = doc.render.output_path;
        if !frame.exists() {
            return Err(BlenderError::MissingFrame { path: frame }.into());
        }
        Ok(frame)
    }
}
