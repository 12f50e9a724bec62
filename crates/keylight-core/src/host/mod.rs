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

//! Defines the contract between the staging pipeline and the render engine.
//!
//! The engine's scene graph, shading system, and renderers are host
//! capabilities that are not reimplemented here; everything the pipeline
//! needs from them is reachable through [`SceneHost`]. A host instance is
//! the scene: constructed fresh for every run, mutated in a fixed order by
//! the pipeline, and never shared. There is no process-global scene state
//! anywhere in this crate.

mod error;

pub use error::HostError;

use crate::math::{Rgba, Vec3};
use crate::scene::{Camera, ObjectTransform, PbrMaterial, RenderSettings, SunLight};
use std::path::{Path, PathBuf};

/// An opaque handle to a mesh object imported into the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(
    /// Identifier assigned by the host at import time.
    pub u32,
);

/// One mutable scene owned by the host render engine.
///
/// Implementations execute scene mutations against the real engine (or
/// record them, for tests). All methods are synchronous; `render_frame`
/// blocks until the frame is fully written. No method is ever retried —
/// any error is fatal to the run.
pub trait SceneHost {
    /// Resets the scene to empty. Called exactly once, before anything else.
    fn reset(&mut self) -> Result<(), HostError>;

    /// Imports the STL mesh at `path` and returns a handle to it.
    fn import_mesh(&mut self, path: &Path) -> Result<MeshHandle, HostError>;

    /// Applies the object transform (scale, location, center-of-mass origin
    /// recentering, Euler rotation) to an imported mesh.
    fn apply_transform(
        &mut self,
        mesh: MeshHandle,
        transform: &ObjectTransform,
    ) -> Result<(), HostError>;

    /// Returns the 8 bounding-box corners of the mesh in object space,
    /// after transform application.
    fn mesh_bounds(&self, mesh: MeshHandle) -> Result<[Vec3; 8], HostError>;

    /// Places the camera and makes it the scene's active camera. The host
    /// keeps the camera aimed at the subject mesh via a look-at constraint.
    fn place_camera(&mut self, camera: &Camera) -> Result<(), HostError>;

    /// Sets the flat world background color.
    fn set_background(&mut self, color: Rgba) -> Result<(), HostError>;

    /// Sets the ambient emission strength of the world background.
    fn set_ambient_strength(&mut self, strength: f32) -> Result<(), HostError>;

    /// Adds a sun light to the scene.
    fn add_sun_light(&mut self, light: &SunLight) -> Result<(), HostError>;

    /// Creates a fresh material from `material` and assigns it as the
    /// mesh's sole material slot.
    fn assign_material(
        &mut self,
        mesh: MeshHandle,
        material: &PbrMaterial,
    ) -> Result<(), HostError>;

    /// Applies the resolved render settings to the scene.
    fn configure_render(&mut self, settings: &RenderSettings) -> Result<(), HostError>;

    /// Renders one still frame and returns the path it was written to.
    /// Blocks until the file is fully written.
    fn render_frame(&mut self) -> Result<PathBuf, HostError>;
}
