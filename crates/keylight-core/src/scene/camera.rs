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

//! Defines the camera description the staging pipeline produces.

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// The camera projection model.
///
/// The serialized names follow the host engine's identifiers so the values
/// can be passed through from the configuration file unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// Perspective projection.
    #[serde(rename = "PERSP")]
    Perspective,
    /// Orthographic projection.
    #[serde(rename = "ORTHO")]
    Orthographic,
}

/// A fully placed still camera.
///
/// The orientation is intentionally absent: the host aims the camera's
/// negative principal axis at the subject mesh through a look-at constraint
/// with a fixed up-axis convention, so only the position is derived here.
/// Placing the camera also makes it the scene's active camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World-space camera position.
    pub position: Vec3,
    /// Focal length in millimeters.
    pub lens_mm: f32,
    /// Projection model.
    pub projection: Projection,
    /// Far clip distance, scaled with the subject so large or slender
    /// objects are never cut off.
    pub clip_end: f32,
}
