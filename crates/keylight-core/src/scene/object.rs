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

//! Defines the transform applied to the subject mesh after import.

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// The user-defined transform of the subject mesh.
///
/// Applied by the host in a fixed order: scale and location first, then the
/// object origin is recentered on the mesh's center of mass, then the Euler
/// rotation. Rotation angles are kept in degrees here; conversion to radians
/// is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    /// Per-axis scale factors.
    pub scale: Vec3,
    /// World-space location offset.
    pub location: Vec3,
    /// XYZ Euler rotation in degrees.
    pub rotation_deg: Vec3,
}
