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

//! Defines the sun-light types staged by the lighting component.

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// A sun-type (directional, infinite-distance) light.
///
/// For a sun light only the rotation determines the lighting result; the
/// position is still set to anchor the light conceptually near the subject
/// and to keep the scene readable when opened interactively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunLight {
    /// World-space anchor position.
    pub position: Vec3,
    /// XYZ Euler rotation in degrees. The host converts to radians.
    pub rotation_deg: Vec3,
    /// Light energy (host engine units).
    pub energy: f32,
}

/// The classic key/fill/back arrangement produced by the lighting component.
///
/// The back light's energy is always exactly half of the fill light's; this
/// coupling preserves the lighting ratio and is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreePointRig {
    /// The dominant light defining the main highlight.
    pub key: SunLight,
    /// The softer light filling in the key light's shadows.
    pub fill: SunLight,
    /// The rim light separating the subject's silhouette from the
    /// background.
    pub back: SunLight,
}

impl ThreePointRig {
    /// Returns the three lights in staging order: key, fill, back.
    pub fn lights(&self) -> [&SunLight; 3] {
        [&self.key, &self.fill, &self.back]
    }
}
