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

//! Derives the framing quantities every placement is anchored to.

use crate::math::{Aabb, Vec3};

/// The smallest `max_extent` the pipeline will work with.
///
/// A degenerate mesh (all vertices coplanar on every axis, or a single
/// point) would otherwise place the camera at zero distance and collapse
/// the clip range. Floor it instead of failing: the frame will be empty but
/// well-formed.
pub const MIN_EXTENT: f32 = 1e-4;

/// The geometric anchor of a run: bounding-box center and largest extent.
///
/// Computed once per run from the host-reported bounding-box corners and
/// read-only afterward. Every camera and light offset downstream is a
/// multiple of `max_extent` added to `center`, which is what makes the
/// composition scale-invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    /// Arithmetic mean of the 8 bounding-box corners.
    pub center: Vec3,
    /// Largest axis-aligned span of the bounding box, floored at
    /// [`MIN_EXTENT`].
    pub max_extent: f32,
}

impl Framing {
    /// Derives the framing from the 8 bounding-box corners reported by the
    /// host for the subject mesh.
    pub fn from_corners(corners: &[Vec3; 8]) -> Self {
        let mut sum = Vec3::ZERO;
        for &corner in corners {
            sum = sum + corner;
        }

        let bounds = Aabb::from_points(corners).expect("eight corners are never empty");

        Self {
            center: sum * (1.0 / 8.0),
            max_extent: bounds.max_extent().max(MIN_EXTENT),
        }
    }
}
