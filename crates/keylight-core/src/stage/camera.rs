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

//! Derives the camera placement from the framing and the camera config.

use super::Framing;
use crate::config::CameraConfig;
use crate::math::Vec3;
use crate::scene::Camera;

/// Far clip distance as a multiple of the subject's largest extent.
const CLIP_END_FACTOR: f32 = 10.0;

/// Places the camera relative to the subject.
///
/// The camera sits behind the subject on the -Y axis at twice the largest
/// extent, and above it by one extent; with the default field of view this
/// keeps the whole subject in frame regardless of its absolute size. The
/// far clip plane scales with the subject so large or slender meshes are
/// never clipped.
pub fn camera_rig(framing: &Framing, config: &CameraConfig) -> Camera {
    let extent = framing.max_extent;
    Camera {
        position: framing.center + Vec3::new(0.0, -2.0 * extent, extent),
        lens_mm: config.camera_lens,
        projection: config.camera_type,
        clip_end: CLIP_END_FACTOR * extent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Projection;
    use approx::assert_relative_eq;

    fn framing(center: Vec3, max_extent: f32) -> Framing {
        Framing { center, max_extent }
    }

    #[test]
    fn test_camera_offset_formula() {
        for extent in [0.01, 1.0, 2.0, 350.0] {
            let center = Vec3::new(1.0, -2.0, 3.0);
            let camera = camera_rig(&framing(center, extent), &CameraConfig::default());

            assert_eq!(
                camera.position,
                center + Vec3::new(0.0, -2.0 * extent, extent)
            );
            assert_relative_eq!(camera.clip_end, 10.0 * extent);
        }
    }

    #[test]
    fn test_camera_takes_lens_and_projection_from_config() {
        let config = CameraConfig {
            camera_lens: 85.0,
            camera_type: Projection::Orthographic,
        };
        let camera = camera_rig(&framing(Vec3::ZERO, 1.0), &config);

        assert_eq!(camera.lens_mm, 85.0);
        assert_eq!(camera.projection, Projection::Orthographic);
    }

    #[test]
    fn test_camera_defaults() {
        let camera = camera_rig(&framing(Vec3::ZERO, 1.0), &CameraConfig::default());

        assert_eq!(camera.lens_mm, 35.0);
        assert_eq!(camera.projection, Projection::Perspective);
    }
}
