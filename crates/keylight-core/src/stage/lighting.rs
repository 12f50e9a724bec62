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

//! Derives the three-point light rig from the framing and the light config.

use super::Framing;
use crate::config::LightConfig;
use crate::math::Vec3;
use crate::scene::{SunLight, ThreePointRig};

/// The back light always gets this fraction of the fill intensity.
const BACK_TO_FILL_RATIO: f32 = 0.5;

// The rotations are fixed literals: for sun lights only the direction
// matters visually, and these three aim the rig at the subject for any
// mesh. Positions scale with the extent purely to anchor each light near
// the subject in the scene graph.
const KEY_ROTATION_DEG: Vec3 = Vec3::new(-60.0, 0.0, 45.0);
const FILL_ROTATION_DEG: Vec3 = Vec3::new(-60.0, 0.0, -45.0);
const BACK_ROTATION_DEG: Vec3 = Vec3::new(-30.0, 0.0, 180.0);

/// Builds the key/fill/back sun rig around the subject.
///
/// Key and fill intensities come from the config; the back light is derived
/// as half the fill intensity (including zero) to preserve the classic
/// lighting ratio.
pub fn three_point_rig(framing: &Framing, config: &LightConfig) -> ThreePointRig {
    let center = framing.center;
    let e = framing.max_extent;

    ThreePointRig {
        key: SunLight {
            position: center + Vec3::new(e, -e, e),
            rotation_deg: KEY_ROTATION_DEG,
            energy: config.key_light_intensity,
        },
        fill: SunLight {
            position: center + Vec3::new(-e, e, e),
            rotation_deg: FILL_ROTATION_DEG,
            energy: config.fill_light_intensity,
        },
        back: SunLight {
            position: center + Vec3::new(0.0, 0.0, 1.5 * e),
            rotation_deg: BACK_ROTATION_DEG,
            energy: config.fill_light_intensity * BACK_TO_FILL_RATIO,
        },
    }
}
