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

//! Defines the scene-wide world background.

use crate::math::Rgba;
use serde::{Deserialize, Serialize};

/// The world background: a flat color plus an ambient emission strength.
///
/// Both values are owned by the background component, independent of any
/// physical light source in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBackground {
    /// The flat background color.
    pub color: Rgba,
    /// The ambient emission strength of the background.
    pub ambient_strength: f32,
}
