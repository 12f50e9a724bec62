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

//! Defines the PBR material bound to the subject mesh.

use crate::math::Rgba;
use serde::{Deserialize, Serialize};

/// A physically-based material using the metallic-roughness workflow.
///
/// The subject mesh gets exactly one of these as its sole material slot;
/// there is no per-submesh or multi-material support. The host creates a
/// fresh named material asset from it on every run (the scene is always
/// reset first, so materials never accumulate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PbrMaterial {
    /// The base color (albedo) of the material.
    pub base_color: Rgba,
    /// The roughness factor (0.0 = smooth, 1.0 = rough).
    pub roughness: f32,
    /// The metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metallic: f32,
}
