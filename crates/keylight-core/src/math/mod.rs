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

//! Provides the mathematics primitives the staging pipeline is built on.
//!
//! This module contains the small set of types needed to derive camera and
//! light placement from mesh bounding geometry: a 3D vector, an axis-aligned
//! bounding box, and a linear-space RGBA color.
//!
//! All angular functions in this module operate in **radians**; angles that
//! arrive in degrees (config rotations, light rigs) are converted with
//! [`DEG_TO_RAD`] at the host boundary.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::PI;

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;

// --- Declare Sub-Modules ---

pub mod color;
pub mod geometry;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::color::Rgba;
pub use self::geometry::Aabb;
pub use self::vector::Vec3;

// --- Utility Functions ---

/// Checks whether two `f32` values are equal within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}
