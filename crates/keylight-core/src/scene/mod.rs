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

//! Defines the typed scene model.
//!
//! These are the data structures the staging pipeline produces and a
//! [`SceneHost`](crate::host::SceneHost) consumes: a camera, a three-point
//! sun-light rig, a PBR material, a world background, an object transform,
//! and the resolved render settings. They carry no behavior of their own;
//! all derivation lives in [`stage`](crate::stage), and all execution lives
//! behind the host trait.

pub mod camera;
pub mod light;
pub mod material;
pub mod object;
pub mod settings;
pub mod world;

pub use camera::{Camera, Projection};
pub use light::{SunLight, ThreePointRig};
pub use material::PbrMaterial;
pub use object::ObjectTransform;
pub use settings::{ImageFormat, RenderEngine, RenderSettings};
pub use world::WorldBackground;
