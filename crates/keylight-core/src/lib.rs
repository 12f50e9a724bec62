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

//! # Keylight Core
//!
//! Foundational crate for the Keylight rendering pipeline: the scene model,
//! the math it is derived from, the configuration schema, the `SceneHost`
//! contract behind which the external render engine lives, and the staging
//! logic that turns a mesh bounding box plus a configuration tree into a
//! fully parameterized scene.

#![warn(missing_docs)]

pub mod config;
pub mod host;
pub mod math;
pub mod scene;
pub mod stage;

pub use config::Config;
pub use host::{HostError, MeshHandle, SceneHost};
