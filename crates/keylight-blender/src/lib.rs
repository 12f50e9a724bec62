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

//! # Keylight Blender
//!
//! The Blender-backed implementation of the
//! [`SceneHost`](keylight_core::SceneHost) contract.
//!
//! Blender owns the scene graph, the shading system, and the render
//! engines; none of that is reproduced here. Instead, every host operation
//! stages typed scene state in memory, and `render_frame` serializes the
//! staged scene to a JSON document, writes the embedded Python driver next
//! to it, and runs `blender` in background mode to apply the document and
//! write the still frame. Mesh bounding geometry is probed from the STL
//! file directly, so the staging pipeline never has to round-trip through
//! Blender to place the camera and lights.

#![warn(missing_docs)]

mod document;
mod error;
mod host;
mod invoke;
pub mod stl;

pub use document::{SceneDoc, FORMAT_VERSION};
pub use error::BlenderError;
pub use host::BlenderHost;
