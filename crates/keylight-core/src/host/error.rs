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

//! Defines the error type for scene host operations.

use super::MeshHandle;
use std::fmt;

/// An error raised by a [`SceneHost`](super::SceneHost) operation.
///
/// Every variant is fatal to the run: the pipeline never catches, retries,
/// or cleans up after a host failure. A failed run may leave a partially
/// built scene behind in the host; since every run starts from a fresh
/// host, that state is never observed again.
#[derive(Debug)]
pub enum HostError {
    /// The mesh file could not be imported (missing, unreadable, or not a
    /// valid geometry file).
    MeshImport {
        /// The path that failed to import.
        path: String,
        /// The underlying I/O or format error.
        detail: String,
    },
    /// A mesh handle did not refer to an imported mesh.
    UnknownMesh {
        /// The handle that was not found.
        handle: MeshHandle,
    },
    /// An operation was attempted in an order the host cannot satisfy
    /// (e.g. rendering before a camera was placed).
    IncompleteScene {
        /// What was missing from the scene.
        missing: String,
    },
    /// An error originating from the host engine itself (spawn failure,
    /// non-zero exit, staging I/O).
    Backend {
        /// Detailed error message from the backend.
        detail: String,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::MeshImport { path, detail } => {
                write!(f, "Failed to import mesh from '{path}': {detail}")
            }
            HostError::UnknownMesh { handle } => {
                write!(f, "No imported mesh for handle {handle:?}")
            }
            HostError::IncompleteScene { missing } => {
                write!(f, "Scene is incomplete: {missing}")
            }
            HostError::Backend { detail } => {
                write!(f, "Host engine operation failed: {detail}")
            }
        }
    }
}

impl std::error::Error for HostError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_import_display() {
        let err = HostError::MeshImport {
            path: "/data/broken.stl".to_string(),
            detail: "file is truncated".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Failed to import mesh from '/data/broken.stl': file is truncated"
        );
    }

    #[test]
    fn test_unknown_mesh_display() {
        let err = HostError::UnknownMesh {
            handle: MeshHandle(7),
        };
        assert_eq!(format!("{err}"), "No imported mesh for handle MeshHandle(7)");
    }

    #[test]
    fn test_backend_display() {
        let err = HostError::Backend {
            detail: "blender exited with status 1".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Host engine operation failed: blender exited with status 1"
        );
    }
}
