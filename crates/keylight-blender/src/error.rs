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

//! Defines the error type for the Blender backend.

use keylight_core::HostError;
use std::path::PathBuf;
use thiserror::Error;

/// An error raised while staging for or invoking Blender.
#[derive(Debug, Error)]
pub enum BlenderError {
    /// The Blender executable could not be started.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        /// The executable that failed to start.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Blender ran but exited with a failure status.
    #[error("'{program}' exited with {status}: {stderr_tail}")]
    Exited {
        /// The executable that failed.
        program: String,
        /// The exit status, as reported by the OS.
        status: String,
        /// The last lines of Blender's stderr.
        stderr_tail: String,
    },
    /// A staging file (scene document or driver script) could not be
    /// written.
    #[error("failed to write staging file '{path}': {source}")]
    Staging {
        /// The staging path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Blender reported success but the frame is not on disk.
    #[error("render finished but produced no frame at '{path}'")]
    MissingFrame {
        /// The expected output path.
        path: PathBuf,
    },
}

impl From<BlenderError> for HostError {
    fn from(err: BlenderError) -> Self {
        HostError::Backend {
            detail: err.to_string(),
        }
    }
}
