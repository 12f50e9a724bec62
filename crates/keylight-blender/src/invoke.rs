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

//! Invokes Blender in background mode on the embedded driver script.

use crate::error::BlenderError;
use std::path::Path;
use std::process::Command;

/// How many trailing stderr lines survive into an error message.
const STDERR_TAIL_LINES: usize = 12;

/// Builds the argument list for one background invocation.
///
/// `--factory-startup` keeps user preferences and addons from leaking into
/// the run; everything after `--` belongs to the driver script.
pub(crate) fn blender_args(driver: &Path, params: &Path) -> Vec<String> {
    vec![
        "-b".to_string(),
        "--factory-startup".to_string(),
        "--python".to_string(),
        driver.display().to_string(),
        "--".to_string(),
        "--params".to_string(),
        params.display().to_string(),
    ]
}

/// Runs Blender synchronously and waits for it to exit.
///
/// The render happens inside this call; it returns only once Blender has
/// exited, i.e. once the frame is fully written or the run has failed.
pub(crate) fn run_blender(program: &str, driver: &Path, params: &Path) -> Result<(), BlenderError> {
    let args = blender_args(driver, params);
    log::info!("Invoking: {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(&args)
        .output()
        .map_err(|source| BlenderError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        return Err(BlenderError::Exited {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr_tail: stderr_tail(&stderr),
        });
    }

    log::debug!(
        "blender stdout: {}",
        String::from_utf8_lossy(&output.stdout).trim_end()
    );
    Ok(())
}

/// Keeps the last [`STDERR_TAIL_LINES`] non-empty lines of stderr.
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_blender_args_layout() {
        let args = blender_args(
            Path::new("/tmp/stage_scene.py"),
            Path::new("/tmp/scene.json"),
        );
        assert_eq!(
            args,
            [
                "-b",
                "--factory-startup",
                "--python",
                "/tmp/stage_scene.py",
                "--",
                "--params",
                "/tmp/scene.json",
            ]
        );
    }

    #[test]
    fn test_stderr_tail_keeps_last_lines() {
        let noisy: String = (0..40).map(|i| format!("line {i}\n")).collect();
        let tail = stderr_tail(&noisy);

        assert!(tail.starts_with("line 28"));
        assert!(tail.ends_with("line 39"));
        assert_eq!(tail.lines().count(), STDERR_TAIL_LINES);
    }

    #[test]
    fn test_stderr_tail_drops_blank_lines() {
        assert_eq!(stderr_tail("\n\nonly line\n\n"), "only line");
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let missing = "keylight-test-no-such-binary";
        let err = run_blender(
            missing,
            Path::new("/tmp/driver.py"),
            &PathBuf::from("/tmp/scene.json"),
        )
        .unwrap_err();

        match err {
            BlenderError::Spawn { program, .. } => assert_eq!(program, missing),
            other => panic!("expected Spawn error, got {other:?}"),
        }
    }
}
