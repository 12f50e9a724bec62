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

//! Run bookkeeping: config loading, logging, timing, and pipeline wiring.

use anyhow::{bail, Context, Result};
use keylight_blender::BlenderHost;
use keylight_core::{stage, Config};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Loads and validates the YAML configuration.
///
/// A missing file is rejected up front with a descriptive error so nothing
/// is staged against the host for a run that can never succeed.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.is_file() {
        bail!(
            "Config file '{}' not found! Keylight can not be executed.",
            path.display()
        );
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    let config: Config = serde_yaml::from_str(&text)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    Ok(config)
}

/// Executes one pipeline run against a fresh Blender host.
pub fn execute(config: &Config) -> Result<PathBuf> {
    let started = Instant::now();
    log::info!("================ KEYLIGHT RUN STARTED ================");

    prepare_output_dir(&config.paths.output_file)?;
    echo_config(config)?;

    let mut host = BlenderHost::new(&config.paths.blender_executable);
    let frame = stage::render_still(&mut host, config).context("rendering pipeline failed")?;

    log::info!(
        "================ RUN FINISHED ({:.2}s) ================",
        started.elapsed().as_secs_f64()
    );
    Ok(frame)
}

/// Ensures the output directory exists before anything renders into it.
fn prepare_output_dir(output_file: &Path) -> Result<()> {
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory '{}'", parent.display())
            })?;
        }
    }
    Ok(())
}

/// Writes the effective (post-default) configuration beside the output
/// file, so every frame is reproducible from its sidecar.
fn echo_config(config: &Config) -> Result<()> {
    let path = config_echo_path(&config.paths.output_file);
    let yaml = serde_yaml::to_string(config).context("failed to serialize effective config")?;
    fs::write(&path, yaml)
        .with_context(|| format!("failed to write effective config to '{}'", path.display()))?;
    log::info!("Effective config written to {}", path.display());
    Ok(())
}

/// `/out/scene.png` gets its sidecar at `/out/scene_config.yaml`.
fn config_echo_path(output_file: &Path) -> PathBuf {
    let stem = output_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_file.with_file_name(format!("{stem}_config.yaml"))
}
