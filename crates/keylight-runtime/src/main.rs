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

//! The `keylight` binary: renders a configured still image of a mesh by
//! driving Blender in background mode.

mod run;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Render a lit, materialed, camera-framed still image of a mesh.
#[derive(Debug, Parser)]
#[command(name = "keylight", version, about)]
struct Args {
    /// Path to the YAML config file.
    #[arg(long = "config_file_path", visible_alias = "cfp", value_name = "FILE")]
    config_file_path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = run::load_config(&args.config_file_path)?;
    run::execute(&config)?;
    Ok(())
}
