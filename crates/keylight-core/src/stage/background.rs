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

//! Derives the world background from the config.

use crate::config::Config;
use crate::scene::WorldBackground;

/// Builds the world background for the scene.
///
/// This component owns both halves of the ambient world: the flat
/// background color (top-level `background_color`) and the ambient emission
/// strength (`light.ambient_light_strength`).
pub fn world_background(config: &Config) -> WorldBackground {
    WorldBackground {
        color: config.background_color,
        ambient_strength: config.light.ambient_light_strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rgba;

    fn config_json(body: &str) -> Config {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_world_background_defaults() {
        let config = config_json(
            r#"{"paths": {"input_file": "/in/a.stl", "output_file": "/out/a.png"}}"#,
        );
        let world = world_background(&config);

        assert_eq!(world.color, Rgba::WHITE);
        assert_eq!(world.ambient_strength, 0.2);
    }

    #[test]
    fn test_world_background_from_config() {
        let config = config_json(
            r#"{
                "paths": {"input_file": "/in/a.stl", "output_file": "/out/a.png"},
                "background_color": [0.0, 0.0, 0.0, 1.0],
                "light": {"ambient_light_strength": 0.75}
            }"#,
        );
        let world = world_background(&config);

        assert_eq!(world.color, Rgba::BLACK);
        assert_eq!(world.ambient_strength, 0.75);
    }
}
