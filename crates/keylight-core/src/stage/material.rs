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

//! Derives the subject material from the material config.

use crate::config::MaterialConfig;
use crate::scene::PbrMaterial;

/// Builds the single material bound to the subject mesh.
pub fn subject_material(config: &MaterialConfig) -> PbrMaterial {
    PbrMaterial {
        base_color: config.material_color,
        roughness: config.material_roughness,
        metallic: config.material_metallic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rgba;

    #[test]
    fn test_material_from_config() {
        let config = MaterialConfig {
            material_color: Rgba::new(0.1, 0.4, 0.9, 1.0),
            material_roughness: 0.25,
            material_metallic: 1.0,
        };
        let material = subject_material(&config);

        assert_eq!(material.base_color, Rgba::new(0.1, 0.4, 0.9, 1.0));
        assert_eq!(material.roughness, 0.25);
        assert_eq!(material.metallic, 1.0);
    }

    #[test]
    fn test_material_defaults_are_desaturated_red() {
        let material = subject_material(&MaterialConfig::default());

        assert_eq!(material.base_color, Rgba::new(0.8, 0.2, 0.2, 1.0));
        assert_eq!(material.roughness, 0.5);
        assert_eq!(material.metallic, 0.0);
    }
}
