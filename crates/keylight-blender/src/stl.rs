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

//! Probes STL geometry files for the quantities scene staging needs.
//!
//! Only aggregate geometry is extracted: the axis-aligned bounding box and
//! the area-weighted surface centroid (the center of mass of the surface,
//! which the object origin is recentered on). The triangle soup itself is
//! never kept; Blender does the actual import.

use keylight_core::math::{Aabb, Vec3};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Binary STL layout: 80-byte header, u32 triangle count, then 50 bytes
/// per triangle (normal + 3 vertices as f32 triples + 2 attribute bytes).
const BINARY_HEADER_LEN: usize = 84;
const BINARY_TRIANGLE_LEN: usize = 50;

/// An error raised while probing an STL file.
#[derive(Debug, Error)]
pub enum StlError {
    /// The file could not be read at all.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The bytes are neither a valid binary nor a valid ASCII STL body.
    #[error("not a valid STL file: {0}")]
    Malformed(String),
    /// The file parsed but contains no triangles.
    #[error("mesh contains no triangles")]
    Empty,
}

/// Aggregate geometry of a probed mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    /// Axis-aligned bounding box over all vertices.
    pub bounds: Aabb,
    /// Area-weighted centroid of the surface.
    pub surface_centroid: Vec3,
    /// Number of triangles in the mesh.
    pub triangle_count: usize,
}

/// Probes the STL file at `path`.
pub fn probe(path: &Path) -> Result<MeshStats, StlError> {
    let bytes = fs::read(path).map_err(|source| StlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    probe_bytes(&bytes)
}

/// Probes an in-memory STL body, auto-detecting binary vs. ASCII.
///
/// The binary layout is authoritative: a body whose length matches the
/// declared triangle count is binary even if its header happens to start
/// with `solid`, which real exporters do produce.
pub fn probe_bytes(bytes: &[u8]) -> Result<MeshStats, StlError> {
    if bytes.len() >= BINARY_HEADER_LEN {
        let declared = u32::from_le_bytes(bytes[80..84].try_into().unwrap()) as usize;
        if bytes.len() == BINARY_HEADER_LEN + declared * BINARY_TRIANGLE_LEN {
            return stats_from_triangles(parse_binary(bytes, declared));
        }
    }

    if bytes.starts_with(b"solid") {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| StlError::Malformed("ASCII body is not valid UTF-8".to_string()))?;
        return stats_from_triangles(parse_ascii(text)?);
    }

    Err(StlError::Malformed(
        "length does not match the declared triangle count and the body is not ASCII".to_string(),
    ))
}

/// Iterates the vertices of a binary body. Length has been validated.
fn parse_binary(bytes: &[u8], count: usize) -> Vec<[Vec3; 3]> {
    let mut triangles = Vec::with_capacity(count);
    for i in 0..count {
        let record = &bytes[BINARY_HEADER_LEN + i * BINARY_TRIANGLE_LEN..];
        // Skip the 12-byte normal; vertices follow.
        let mut vertices = [Vec3::ZERO; 3];
        for (v, vertex) in vertices.iter_mut().enumerate() {
            let offset = 12 + v * 12;
            *vertex = Vec3::new(
                f32::from_le_bytes(record[offset..offset + 4].try_into().unwrap()),
                f32::from_le_bytes(record[offset + 4..offset + 8].try_into().unwrap()),
                f32::from_le_bytes(record[offset + 8..offset + 12].try_into().unwrap()),
            );
        }
        triangles.push(vertices);
    }
    triangles
}

/// Collects `vertex x y z` triples from an ASCII body.
fn parse_ascii(text: &str) -> Result<Vec<[Vec3; 3]>, StlError> {
    let mut vertices = Vec::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("vertex") {
            continue;
        }

        let mut component = |axis: &str| -> Result<f32, StlError> {
            tokens
                .next()
                .ok_or_else(|| StlError::Malformed(format!("vertex line missing {axis}")))?
                .parse::<f32>()
                .map_err(|_| StlError::Malformed(format!("vertex {axis} is not a number")))
        };
        vertices.push(Vec3::new(component("x")?, component("y")?, component("z")?));
    }

    if vertices.len() % 3 != 0 {
        return Err(StlError::Malformed(format!(
            "vertex count {} is not a multiple of 3",
            vertices.len()
        )));
    }

    Ok(vertices.chunks_exact(3).map(|v| [v[0], v[1], v[2]]).collect())
}

fn stats_from_triangles(triangles: Vec<[Vec3; 3]>) -> Result<MeshStats, StlError> {
    if triangles.is_empty() {
        return Err(StlError::Empty);
    }

    let mut min = triangles[0][0];
    let mut max = triangles[0][0];
    let mut weighted_centroid = Vec3::ZERO;
    let mut total_area = 0.0_f32;

    for [a, b, c] in &triangles {
        for vertex in [a, b, c] {
            min = min.min(*vertex);
            max = max.max(*vertex);
        }
        let area = 0.5 * (*b - *a).cross(*c - *a).length();
        weighted_centroid = weighted_centroid + (*a + *b + *c) * (area / 3.0);
        total_area += area;
    }

    let bounds = Aabb::from_min_max(min, max);
    // A fully degenerate surface (all triangles zero-area) has no defined
    // surface centroid; the box center is the sane anchor then.
    let surface_centroid = if total_area > f32::EPSILON {
        weighted_centroid * (1.0 / total_area)
    } else {
        bounds.center()
    };

    Ok(MeshStats {
        bounds,
        surface_centroid,
        triangle_count: triangles.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use keylight_core::math::approx_eq;

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    /// Builds a binary STL body from triangles.
    fn binary_stl(triangles: &[[Vec3; 3]]) -> Vec<u8> {
        let mut bytes = vec![0u8; 80];
        bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
        for triangle in triangles {
            bytes.extend_from_slice(&[0u8; 12]); // normal, unused
            for vertex in triangle {
                bytes.extend_from_slice(&vertex.x.to_le_bytes());
                bytes.extend_from_slice(&vertex.y.to_le_bytes());
                bytes.extend_from_slice(&vertex.z.to_le_bytes());
            }
            bytes.extend_from_slice(&[0u8; 2]); // attribute byte count
        }
        bytes
    }

    fn unit_triangle() -> [Vec3; 3] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_probe_binary_body() {
        let stats = probe_bytes(&binary_stl(&[unit_triangle()])).unwrap();

        assert_eq!(stats.triangle_count, 1);
        assert_eq!(stats.bounds.min, Vec3::ZERO);
        assert_eq!(stats.bounds.max, Vec3::new(1.0, 1.0, 0.0));
        // The centroid of a single triangle is its vertex mean.
        assert!(vec3_approx_eq(
            stats.surface_centroid,
            Vec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0)
        ));
    }

    #[test]
    fn test_probe_ascii_body() {
        let body = "\
solid demo
  facet normal 0 0 1
    outer loop
      vertex 0.0 0.0 0.0
      vertex 2.0 0.0 0.0
      vertex 0.0 2.0 0.0
    endloop
  endfacet
endsolid demo
";
        let stats = probe_bytes(body.as_bytes()).unwrap();

        assert_eq!(stats.triangle_count, 1);
        assert_eq!(stats.bounds.max, Vec3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_binary_wins_over_solid_prefix() {
        // A binary body whose 80-byte header begins with "solid".
        let mut bytes = binary_stl(&[unit_triangle()]);
        bytes[..5].copy_from_slice(b"solid");

        let stats = probe_bytes(&bytes).unwrap();
        assert_eq!(stats.triangle_count, 1);
    }

    #[test]
    fn test_truncated_binary_is_malformed() {
        let mut bytes = binary_stl(&[unit_triangle()]);
        bytes.truncate(bytes.len() - 10);

        assert!(matches!(
            probe_bytes(&bytes),
            Err(StlError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_mesh_is_an_error() {
        assert!(matches!(probe_bytes(&binary_stl(&[])), Err(StlError::Empty)));
    }

    #[test]
    fn test_surface_centroid_is_area_weighted() {
        // A big triangle far from a small one dominates the centroid.
        let small = unit_triangle();
        let big = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(14.0, 0.0, 0.0),
            Vec3::new(10.0, 4.0, 0.0),
        ];
        let stats = probe_bytes(&binary_stl(&[small, big])).unwrap();

        // Big triangle area 8 vs. 0.5; its centroid is (11.333, 1.333, 0).
        assert!(stats.surface_centroid.x > 10.0);
    }

    #[test]
    fn test_probe_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.stl");
        std::fs::write(&path, binary_stl(&[unit_triangle()])).unwrap();

        let stats = probe(&path).unwrap();
        assert_eq!(stats.triangle_count, 1);

        let missing = probe(&dir.path().join("nope.stl"));
        assert!(matches!(missing, Err(StlError::Io { .. })));
    }
}
