use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

/// Immutable triangle list used for mesh-precision collision.
///
/// Vertices live in entity-local coordinates normalized into `[-0.5, 0.5]`,
/// so the entity's scale stretches them onto the sprite footprint. Meshes are
/// shared read-only between entities and never mutated by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionMesh {
    vertices: Vec<Vec2>,
    indices: Vec<[u32; 3]>,
}

impl CollisionMesh {
    pub fn new(vertices: Vec<Vec2>, indices: Vec<[u32; 3]>) -> Self {
        let vertex_count = vertices.len() as u32;
        assert!(
            indices.iter().flatten().all(|&index| index < vertex_count),
            "mesh index out of range"
        );
        Self { vertices, indices }
    }

    /// Convenience constructor for a single triangle.
    pub fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self::new(vec![a, b, c], vec![[0, 1, 2]])
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// All vertex positions mapped through the given local-to-world matrix.
    pub fn world_vertices(&self, local_to_world: &Affine2) -> Vec<Vec2> {
        self.vertices
            .iter()
            .map(|&vertex| local_to_world.transform_point2(vertex))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_vertices_apply_scale_and_translation() {
        let mesh = CollisionMesh::triangle(
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.0, 0.5),
        );
        let matrix = Affine2::from_scale_angle_translation(
            Vec2::splat(2.0),
            0.0,
            Vec2::new(10.0, 0.0),
        );
        let world = mesh.world_vertices(&matrix);
        assert_eq!(world[0], Vec2::new(9.0, -1.0));
        assert_eq!(world[2], Vec2::new(10.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "mesh index out of range")]
    fn out_of_range_index_is_rejected() {
        CollisionMesh::new(vec![Vec2::ZERO, Vec2::ONE], vec![[0, 1, 2]]);
    }
}
