//! Narrow-phase geometric predicates.
//!
//! All tests are boolean contact checks: the detector only needs to know
//! *that* two shapes touch, classification and response live elsewhere.

use glam::{Affine2, Vec2};

use super::shapes::CollisionCircle;
use crate::core::mesh::CollisionMesh;

/// Whether the segment `a`-`b` crosses the circle's perimeter.
///
/// Solves the quadratic for the segment/circle intersection parameters and
/// accepts roots strictly inside `(0, 1)`. A degenerate zero-length segment
/// cannot cross anything and short-circuits before the division.
pub fn segment_intersects_circle(a: Vec2, b: Vec2, circle: &CollisionCircle) -> bool {
    let start = a - circle.center;
    let delta = (b - circle.center) - start;
    let qa = delta.length_squared();
    if qa < 1e-12 {
        return false;
    }
    let qb = 2.0 * start.dot(delta);
    let qc = start.length_squared() - circle.radius * circle.radius;
    let discriminant = qb * qb - 4.0 * qa * qc;
    if discriminant <= 0.0 {
        return false;
    }
    let root = discriminant.sqrt();
    let t1 = (-qb + root) / (2.0 * qa);
    let t2 = (-qb - root) / (2.0 * qa);
    (t1 > 0.0 && t1 < 1.0) || (t2 > 0.0 && t2 < 1.0)
}

/// Which side of the directed line `a`→`b` the point falls on.
fn side_of_line(a: Vec2, b: Vec2, point: Vec2) -> bool {
    (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x) > 0.0
}

/// Proper crossing test for segments `ab` and `cd`.
fn segments_cross(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    side_of_line(a, c, d) != side_of_line(b, c, d) && side_of_line(a, b, c) != side_of_line(a, b, d)
}

fn triangle_edges(triangle: [Vec2; 3]) -> [(Vec2, Vec2); 3] {
    let [a, b, c] = triangle;
    [(a, b), (b, c), (c, a)]
}

/// Whether any edge of one triangle crosses any edge of the other.
fn triangles_cross(first: [Vec2; 3], second: [Vec2; 3]) -> bool {
    for (a, b) in triangle_edges(first) {
        for (c, d) in triangle_edges(second) {
            if segments_cross(a, b, c, d) {
                return true;
            }
        }
    }
    false
}

fn world_triangle(vertices: &[Vec2], indices: [u32; 3]) -> [Vec2; 3] {
    indices.map(|index| vertices[index as usize])
}

/// Mesh-vs-mesh contact: edge crossing across every world triangle pair.
pub fn mesh_intersects_mesh(
    mesh_a: &CollisionMesh,
    world_a: &Affine2,
    mesh_b: &CollisionMesh,
    world_b: &Affine2,
) -> bool {
    let vertices_a = mesh_a.world_vertices(world_a);
    let vertices_b = mesh_b.world_vertices(world_b);
    for &tri_a in mesh_a.indices() {
        let first = world_triangle(&vertices_a, tri_a);
        for &tri_b in mesh_b.indices() {
            if triangles_cross(first, world_triangle(&vertices_b, tri_b)) {
                return true;
            }
        }
    }
    false
}

/// Mesh-vs-circle-cover contact.
///
/// An edge crossing a circle counts, and so does a circle sitting wholly
/// inside a triangle, detected by its center being on the same side of all
/// three edges.
pub fn mesh_intersects_circles(
    mesh: &CollisionMesh,
    world: &Affine2,
    circles: &[CollisionCircle],
) -> bool {
    let vertices = mesh.world_vertices(world);
    for &indices in mesh.indices() {
        let [a, b, c] = world_triangle(&vertices, indices);
        for circle in circles {
            if segment_intersects_circle(a, b, circle)
                || segment_intersects_circle(b, c, circle)
                || segment_intersects_circle(c, a, circle)
            {
                return true;
            }
            let side_ab = side_of_line(a, b, circle.center);
            let side_bc = side_of_line(b, c, circle.center);
            let side_ca = side_of_line(c, a, circle.center);
            if side_ab == side_bc && side_bc == side_ca {
                return true;
            }
        }
    }
    false
}

/// Circle-cover-vs-circle-cover contact: any pair within radius sum.
pub fn circles_overlap(a: &[CollisionCircle], b: &[CollisionCircle]) -> bool {
    a.iter()
        .any(|circle_a| b.iter().any(|circle_b| circle_a.overlaps(circle_b)))
}
