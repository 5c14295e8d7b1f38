//! Planar convex polygons, the faces a [`Mesh`](crate::mesh::Mesh) is made of.

use crate::float_types::{
    Real,
    parry3d::bounding_volume::Aabb,
};
use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use nalgebra::Point3;
use std::sync::OnceLock;

/// A polygon, defined by a list of vertices and the plane they lie on.
/// - `S` is the generic metadata type, stored as `Option<S>`.
#[derive(Debug, Clone)]
pub struct Polygon<S: Clone> {
    /// Vertices defining the polygon's shape, counter-clockwise seen from the front
    pub vertices: Vec<Vertex>,

    /// The plane on which this Polygon lies, used for splitting
    pub plane: Plane,

    /// Lazily‑computed axis‑aligned bounding box of the Polygon
    pub bounding_box: OnceLock<Aabb>,

    /// Generic metadata associated with the Polygon
    pub metadata: Option<S>,
}

impl<S: Clone + PartialEq> PartialEq for Polygon<S> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.plane == other.plane
            && self.metadata == other.metadata
    }
}

impl<S: Clone> Polygon<S> {
    /// Create a polygon from vertices, deriving its plane from their winding.
    pub fn new(vertices: Vec<Vertex>, metadata: Option<S>) -> Self {
        debug_assert!(vertices.len() >= 3, "degenerate polygon");

        let plane = Plane::from_vertices(&vertices);
        Self::with_plane(vertices, plane, metadata)
    }

    /// Create a polygon on a known plane (used for split fragments, which must
    /// keep their parent's plane exactly).
    pub const fn with_plane(vertices: Vec<Vertex>, plane: Plane, metadata: Option<S>) -> Self {
        Polygon {
            vertices,
            plane,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Reverse winding order, flip vertex normals, and flip the plane normal
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    /// Axis aligned bounding box of this Polygon (cached after first call)
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
            let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
            for v in &self.vertices {
                mins = mins.inf(&v.pos);
                maxs = maxs.sup(&v.pos);
            }
            Aabb::new(mins, maxs)
        })
    }

    /// Fan-triangulate the polygon.
    ///
    /// Every polygon produced by this crate is convex (primitive faces are
    /// convex and splitting a convex polygon by a plane yields convex pieces),
    /// so a fan from the first vertex is exact.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }
        let anchor = self.vertices[0];
        self.vertices[1..]
            .windows(2)
            .map(|pair| [anchor, pair[0], pair[1]])
            .collect()
    }

    /// Signed volume of the cone spanned by this polygon and the origin.
    ///
    /// Summing this over a closed, outward-oriented surface gives its enclosed
    /// volume (divergence theorem).
    pub fn signed_volume(&self) -> Real {
        self.triangulate()
            .iter()
            .map(|[a, b, c]| a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords)) / 6.0)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn pentagon() -> Polygon<&'static str> {
        let verts = (0..5)
            .map(|i| {
                let angle = i as Real * crate::float_types::TAU / 5.0;
                Vertex::new(Point3::new(angle.cos(), angle.sin(), 1.0), Vector3::z())
            })
            .collect();
        Polygon::new(verts, Some("lid"))
    }

    #[test]
    fn triangulate_fans_from_first_vertex() {
        let poly = pentagon();
        let tris = poly.triangulate();
        assert_eq!(tris.len(), 3);
        assert!(tris.iter().all(|t| t[0].pos == poly.vertices[0].pos));
    }

    #[test]
    fn flip_reverses_everything() {
        let mut poly = pentagon();
        let first = poly.vertices[0].pos;
        poly.flip();
        assert_eq!(poly.vertices[4].pos, first);
        assert!(poly.plane.normal().z < 0.0);
        assert!(poly.vertices.iter().all(|v| v.normal.z < 0.0));
        assert_eq!(poly.metadata, Some("lid"));
    }

    #[test]
    fn bounding_box_spans_vertices() {
        let bb = pentagon().bounding_box();
        assert!((bb.maxs.x - 1.0).abs() < 1e-12);
        assert!((bb.mins.z - 1.0).abs() < 1e-12);
        assert!((bb.maxs.z - 1.0).abs() < 1e-12);
    }
}
