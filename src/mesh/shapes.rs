//! 3D Shapes as `Mesh`s

use crate::float_types::{EPSILON, Real, TAU};
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use crate::traits::CSGOps;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Create a right prism (a box) that spans from (0, 0, 0)
    /// to (width, length, height). All dimensions must be >= 0.
    ///
    /// Every face is an outward-wound quad tagged with `metadata`.
    pub fn cuboid(width: Real, length: Real, height: Real, metadata: Option<S>) -> Mesh<S> {
        // Define the eight corner points of the prism.
        //    (x, y, z)
        let p000 = Point3::new(0.0, 0.0, 0.0);
        let p100 = Point3::new(width, 0.0, 0.0);
        let p110 = Point3::new(width, length, 0.0);
        let p010 = Point3::new(0.0, length, 0.0);

        let p001 = Point3::new(0.0, 0.0, height);
        let p101 = Point3::new(width, 0.0, height);
        let p111 = Point3::new(width, length, height);
        let p011 = Point3::new(0.0, length, height);

        let face = |corners: [Point3<Real>; 4], normal: Vector3<Real>| {
            Polygon::new(
                corners.iter().map(|&p| Vertex::new(p, normal)).collect(),
                metadata.clone(),
            )
        };

        let polygons = vec![
            // Bottom face (z=0, normal -Z)
            face([p000, p010, p110, p100], -Vector3::z()),
            // Top face (z=height, normal +Z)
            face([p001, p101, p111, p011], Vector3::z()),
            // Front face (y=0, normal -Y)
            face([p000, p100, p101, p001], -Vector3::y()),
            // Back face (y=length, normal +Y)
            face([p010, p011, p111, p110], Vector3::y()),
            // Left face (x=0, normal -X)
            face([p000, p001, p011, p010], -Vector3::x()),
            // Right face (x=width, normal +X)
            face([p100, p110, p111, p101], Vector3::x()),
        ];

        Mesh::from_polygons(&polygons, metadata)
    }

    pub fn cube(width: Real, metadata: Option<S>) -> Mesh<S> {
        Self::cuboid(width, width, width, metadata)
    }

    /// A box with the given extents whose centre sits at the origin.
    ///
    /// Callers position it by translating to the desired centre point.
    pub fn centered_cuboid(extents: Vector3<Real>, metadata: Option<S>) -> Mesh<S> {
        Self::cuboid(extents.x, extents.y, extents.z, metadata).translate(
            -extents.x * 0.5,
            -extents.y * 0.5,
            -extents.z * 0.5,
        )
    }

    /// A right circular cylinder standing on the XY plane, axis along +Z,
    /// from z = 0 to z = `height`.
    ///
    /// The round wall is approximated by `segments` flat quads. Fewer than three
    /// segments, or a non-positive radius/height, produce an empty mesh.
    pub fn cylinder(radius: Real, height: Real, segments: usize, metadata: Option<S>) -> Mesh<S> {
        if segments < 3 || radius < EPSILON || height < EPSILON {
            return Mesh::new();
        }

        let ring: Vec<(Real, Real)> = (0..segments)
            .map(|i| {
                let angle = (i as Real / segments as Real) * TAU;
                (angle.cos() * radius, angle.sin() * radius)
            })
            .collect();

        let mut polygons = Vec::with_capacity(segments + 2);

        // Bottom cap, wound clockwise seen from above so it faces -Z
        let bottom = ring
            .iter()
            .rev()
            .map(|&(x, y)| Vertex::new(Point3::new(x, y, 0.0), -Vector3::z()))
            .collect();
        polygons.push(Polygon::new(bottom, metadata.clone()));

        let top = ring
            .iter()
            .map(|&(x, y)| Vertex::new(Point3::new(x, y, height), Vector3::z()))
            .collect();
        polygons.push(Polygon::new(top, metadata.clone()));

        for i in 0..segments {
            let (x0, y0) = ring[i];
            let (x1, y1) = ring[(i + 1) % segments];
            let n0 = Vector3::new(x0, y0, 0.0) / radius;
            let n1 = Vector3::new(x1, y1, 0.0) / radius;
            polygons.push(Polygon::new(
                vec![
                    Vertex::new(Point3::new(x0, y0, 0.0), n0),
                    Vertex::new(Point3::new(x1, y1, 0.0), n1),
                    Vertex::new(Point3::new(x1, y1, height), n1),
                    Vertex::new(Point3::new(x0, y0, height), n0),
                ],
                metadata.clone(),
            ));
        }

        Mesh::from_polygons(&polygons, metadata)
    }
}
