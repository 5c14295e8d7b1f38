//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use csg_enclosure::{
    float_types::Real,
    mesh::{polygon::Polygon, vertex::Vertex},
};
use nalgebra::{Point3, Vector3};

/// Returns the approximate bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// for a set of polygons.
pub fn bounding_box<'a, S: Clone + 'a>(
    polygons: impl IntoIterator<Item = &'a Polygon<S>>,
) -> [Real; 6] {
    let mut bb = [
        Real::MAX,
        Real::MAX,
        Real::MAX,
        Real::MIN,
        Real::MIN,
        Real::MIN,
    ];

    for poly in polygons {
        for v in &poly.vertices {
            let p = v.pos;
            bb[0] = bb[0].min(p.x);
            bb[1] = bb[1].min(p.y);
            bb[2] = bb[2].min(p.z);
            bb[3] = bb[3].max(p.x);
            bb[4] = bb[4].max(p.y);
            bb[5] = bb[5].max(p.z);
        }
    }

    bb
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Volume shared by two axis-aligned boxes given as `(mins, maxs)`.
pub fn overlap_volume(
    a: (Point3<Real>, Point3<Real>),
    b: (Point3<Real>, Point3<Real>),
) -> Real {
    (0..3)
        .map(|axis| (a.1[axis].min(b.1[axis]) - a.0[axis].max(b.0[axis])).max(0.0))
        .product()
}

/// Volume of an axis-aligned box given as `(mins, maxs)`.
pub fn box_volume(b: (Point3<Real>, Point3<Real>)) -> Real {
    overlap_volume(b, b)
}

/// Helper to make a simple Polygon in 3D with given vertices.
pub fn make_polygon_3d(points: &[[Real; 3]]) -> Polygon<()> {
    let verts = points
        .iter()
        .map(|p| Vertex::new(Point3::new(p[0], p[1], p[2]), Vector3::z()))
        .collect();
    Polygon::new(verts, None)
}
