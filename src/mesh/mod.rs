//! `Mesh` struct and implementations of the `CSGOps` trait for `Mesh`

use crate::float_types::{
    Real,
    parry3d::bounding_volume::{Aabb, BoundingVolume},
};
use crate::mesh::{bsp::Node, plane::Plane, polygon::Polygon};
use crate::traits::CSGOps;
use nalgebra::{Matrix4, Point3};
use std::{fmt::Debug, sync::OnceLock};

pub mod bsp;
pub mod plane;
pub mod polygon;
pub mod shapes;
pub mod vertex;

/// A solid described by its boundary polygons.
///
/// Every polygon may carry its own metadata; polygons that survive a boolean
/// operation keep the metadata of the operand they came from, so the result
/// of carving a cutout still knows which faces the cutout produced.
#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// 3D polygons for volumetric shapes
    pub polygons: Vec<Polygon<S>>,

    /// Lazily calculated AABB that spans `polygons`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Build a Mesh from an existing polygon list
    pub fn from_polygons(polygons: &[Polygon<S>], metadata: Option<S>) -> Self {
        Mesh {
            polygons: polygons.to_vec(),
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Split polygons into (may_touch, cannot_touch) using bounding‑box tests
    fn partition_polys(
        polys: &[Polygon<S>],
        other_bb: &Aabb,
    ) -> (Vec<Polygon<S>>, Vec<Polygon<S>>) {
        polys
            .iter()
            .cloned()
            .partition(|p| p.bounding_box().intersects(other_bb))
    }

    /// Triangulate each polygon in the Mesh returning a Mesh containing triangles
    pub fn triangulate(&self) -> Mesh<S> {
        let triangles = self
            .polygons
            .iter()
            .flat_map(|poly| {
                poly.triangulate().into_iter().map(move |triangle| {
                    Polygon::with_plane(
                        triangle.to_vec(),
                        poly.plane.clone(),
                        poly.metadata.clone(),
                    )
                })
            })
            .collect::<Vec<_>>();

        Mesh::from_polygons(&triangles, self.metadata.clone())
    }

    /// Enclosed volume, by the divergence theorem over the boundary polygons.
    ///
    /// Only meaningful for closed, outward-oriented surfaces; no check is made.
    /// Boolean results may contain T-junctions (an edge of one polygon ending
    /// midway along a neighbour's edge). The surface still closes, so the sum
    /// is exact, but the mesh is not edge-manifold and nothing here repairs it.
    pub fn volume(&self) -> Real {
        self.polygons.iter().map(Polygon::signed_volume).sum()
    }

    /// Total area of all boundary polygons.
    pub fn surface_area(&self) -> Real {
        self.polygons
            .iter()
            .flat_map(|p| p.triangulate())
            .map(|[a, b, c]| (b.pos - a.pos).cross(&(c.pos - a.pos)).norm() * 0.5)
            .sum()
    }
}

impl<S: Clone + Send + Sync + Debug + PartialEq> Mesh<S> {
    /// Polygons tagged with exactly `tag`.
    pub fn polygons_tagged<'a>(&'a self, tag: &'a S) -> impl Iterator<Item = &'a Polygon<S>> + 'a {
        self.polygons
            .iter()
            .filter(move |p| p.metadata.as_ref() == Some(tag))
    }
}

impl<S: Clone + Send + Sync + Debug> CSGOps for Mesh<S> {
    /// Returns a new empty Mesh
    fn new() -> Self {
        Mesh {
            polygons: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Return a new Mesh representing union of the two Meshes.
    ///
    /// ```text
    /// let c = a.union(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |       +----+
    ///     +----+--+    |       +----+       |
    ///          |   b   |            |   c   |
    ///          |       |            |       |
    ///          +-------+            +-------+
    /// ```
    fn union(&self, other: &Mesh<S>) -> Mesh<S> {
        // avoid splitting obvious non‑intersecting faces
        let (a_clip, a_passthru) =
            Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, b_passthru) =
            Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::from_polygons(&a_clip);
        let mut b = Node::from_polygons(&b_clip);

        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());

        let mut final_polys = a.all_polygons();
        final_polys.extend(a_passthru);
        final_polys.extend(b_passthru);

        Mesh {
            polygons: final_polys,
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        }
    }

    /// Return a new Mesh representing difference of the two Meshes.
    ///
    /// ```text
    /// let c = a.difference(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |    +--+
    ///     +----+--+    |       +----+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn difference(&self, other: &Mesh<S>) -> Mesh<S> {
        // avoid splitting obvious non‑intersecting faces
        let (a_clip, a_passthru) =
            Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, _b_passthru) =
            Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::from_polygons(&a_clip);
        let mut b = Node::from_polygons(&b_clip);

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());
        a.invert();

        let mut final_polys = a.all_polygons();
        final_polys.extend(a_passthru);

        Mesh {
            polygons: final_polys,
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        }
    }

    /// Return a new Mesh representing intersection of the two Meshes.
    ///
    /// ```text
    /// let c = a.intersect(b);
    ///     +-------+
    ///     |       |
    ///     |   a   |
    ///     |    +--+----+   =   +--+
    ///     +----+--+    |       +--+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn intersection(&self, other: &Mesh<S>) -> Mesh<S> {
        let mut a = Node::from_polygons(&self.polygons);
        let mut b = Node::from_polygons(&other.polygons);

        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(&b.all_polygons());
        a.invert();

        Mesh {
            polygons: a.all_polygons(),
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        }
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to the mesh.
    ///
    /// A transform that mirrors space (negative determinant) also reverses the
    /// winding of every polygon so the surface keeps pointing outwards.
    fn transform(&self, mat: &Matrix4<Real>) -> Mesh<S> {
        let normal_matrix = mat
            .try_inverse()
            .map(|inv| inv.transpose())
            .unwrap_or_else(Matrix4::identity);
        let mirrors = mat.fixed_view::<3, 3>(0, 0).into_owned().determinant() < 0.0;
        let mut mesh = self.clone();

        for poly in &mut mesh.polygons {
            for vert in &mut poly.vertices {
                let homog_pos = mat * vert.pos.to_homogeneous();
                if let Some(pos) = Point3::from_homogeneous(homog_pos) {
                    vert.pos = pos;
                }
                let normal = normal_matrix.transform_vector(&vert.normal);
                vert.normal = normal.try_normalize(Real::EPSILON).unwrap_or(normal);
            }
            if mirrors {
                poly.vertices.reverse();
            }

            // keep the cached plane and box consistent with the new vertex positions
            poly.plane = Plane::from_vertices(&poly.vertices);
            poly.bounding_box = OnceLock::new();
        }

        mesh.bounding_box = OnceLock::new();
        mesh
    }

    /// Returns a [`parry3d::bounding_volume::Aabb`] indicating the 3D bounds of all `polygons`.
    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut polys = self.polygons.iter();
            let Some(first) = polys.next() else {
                // no polygons: a trivial AABB at origin
                return Aabb::new(Point3::origin(), Point3::origin());
            };
            polys.fold(first.bounding_box(), |acc, p| acc.merged(&p.bounding_box()))
        })
    }

    /// Invalidates object's cached bounding box.
    fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// Invert this Mesh (flip inside vs. outside)
    fn inverse(&self) -> Mesh<S> {
        let mut mesh = self.clone();
        for p in &mut mesh.polygons {
            p.flip();
        }
        mesh
    }
}
