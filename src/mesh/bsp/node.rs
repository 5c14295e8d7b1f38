//! The BSP tree itself: one splitting plane per node, the polygons lying on it,
//! and the two half-space subtrees.

use crate::mesh::bsp::traits::BspOps;
use crate::mesh::plane::Plane;
use crate::mesh::polygon::Polygon;
use std::fmt::Debug;

/// One node of a solid's BSP tree.
///
/// `front` holds everything on the outward side of `plane`, `back` everything
/// behind it. A node without a `back` child is solid behind its plane; one
/// without a `front` child is empty space in front of it.
#[derive(Debug, Clone)]
pub struct Node<S: Clone> {
    /// `None` until the node has been built from at least one polygon.
    pub plane: Option<Plane>,
    pub front: Option<Box<Node<S>>>,
    pub back: Option<Box<Node<S>>>,
    /// Polygons coplanar with `plane`, facing either way.
    pub polygons: Vec<Polygon<S>>,
}

impl<S: Clone + Send + Sync + Debug> Default for Node<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Node<S> {
    /// An empty tree, which clips nothing.
    pub const fn new() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    /// Build a tree over the boundary polygons of a closed solid.
    pub fn from_polygons(polygons: &[Polygon<S>]) -> Self {
        let mut node = Self::new();
        if !polygons.is_empty() {
            Self::ops().build(&mut node, polygons);
        }
        node
    }
}
