//! Binary Space Partitioning (BSP) tree implementation
//!
//! The tree algorithms live behind [`BspOps`] so the boolean operations on
//! [`Mesh`](crate::mesh::Mesh) only ever talk to [`Node`]'s convenience methods.

pub mod node;
pub mod serial;
pub mod traits;

pub use node::Node;
pub use serial::SerialBspOps;
pub use traits::{BalancedSplittingStrategy, BspOps, SplittingPlaneStrategy};

use crate::mesh::polygon::Polygon;
use std::fmt::Debug;

impl<S: Clone + Send + Sync + Debug> Node<S> {
    pub(crate) fn ops() -> SerialBspOps<BalancedSplittingStrategy, S> {
        SerialBspOps::new()
    }

    /// Invert all polygons in the BSP tree (solid becomes empty space and vice versa)
    pub fn invert(&mut self) {
        Self::ops().invert(self);
    }

    /// Recursively remove all polygons that are inside this BSP tree
    pub fn clip_polygons(&self, polygons: &[Polygon<S>]) -> Vec<Polygon<S>> {
        Self::ops().clip_polygons(self, polygons)
    }

    /// Remove all polygons in this BSP tree that are inside the other BSP tree
    pub fn clip_to(&mut self, bsp: &Node<S>) {
        Self::ops().clip_to(self, bsp);
    }

    /// Return all polygons in this BSP tree
    pub fn all_polygons(&self) -> Vec<Polygon<S>> {
        Self::ops().all_polygons(self)
    }

    /// Build a BSP tree from the given polygons
    pub fn build(&mut self, polygons: &[Polygon<S>]) {
        Self::ops().build(self, polygons);
    }
}
