//! OctreeConfig - depth range and world coordinate mapping.

use glam::DVec3;

use super::DAabb3;
use crate::error::{OctreeError, Result};
use crate::node::{OctreeNode, Rst, MAX_LEVEL};
use crate::topology::{Edge, Face, Vertex};

/// Default deepest level for a new octree.
pub const DEFAULT_MAX_DEPTH: u8 = 8;

/// Configuration for depth bounds and world coordinate mapping.
///
/// World space is `origin + rst * extent`, component-wise. A negative
/// extent mirrors that axis.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeConfig {
  /// World position of normalized `(0, 0, 0)`.
  pub origin: DVec3,

  /// World size of the normalized unit cube along each axis.
  pub extent: DVec3,

  /// Coarsest level members are expected at.
  pub min_depth: u8,

  /// Finest level members are expected at.
  pub max_depth: u8,
}

impl OctreeConfig {
  pub fn with_origin(mut self, origin: DVec3) -> Self {
    self.origin = origin;
    self
  }

  pub fn with_extent(mut self, extent: DVec3) -> Self {
    self.extent = extent;
    self
  }

  pub fn with_depth_range(mut self, min_depth: u8, max_depth: u8) -> Self {
    self.min_depth = min_depth;
    self.max_depth = max_depth;
    self
  }

  /// Check the depth range.
  pub fn validate(&self) -> Result<()> {
    validate_depth_range(self.min_depth, self.max_depth)
  }

  // =======================================================================
  // Space conversion
  // =======================================================================

  /// Normalized point to world space.
  #[inline]
  pub fn to_world(&self, p: Rst) -> DVec3 {
    self.origin + p.raw() * self.extent
  }

  /// World point to normalized space.
  ///
  /// Axes with zero extent map to non-finite coordinates.
  #[inline]
  pub fn to_rst(&self, world: DVec3) -> Rst {
    Rst::from_raw((world - self.origin) / self.extent)
  }

  /// World-space box covered by the whole octree.
  pub fn bounds(&self) -> DAabb3 {
    DAabb3::from_corners(self.origin, self.origin + self.extent)
  }

  // =======================================================================
  // Node geometry in world space
  // =======================================================================

  #[inline]
  pub fn node_center(&self, node: &OctreeNode) -> DVec3 {
    self.to_world(node.center())
  }

  #[inline]
  pub fn node_vertex(&self, node: &OctreeNode, v: Vertex) -> DVec3 {
    self.to_world(node.vertex(v))
  }

  /// All 8 corners in vertex order.
  pub fn node_vertices(&self, node: &OctreeNode) -> [DVec3; 8] {
    node.vertices().map(|p| self.to_world(p))
  }

  #[inline]
  pub fn node_face_center(&self, node: &OctreeNode, f: Face) -> DVec3 {
    self.to_world(node.face_center(f))
  }

  #[inline]
  pub fn node_edge_center(&self, node: &OctreeNode, e: Edge) -> DVec3 {
    self.to_world(node.edge_center(e))
  }

  /// World-space edge lengths of a node (absolute, per axis).
  #[inline]
  pub fn node_size(&self, node: &OctreeNode) -> DVec3 {
    (self.extent * node.size()).abs()
  }

  /// World-space volume of a node.
  pub fn node_volume(&self, node: &OctreeNode) -> f64 {
    self.node_size(node).element_product()
  }

  /// World-space box of a node.
  pub fn node_bounds(&self, node: &OctreeNode) -> DAabb3 {
    DAabb3::from_corners(
      self.to_world(node.min_corner()),
      self.to_world(node.max_corner()),
    )
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      origin: DVec3::ZERO,
      extent: DVec3::ONE,
      min_depth: 0,
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

/// `min <= max <= MAX_LEVEL`.
pub fn validate_depth_range(min_depth: u8, max_depth: u8) -> Result<()> {
  if min_depth > max_depth || max_depth > MAX_LEVEL {
    return Err(OctreeError::InvalidDepthRange {
      min: min_depth as u32,
      max: max_depth as u32,
    });
  }
  Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
