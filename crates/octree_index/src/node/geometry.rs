//! Node positions in normalized space.
//!
//! Normalized ("rst") space is the unit cube `[0, 1]³` the codes live in.
//! It has its own type, [`Rst`], so it cannot be mixed up with world-space
//! `DVec3`s. [`OctreeConfig`](crate::octree::OctreeConfig) owns the only
//! conversions between the two.

use glam::DVec3;

use super::OctreeNode;
use crate::topology::{Direction, Edge, Face, Vertex};

/// A point in normalized octree space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rst(DVec3);

impl Rst {
  pub const ORIGIN: Self = Self(DVec3::ZERO);

  pub const fn new(r: f64, s: f64, t: f64) -> Self {
    Self(DVec3::new(r, s, t))
  }

  #[inline]
  pub fn r(self) -> f64 {
    self.0.x
  }

  #[inline]
  pub fn s(self) -> f64 {
    self.0.y
  }

  #[inline]
  pub fn t(self) -> f64 {
    self.0.z
  }

  #[inline]
  pub fn to_array(self) -> [f64; 3] {
    self.0.to_array()
  }

  /// True when the point lies inside the closed unit cube.
  pub fn is_in_unit_cube(self) -> bool {
    self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
  }

  /// Raw components, for crate-internal arithmetic only.
  #[inline]
  pub(crate) fn raw(self) -> DVec3 {
    self.0
  }

  #[inline]
  pub(crate) fn from_raw(v: DVec3) -> Self {
    Self(v)
  }
}

/// Edge length of a cell at `level` in normalized space.
#[inline]
pub fn cell_size(level: u8) -> f64 {
  0.5f64.powi(level as i32)
}

impl OctreeNode {
  /// Node at `level` containing a normalized point.
  ///
  /// Points on the upper boundary of the unit cube land one cell past the
  /// end and fail [`is_code_in_bounds`](Self::is_code_in_bounds).
  pub fn containing(point: Rst, level: u8) -> crate::Result<Self> {
    let scale = (level as f64).exp2();
    let [r, s, t] = point.to_array().map(|c| (c * scale).floor() as i128);
    Self::new(r, s, t, level)
  }

  /// Edge length of this cell in normalized space.
  #[inline]
  pub fn size(&self) -> f64 {
    cell_size(self.level)
  }

  /// Minimum corner (LBD).
  pub fn min_corner(&self) -> Rst {
    self.offset_point(0.0, Direction::ZERO)
  }

  /// Maximum corner (RFU).
  pub fn max_corner(&self) -> Rst {
    self.offset_point(1.0, Direction::ZERO)
  }

  pub fn center(&self) -> Rst {
    self.offset_point(0.5, Direction::ZERO)
  }

  pub fn vertex(&self, v: Vertex) -> Rst {
    self.offset_point(0.5, v.direction())
  }

  /// All 8 corners in vertex order.
  pub fn vertices(&self) -> [Rst; 8] {
    Vertex::ALL.map(|v| self.vertex(v))
  }

  pub fn face_center(&self, f: Face) -> Rst {
    self.offset_point(0.5, f.direction())
  }

  pub fn edge_center(&self, e: Edge) -> Rst {
    self.offset_point(0.5, e.direction())
  }

  /// `(code + base + d / 2) / 2^level` on every axis.
  fn offset_point(&self, base: f64, d: Direction) -> Rst {
    let size = self.size();
    let code = DVec3::new(self.r as f64, self.s as f64, self.t as f64);
    let dir = DVec3::new(d.r as f64, d.s as f64, d.t as f64);
    Rst((code + DVec3::splat(base) + dir * 0.5) * size)
  }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
