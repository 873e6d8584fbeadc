//! Boolean add and subtract of a single node-shaped region.
//!
//! Subtracting `x` from a covering ancestor `A` (2D slice, `x` two levels
//! below `A`): `A` is replaced by its other children `c` and by the siblings
//! `s` of `x`, leaving `x` empty.
//!
//! ```text
//!   +---------------+        +---+---+-------+
//!   |               |        | x | s |       |
//!   |               |        +---+---+   c   |
//!   |       A       |   ->   | s | s |       |
//!   |               |        +---+---+-------+
//!   |               |        |       |       |
//!   |               |        |   c   |   c   |
//!   |               |        |       |       |
//!   +---------------+        +-------+-------+
//! ```
//!
//! Both ops compute a [`Delta`] against the current members and apply it once.

use super::{Delta, Octree};
use crate::error::Result;
use crate::node::OctreeNode;

impl Octree {
  /// Carve `node` out of the covered region.
  ///
  /// If `node` is a member it is simply removed. Otherwise every member
  /// descendant of `node` (down to `max_depth`) is removed, and every member
  /// ancestor (up to `min_depth`) is replaced by the siblings along the path
  /// down to `node`, leaving a node-shaped hole.
  ///
  /// Returns `(added, removed)`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::bool_sub"))]
  pub fn bool_sub(&mut self, node: OctreeNode) -> Result<(usize, usize)> {
    let mut delta = Delta::new();
    if self.contains(&node) {
      delta.remove(node);
      return Ok(self.apply(delta));
    }

    for d in self.member_descendants(&node) {
      delta.remove(d);
    }

    let up = node.level().saturating_sub(self.min_depth());
    for ancestor in node.all_parents(up)? {
      if !self.contains(&ancestor) {
        continue;
      }
      delta.remove(ancestor);
      let mut cur = node;
      while cur.level() > ancestor.level() {
        for sib in cur.siblings()? {
          delta.add(sib);
        }
        cur = cur.parent(1)?;
      }
    }

    Ok(self.apply(delta))
  }

  /// Fill the region of `node`.
  ///
  /// No-op when a member ancestor (down from `min_depth`) already covers
  /// it. Otherwise `node` is inserted and member descendants (down to
  /// `max_depth`) are removed.
  ///
  /// Returns `(added, removed)`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::bool_add"))]
  pub fn bool_add(&mut self, node: OctreeNode) -> Result<(usize, usize)> {
    let up = node.level().saturating_sub(self.min_depth());
    let covered = node.all_parents(up)?.iter().any(|p| self.contains(p));
    if covered {
      return Ok((0, 0));
    }

    let mut delta = Delta::new();
    delta.add(node);
    for d in self.member_descendants(&node) {
      delta.remove(d);
    }
    Ok(self.apply(delta))
  }

  /// Members strictly inside `node`, no deeper than `max_depth`.
  fn member_descendants(&self, node: &OctreeNode) -> Vec<OctreeNode> {
    let max_depth = self.max_depth();
    self
      .iter()
      .filter(|m| m.level() <= max_depth && m.is_child_of(node))
      .copied()
      .collect()
  }
}

#[cfg(test)]
#[path = "boolean_test.rs"]
mod boolean_test;
