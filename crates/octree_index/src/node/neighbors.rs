//! Neighbor finding on node addresses.
//!
//! All neighbor queries work on the address alone, without walking the
//! tree from the root:
//!
//! - **same level**: add the direction vector to the code
//! - **coarser**: take the same-level neighbor, then its ancestor. If that
//!   ancestor also contains the node itself the step never left the node's
//!   own lineage and the answer is [`OctreeError::AmbiguousNeighbor`].
//! - **finer**: expand the node's *own* children along the boundary facing
//!   the direction, then step each of them across. The neighbor's finer
//!   cells along the shared boundary mirror the node's own.
//!
//! ```text
//!   coarser (l = 1)         same level            finer (l = 1)
//!   ┌───────┬───┬───┐       ┌───┬───┐            ┌───┬─┬─┐
//!   │       │ n │   │       │ n │ R │            │   │x│ │
//!   │   ?   ├───┼───┤       └───┴───┘            │ n ├─┤ │
//!   │       │   │   │                            │   │x│ │
//!   └───────┴───┴───┘                            └───┴─┴─┘
//! ```
//!
//! Results are candidates; filter them against an octree's membership to
//! find real adjacency.

use std::collections::HashSet;

use super::OctreeNode;
use crate::error::{OctreeError, Result};
use crate::topology::Entity;

impl OctreeNode {
  /// Same-level neighbor towards `entity`. No range check.
  #[inline]
  pub fn nbr(&self, entity: impl Into<Entity>) -> Self {
    let d = entity.into().direction();
    Self::from_parts(
      self.r.wrapping_add(d.r as i128),
      self.s.wrapping_add(d.s as i128),
      self.t.wrapping_add(d.t as i128),
      self.level,
    )
  }

  /// All 26 same-level neighbors.
  pub fn nbrs(&self) -> Vec<Self> {
    self.nbrs_in(&Entity::NEIGHBOR_DIRECTIONS)
  }

  /// Same-level neighbors towards each of `directions`.
  pub fn nbrs_in(&self, directions: &[Entity]) -> Vec<Self> {
    directions.iter().map(|e| self.nbr(*e)).collect()
  }

  /// Coarser neighbor one level up towards `entity`.
  #[inline]
  pub fn bigger_nbr(&self, entity: impl Into<Entity>) -> Result<Self> {
    self.bigger_nbrs(1, entity)
  }

  /// Coarser neighbor `l` levels up towards `entity`.
  ///
  /// Fails with [`OctreeError::AmbiguousNeighbor`] when the candidate is an
  /// ancestor of this node, and with the [`parent`](Self::parent) errors
  /// when `l` is out of `1..=level`.
  pub fn bigger_nbrs(&self, l: u8, entity: impl Into<Entity>) -> Result<Self> {
    let entity = entity.into();
    let candidate = self.nbr(entity).parent(l)?;
    if candidate.is_parent_of(self) {
      return Err(OctreeError::AmbiguousNeighbor { node: *self, entity });
    }
    Ok(candidate)
  }

  /// Every valid coarser neighbor from 1 up to `l` levels, nearest first.
  ///
  /// Levels whose candidate falls back into this node's lineage are
  /// skipped.
  pub fn all_bigger_nbrs(&self, l: u8, entity: impl Into<Entity>) -> Result<Vec<Self>> {
    let entity = entity.into();
    if l > self.level {
      return Err(OctreeError::NoValidParent {
        level: self.level,
        requested: l,
      });
    }
    let mut out = Vec::with_capacity(l as usize);
    for i in 1..=l {
      match self.bigger_nbrs(i, entity) {
        Ok(n) => out.push(n),
        Err(OctreeError::AmbiguousNeighbor { .. }) => {}
        Err(e) => return Err(e),
      }
    }
    Ok(out)
  }

  /// Finer neighbors `l` levels down touching this node towards `entity`.
  pub fn smaller_nbrs(&self, l: u8, entity: impl Into<Entity>) -> Result<Vec<Self>> {
    let entity = entity.into();
    Ok(
      self
        .children_bounded(l, entity)?
        .into_iter()
        .map(|c| c.nbr(entity))
        .collect(),
    )
  }

  /// Union of [`smaller_nbrs`](Self::smaller_nbrs) for every depth in `1..=l`.
  pub fn all_smaller_nbrs(&self, l: u8, entity: impl Into<Entity>) -> Result<Vec<Self>> {
    let entity = entity.into();
    let mut out = Vec::new();
    for i in 1..=l {
      out.extend(self.smaller_nbrs(i, entity)?);
    }
    Ok(out)
  }

  /// Every candidate neighbor between `min_depth` and `max_depth`, over all
  /// 26 directions.
  pub fn sweep(&self, min_depth: u8, max_depth: u8) -> Result<HashSet<Self>> {
    self.sweep_with(
      min_depth,
      max_depth,
      SweepLevels::ALL,
      &Entity::NEIGHBOR_DIRECTIONS,
    )
  }

  /// Candidate neighbors restricted to some levels and directions.
  pub fn sweep_with(
    &self,
    min_depth: u8,
    max_depth: u8,
    levels: SweepLevels,
    directions: &[Entity],
  ) -> Result<HashSet<Self>> {
    let up = self.level.saturating_sub(min_depth);
    let down = max_depth.saturating_sub(self.level);
    let mut out = HashSet::new();

    for &entity in directions {
      if levels.same {
        out.insert(self.nbr(entity));
      }
      if levels.coarser {
        out.extend(self.all_bigger_nbrs(up, entity)?);
      }
      if levels.finer {
        out.extend(self.all_smaller_nbrs(down, entity)?);
      }
    }
    Ok(out)
  }

  /// True when the two cells touch (face, edge or vertex) without
  /// overlapping.
  pub fn is_neighbor_of(&self, other: &Self) -> bool {
    if self.level == other.level {
      let dr = self.r.wrapping_sub(other.r);
      let ds = self.s.wrapping_sub(other.s);
      let dt = self.t.wrapping_sub(other.t);
      return self != other && [dr, ds, dt].iter().all(|d| (-1..=1).contains(d));
    }
    let (fine, coarse) = if self.level > other.level {
      (self, other)
    } else {
      (other, self)
    };
    !fine.is_child_of(coarse)
      && Entity::NEIGHBOR_DIRECTIONS
        .iter()
        .any(|e| fine.nbr(*e).is_child_of(coarse))
  }
}

/// Which level bands a sweep collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepLevels {
  pub same: bool,
  pub coarser: bool,
  pub finer: bool,
}

impl SweepLevels {
  pub const ALL: Self = Self {
    same: true,
    coarser: true,
    finer: true,
  };

  pub const COARSER_ONLY: Self = Self {
    same: false,
    coarser: true,
    finer: false,
  };
}

#[cfg(test)]
#[path = "neighbors_test.rs"]
mod neighbors_test;
