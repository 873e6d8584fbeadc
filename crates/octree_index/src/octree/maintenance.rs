//! Maintenance passes that restore structural invariants.
//!
//! # Fixpoint passes
//!
//! `alg_simplify` and `alg_constrain` scan a read-only snapshot, collect one
//! [`Delta`], apply it, and repeat until a pass finds nothing to do or the
//! [`FixpointBudget`] runs out. The set is never mutated during a scan.
//!
//! # Cleaning passes
//!
//! `alg_clean_*` run once and only remove members:
//!
//! | pass                     | removes members that are                 |
//! |--------------------------|------------------------------------------|
//! | `alg_clean_nested`       | inside another member                    |
//! | `alg_clean_out_of_bounds`| outside `[0, 2^level)` on some axis      |
//! | `alg_clean_wrong_levels` | outside `[min_depth, max_depth]`         |

use web_time::Instant;

use super::budget::{clamp_depth, Clamped, FixpointBudget, PassStats};
use super::{Delta, Octree, TransitionGroup};
use crate::error::Result;
use crate::node::OctreeNode;
use crate::topology::Entity;

/// Outcome of a fixpoint pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixpointReport {
  /// The floor or gap argument after clamping.
  pub parameter: Clamped<u8>,
  pub stats: PassStats,
}

impl Octree {
  // =======================================================================
  // Simplify
  // =======================================================================

  /// Merge complete sibling families into their parent until none remain.
  ///
  /// Families whose members sit at or above `floor` are left alone.
  /// `floor` is clamped into the depth range.
  pub fn alg_simplify(&mut self, floor: u8) -> Result<FixpointReport> {
    self.alg_simplify_with_budget(floor, FixpointBudget::DEFAULT)
  }

  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::simplify"))]
  pub fn alg_simplify_with_budget(
    &mut self,
    floor: u8,
    budget: FixpointBudget,
  ) -> Result<FixpointReport> {
    let floor = clamp_depth(floor, self.min_depth(), self.max_depth());
    let stats = self.run_fixpoint(budget, |octree| octree.simplify_delta(floor.applied))?;
    Ok(FixpointReport {
      parameter: floor,
      stats,
    })
  }

  fn simplify_delta(&self, floor: u8) -> Result<Delta> {
    let mut delta = Delta::new();
    for node in self.iter() {
      if node.level() <= floor || delta.to_remove.contains(node) {
        continue;
      }
      let complete = node.siblings()?.iter().all(|s| self.contains(s));
      if complete {
        delta.push(&TransitionGroup::merge_family_of(*node)?);
      }
    }
    Ok(delta)
  }

  // =======================================================================
  // Constrain
  // =======================================================================

  /// Subdivide coarse members until no two members touching across a face
  /// or edge differ by more than `k` levels.
  ///
  /// `k` is clamped into `[0, max_depth - min_depth]`.
  pub fn alg_constrain(&mut self, k: u8) -> Result<FixpointReport> {
    self.alg_constrain_with_budget(k, FixpointBudget::DEFAULT)
  }

  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::constrain"))]
  pub fn alg_constrain_with_budget(
    &mut self,
    k: u8,
    budget: FixpointBudget,
  ) -> Result<FixpointReport> {
    let k = clamp_depth(k, 0, self.max_depth() - self.min_depth());
    let stats = self.run_fixpoint(budget, |octree| octree.constrain_delta(k.applied))?;
    Ok(FixpointReport { parameter: k, stats })
  }

  fn constrain_delta(&self, k: u8) -> Result<Delta> {
    let mut delta = Delta::new();
    for node in self.iter() {
      let up = node.level().saturating_sub(self.min_depth());
      for entity in Entity::FACE_AND_EDGE_DIRECTIONS {
        for coarse in node.all_bigger_nbrs(up, entity)? {
          let too_coarse = node.level() - coarse.level() > k;
          if too_coarse && self.contains(&coarse) && !delta.has_group(&coarse) {
            delta.push(&TransitionGroup::new_subdivide(coarse)?);
          }
        }
      }
    }
    Ok(delta)
  }

  /// Repeat `pass` until it yields an empty delta or the budget runs out.
  fn run_fixpoint(
    &mut self,
    budget: FixpointBudget,
    mut pass: impl FnMut(&Self) -> Result<Delta>,
  ) -> Result<PassStats> {
    let started = Instant::now();
    let mut stats = PassStats::default();

    while budget.allows(stats.passes) {
      stats.passes += 1;
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("pass", n = stats.passes, nodes = self.len()).entered();

      let delta = pass(self)?;
      if delta.is_empty() {
        stats.converged = true;
        break;
      }
      stats.subdivisions += delta.subdivisions;
      stats.merges += delta.merges;
      let (added, removed) = self.apply(delta);
      stats.nodes_added += added;
      stats.nodes_removed += removed;
    }

    stats.elapsed_us = started.elapsed().as_micros() as u64;
    Ok(stats)
  }

  // =======================================================================
  // Cleaning
  // =======================================================================

  /// Remove members that have a member ancestor. Returns how many were
  /// removed.
  ///
  /// Ancestors are only searched as far up as `min_depth`, so a member coarser
  /// than `min_depth` never counts as a container. Run
  /// [`alg_clean_wrong_levels`](Self::alg_clean_wrong_levels) first when
  /// such members may be present.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::clean_nested"))]
  pub fn alg_clean_nested(&mut self) -> Result<usize> {
    let mut delta = Delta::new();
    for node in self.iter() {
      let up = node.level().saturating_sub(self.min_depth());
      if node.all_parents(up)?.iter().any(|p| self.contains(p)) {
        delta.remove(*node);
      }
    }
    Ok(self.apply(delta).1)
  }

  /// Remove members whose code is outside `[0, 2^level)`.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "octree::clean_out_of_bounds")
  )]
  pub fn alg_clean_out_of_bounds(&mut self) -> usize {
    self.remove_where(|n| !n.is_code_in_bounds())
  }

  /// Remove members whose level is outside `[min_depth, max_depth]`.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "octree::clean_wrong_levels")
  )]
  pub fn alg_clean_wrong_levels(&mut self) -> usize {
    let (min, max) = (self.min_depth(), self.max_depth());
    self.remove_where(|n| !n.is_level_in_bounds(min, max))
  }

  fn remove_where(&mut self, reject: impl Fn(&OctreeNode) -> bool) -> usize {
    let mut delta = Delta::new();
    for node in self.iter().filter(|n| reject(n)) {
      delta.remove(*node);
    }
    self.apply(delta).1
  }

  // =======================================================================
  // Depth range
  // =======================================================================

  /// Set the depth range to the coarsest and finest member levels.
  ///
  /// Returns the new range, or `None` (range unchanged) when empty.
  pub fn alg_fix_depth(&mut self) -> Option<(u8, u8)> {
    let (min, max) = self.members.level_range()?;
    self.config.min_depth = min;
    self.config.max_depth = max;
    Some((min, max))
  }
}

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;
