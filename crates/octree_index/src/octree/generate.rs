//! Generation: populate members from a uniform grid or a scalar field.
//!
//! Depth arguments are clamped into the octree's depth range and the clamp
//! is reported back in [`GenerationReport`]. Generation only inserts; it
//! never removes existing members.

use std::collections::HashSet;

use super::budget::{clamp_depth, Clamped};
use super::members::level_grid;
use super::Octree;
use crate::error::Result;
use crate::field::ScalarField;
use crate::node::OctreeNode;

/// Which cells `alg_generate_by_center` keeps, by the field value at the
/// cell center relative to the threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CenterSelection {
  pub smaller: bool,
  pub equal: bool,
  pub larger: bool,
}

impl CenterSelection {
  /// Cells whose center is below the threshold.
  pub const INSIDE: Self = Self {
    smaller: true,
    equal: false,
    larger: false,
  };

  /// Cells whose center is above the threshold.
  pub const OUTSIDE: Self = Self {
    smaller: false,
    equal: false,
    larger: true,
  };

  #[inline]
  pub fn accepts(&self, value: f64, threshold: f64) -> bool {
    (self.smaller && value < threshold)
      || (self.equal && value == threshold)
      || (self.larger && value > threshold)
  }
}

/// Which cells `alg_generate_by_corners` keeps, by how many of the 8
/// corners lie above the threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CornerSelection {
  /// No corner above.
  pub below: bool,
  /// Some corners above, some not. Only kept at the end depth.
  pub crossing: bool,
  /// All 8 corners above.
  pub above: bool,
}

impl CornerSelection {
  /// Only the finest band of cells straddling the threshold.
  pub const SURFACE: Self = Self {
    below: false,
    crossing: true,
    above: false,
  };

  /// Everything at or below the threshold surface, coarse inside.
  pub const SOLID: Self = Self {
    below: true,
    crossing: true,
    above: false,
  };
}

/// Classification of a cell against the threshold surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerClass {
  Below,
  Crossing,
  Above,
}

impl CornerClass {
  /// From the number of corners strictly above the threshold.
  pub fn from_count(above: usize) -> Self {
    match above {
      0 => Self::Below,
      8 => Self::Above,
      _ => Self::Crossing,
    }
  }
}

/// Depths actually used by a generation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationReport {
  pub start: Clamped<u8>,
  pub end: Clamped<u8>,
  /// Start and end were given in the wrong order and swapped.
  pub swapped: bool,
  /// Members that were not present before.
  pub nodes_added: usize,
}

impl GenerationReport {
  /// Any depth argument was changed before use.
  pub fn was_adjusted(&self) -> bool {
    self.swapped || self.start.was_clamped() || self.end.was_clamped()
  }

  fn single(depth: Clamped<u8>, nodes_added: usize) -> Self {
    Self {
      start: depth,
      end: depth,
      swapped: false,
      nodes_added,
    }
  }
}

impl Octree {
  /// Insert all `8^depth` cells at `depth`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::generate"))]
  pub fn alg_generate(&mut self, depth: u8) -> GenerationReport {
    let depth = clamp_depth(depth, self.min_depth(), self.max_depth());
    let added = self.add_nodes(level_grid(depth.applied));
    GenerationReport::single(depth, added)
  }

  /// Insert cells at `depth` whose center value passes `selection`.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "octree::generate_by_center")
  )]
  pub fn alg_generate_by_center(
    &mut self,
    field: &impl ScalarField,
    threshold: f64,
    depth: u8,
    selection: CenterSelection,
  ) -> GenerationReport {
    let depth = clamp_depth(depth, self.min_depth(), self.max_depth());
    let keep: Vec<OctreeNode> = level_grid(depth.applied)
      .filter(|n| selection.accepts(field.sample(self.config.node_center(n)), threshold))
      .collect();
    let added = self.add_nodes(keep);
    GenerationReport::single(depth, added)
  }

  /// Depth-adaptive generation by corner classification.
  ///
  /// Every cell at `start` is classified by its 8 corners. Below/above
  /// cells are kept per `selection`; crossing cells are split and their
  /// children classified again, down to `end`. Crossing cells at `end` are
  /// kept when `selection.crossing` is set. Pass `start == end` for a
  /// single uniform level.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "octree::generate_by_corners")
  )]
  pub fn alg_generate_by_corners(
    &mut self,
    field: &impl ScalarField,
    threshold: f64,
    start: u8,
    end: u8,
    selection: CornerSelection,
  ) -> Result<GenerationReport> {
    let swapped = start > end;
    let (lo, hi) = if swapped { (end, start) } else { (start, end) };
    let start = clamp_depth(lo, self.min_depth(), self.max_depth());
    let end = clamp_depth(hi, self.min_depth(), self.max_depth());

    let mut keep: Vec<OctreeNode> = Vec::new();
    let mut band: HashSet<OctreeNode> = HashSet::new();
    let mut level = start.applied;

    for n in level_grid(level) {
      self.classify_into(field, threshold, n, selection, &mut keep, &mut band);
    }

    while level < end.applied {
      level += 1;
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("refine_band", level, cells = band.len()).entered();
      let mut next = HashSet::with_capacity(band.len() * 4);
      for cell in band {
        for child in cell.children(1)? {
          self.classify_into(field, threshold, child, selection, &mut keep, &mut next);
        }
      }
      band = next;
    }

    if selection.crossing {
      keep.extend(band);
    }
    let added = self.add_nodes(keep);

    Ok(GenerationReport {
      start,
      end,
      swapped,
      nodes_added: added,
    })
  }

  /// Class of `node` by how many of its world-space corners exceed
  /// `threshold`.
  pub fn classify_corners(
    &self,
    field: &impl ScalarField,
    threshold: f64,
    node: &OctreeNode,
  ) -> CornerClass {
    let above = self
      .config
      .node_vertices(node)
      .iter()
      .filter(|&&p| field.sample(p) > threshold)
      .count();
    CornerClass::from_count(above)
  }

  fn classify_into(
    &self,
    field: &impl ScalarField,
    threshold: f64,
    node: OctreeNode,
    selection: CornerSelection,
    keep: &mut Vec<OctreeNode>,
    band: &mut HashSet<OctreeNode>,
  ) {
    match self.classify_corners(field, threshold, &node) {
      CornerClass::Below if selection.below => keep.push(node),
      CornerClass::Above if selection.above => keep.push(node),
      CornerClass::Crossing => {
        band.insert(node);
      }
      _ => {}
    }
  }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;
