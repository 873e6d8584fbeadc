//! Octree - the materialized node set with its depth range and world mapping.
//!
//! Plain mutation never enforces structural invariants. Nesting, out-of-range
//! codes, wrong levels and imbalance are restored by the `alg_*` passes in
//! [`maintenance`](super::maintenance).

use std::collections::HashSet;

use glam::DVec3;

use super::config::validate_depth_range;
use super::{DAabb3, Delta, Members, OctreeConfig, TransitionGroup};
use crate::error::{OctreeError, Result};
use crate::node::OctreeNode;

/// Sparse octree over a world-space box.
#[derive(Clone, Debug, Default)]
pub struct Octree {
  pub(super) config: OctreeConfig,
  pub(super) members: Members,
  pub(super) selected: HashSet<OctreeNode>,
}

impl Octree {
  pub fn new(config: OctreeConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self {
      config,
      members: Members::new(),
      selected: HashSet::new(),
    })
  }

  // =======================================================================
  // Configuration
  // =======================================================================

  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  #[inline]
  pub fn min_depth(&self) -> u8 {
    self.config.min_depth
  }

  #[inline]
  pub fn max_depth(&self) -> u8 {
    self.config.max_depth
  }

  /// Existing members are left alone; run `alg_clean_wrong_levels`
  /// afterwards if they must fit the new range.
  pub fn set_min_depth(&mut self, min_depth: u8) -> Result<()> {
    self.set_depth_range(min_depth, self.config.max_depth)
  }

  pub fn set_max_depth(&mut self, max_depth: u8) -> Result<()> {
    self.set_depth_range(self.config.min_depth, max_depth)
  }

  pub fn set_depth_range(&mut self, min_depth: u8, max_depth: u8) -> Result<()> {
    validate_depth_range(min_depth, max_depth)?;
    self.config.min_depth = min_depth;
    self.config.max_depth = max_depth;
    Ok(())
  }

  pub fn origin(&self) -> DVec3 {
    self.config.origin
  }

  pub fn extent(&self) -> DVec3 {
    self.config.extent
  }

  pub fn set_origin(&mut self, origin: DVec3) {
    self.config.origin = origin;
  }

  pub fn set_extent(&mut self, extent: DVec3) {
    self.config.extent = extent;
  }

  /// Move the octree so its world box is centered on `center`.
  pub fn set_center(&mut self, center: DVec3) {
    self.config.origin = center - self.config.extent * 0.5;
  }

  // =======================================================================
  // World bounds
  // =======================================================================

  pub fn min(&self) -> DVec3 {
    self.bounds().min
  }

  pub fn max(&self) -> DVec3 {
    self.bounds().max
  }

  pub fn center(&self) -> DVec3 {
    self.config.origin + self.config.extent * 0.5
  }

  pub fn bounds(&self) -> DAabb3 {
    self.config.bounds()
  }

  // =======================================================================
  // Membership queries
  // =======================================================================

  /// The membership set.
  pub fn nodes(&self) -> &HashSet<OctreeNode> {
    self.members.as_set()
  }

  pub fn members(&self) -> &Members {
    &self.members
  }

  pub fn len(&self) -> usize {
    self.members.len()
  }

  pub fn is_empty(&self) -> bool {
    self.members.is_empty()
  }

  pub fn contains(&self, node: &OctreeNode) -> bool {
    self.members.contains(node)
  }

  pub fn iter(&self) -> impl Iterator<Item = &OctreeNode> {
    self.members.iter()
  }

  /// The subset of `nodes` that are members, in input order.
  pub fn filter(&self, nodes: impl IntoIterator<Item = OctreeNode>) -> Vec<OctreeNode> {
    nodes.into_iter().filter(|n| self.contains(n)).collect()
  }

  /// `node` lies inside this octree's code range and depth range.
  pub fn is_in_bounds(&self, node: &OctreeNode) -> bool {
    node.is_code_in_bounds() && node.is_level_in_bounds(self.min_depth(), self.max_depth())
  }

  /// Members touching `node` at any level within the depth range.
  pub fn members_touching(&self, node: &OctreeNode) -> Result<Vec<OctreeNode>> {
    let candidates = node.sweep(self.min_depth(), self.max_depth())?;
    Ok(self.filter(candidates))
  }

  // =======================================================================
  // Plain mutation
  // =======================================================================

  /// Unconditional insert. Returns true if the node was new.
  pub fn add_node(&mut self, node: OctreeNode) -> bool {
    self.members.insert(node)
  }

  /// Returns how many nodes were new.
  pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = OctreeNode>) -> usize {
    nodes.into_iter().filter(|n| self.members.insert(*n)).count()
  }

  /// Insert only if the node fits this octree's code and depth range.
  pub fn try_add_node(&mut self, node: OctreeNode) -> Result<bool> {
    if !self.is_in_bounds(&node) {
      return Err(OctreeError::NodeOutOfBounds { node });
    }
    Ok(self.add_node(node))
  }

  /// Insert the node at `level` containing a world-space point.
  pub fn add_point(&mut self, world: DVec3, level: u8) -> Result<OctreeNode> {
    let node = OctreeNode::containing(self.config.to_rst(world), level)?;
    self.members.insert(node);
    Ok(node)
  }

  /// Remove a member, deselecting it. Returns true if it was present.
  pub fn delete_node(&mut self, node: &OctreeNode) -> bool {
    self.selected.remove(node);
    self.members.remove(node)
  }

  /// Returns how many nodes were present.
  pub fn delete_nodes(&mut self, nodes: impl IntoIterator<Item = OctreeNode>) -> usize {
    nodes.into_iter().filter(|n| self.delete_node(n)).count()
  }

  /// Clear nodes, selection and depth range. World mapping is kept.
  pub fn clear(&mut self) {
    self.clear_nodes();
    let defaults = OctreeConfig::default();
    self.config.min_depth = defaults.min_depth;
    self.config.max_depth = defaults.max_depth;
  }

  /// Clear nodes and selection only.
  pub fn clear_nodes(&mut self) {
    self.members.clear();
    self.selected.clear();
  }

  // =======================================================================
  // Subdivide and merge
  // =======================================================================

  /// Replace `node` by its 8 children, whether or not it was a member.
  pub fn subdivide_node(&mut self, node: OctreeNode) -> Result<()> {
    let group = TransitionGroup::new_subdivide(node)?;
    self.apply_group(&group);
    Ok(())
  }

  /// Subdivide every given node that is a member. Returns how many were.
  pub fn subdivide_nodes(&mut self, nodes: impl IntoIterator<Item = OctreeNode>) -> Result<usize> {
    let mut delta = Delta::new();
    for node in nodes {
      if self.contains(&node) && !delta.has_group(&node) {
        delta.push(&TransitionGroup::new_subdivide(node)?);
      }
    }
    let count = delta.subdivisions;
    self.apply(delta);
    Ok(count)
  }

  /// Replace `node` and its 7 siblings by their parent.
  ///
  /// Siblings that are absent are skipped and finer members inside the
  /// parent are kept, so this may leave nested members behind.
  pub fn merge_node(&mut self, node: OctreeNode) -> Result<()> {
    let group = TransitionGroup::merge_family_of(node)?;
    self.apply_group(&group);
    Ok(())
  }

  /// Merge the family of every given node that is a member. Returns how
  /// many families were merged.
  pub fn merge_nodes(&mut self, nodes: impl IntoIterator<Item = OctreeNode>) -> Result<usize> {
    let mut delta = Delta::new();
    for node in nodes {
      if self.contains(&node) {
        delta.push(&TransitionGroup::merge_family_of(node)?);
      }
    }
    let families = delta.merges;
    self.apply(delta);
    Ok(families)
  }

  // =======================================================================
  // Selection
  // =======================================================================

  /// Select a member. Non-members cannot be selected.
  pub fn select(&mut self, node: OctreeNode) -> bool {
    self.contains(&node) && self.selected.insert(node)
  }

  pub fn deselect(&mut self, node: &OctreeNode) -> bool {
    self.selected.remove(node)
  }

  pub fn clear_selection(&mut self) {
    self.selected.clear();
  }

  pub fn selected(&self) -> &HashSet<OctreeNode> {
    &self.selected
  }

  pub fn is_selected(&self, node: &OctreeNode) -> bool {
    self.selected.contains(node)
  }

  // =======================================================================
  // Delta application
  // =======================================================================

  fn apply_group(&mut self, group: &TransitionGroup) {
    let mut delta = Delta::new();
    delta.push(group);
    self.apply(delta);
  }

  /// Apply a delta and drop selections of nodes that left the set.
  pub(super) fn apply(&mut self, delta: Delta) -> (usize, usize) {
    let (added, removed) = delta.apply(&mut self.members);
    if removed > 0 {
      let members = &self.members;
      self.selected.retain(|n| members.contains(n));
    }
    (added, removed)
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
