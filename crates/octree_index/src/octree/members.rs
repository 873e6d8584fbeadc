//! Members - the octree as a flat set of nodes.
//!
//! The tree structure is implicit: parent/child relationships are computed
//! on-demand via coordinate math. Only member nodes are stored.

use std::collections::HashSet;

use crate::node::OctreeNode;

/// Implicit octree: members ARE the state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Members {
  nodes: HashSet<OctreeNode>,
}

impl Members {
  pub fn new() -> Self {
    Self::default()
  }

  /// Uniform grid: every node at `level`.
  ///
  /// Holds `8^level` nodes, so keep `level` small.
  pub fn uniform(level: u8) -> Self {
    level_grid(level).collect()
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn contains(&self, node: &OctreeNode) -> bool {
    self.nodes.contains(node)
  }

  pub fn insert(&mut self, node: OctreeNode) -> bool {
    self.nodes.insert(node)
  }

  pub fn remove(&mut self, node: &OctreeNode) -> bool {
    self.nodes.remove(node)
  }

  pub fn clear(&mut self) {
    self.nodes.clear();
  }

  pub fn iter(&self) -> impl Iterator<Item = &OctreeNode> {
    self.nodes.iter()
  }

  /// Coarsest and finest member levels, `None` when empty.
  pub fn level_range(&self) -> Option<(u8, u8)> {
    let mut levels = self.nodes.iter().map(OctreeNode::level);
    let first = levels.next()?;
    Some(levels.fold((first, first), |(lo, hi), l| (lo.min(l), hi.max(l))))
  }

  /// Keep only members matching the predicate, returning how many left.
  pub fn retain(&mut self, mut keep: impl FnMut(&OctreeNode) -> bool) -> usize {
    let before = self.nodes.len();
    self.nodes.retain(|n| keep(n));
    before - self.nodes.len()
  }

  pub fn as_set(&self) -> &HashSet<OctreeNode> {
    &self.nodes
  }
}

impl From<HashSet<OctreeNode>> for Members {
  fn from(nodes: HashSet<OctreeNode>) -> Self {
    Self { nodes }
  }
}

impl FromIterator<OctreeNode> for Members {
  fn from_iter<I: IntoIterator<Item = OctreeNode>>(iter: I) -> Self {
    Self {
      nodes: iter.into_iter().collect(),
    }
  }
}

impl Extend<OctreeNode> for Members {
  fn extend<I: IntoIterator<Item = OctreeNode>>(&mut self, iter: I) {
    self.nodes.extend(iter);
  }
}

impl<'a> IntoIterator for &'a Members {
  type Item = &'a OctreeNode;
  type IntoIter = std::collections::hash_set::Iter<'a, OctreeNode>;

  fn into_iter(self) -> Self::IntoIter {
    self.nodes.iter()
  }
}

/// Every in-bounds node at `level`, `r` varying fastest.
pub fn level_grid(level: u8) -> impl Iterator<Item = OctreeNode> {
  let side = 1i128 << level;
  (0..side).flat_map(move |t| {
    (0..side).flat_map(move |s| (0..side).map(move |r| OctreeNode::from_parts(r, s, t, level)))
  })
}

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;
