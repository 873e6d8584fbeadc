//! TransitionGroup - atomic membership changes.
//!
//! A transition group represents either a subdivide (1 parent → 8 children)
//! or merge (8 children → 1 parent) operation. Fixpoint passes collect
//! groups into a [`Delta`] against a snapshot, then apply it in one step.

use std::collections::HashSet;

use smallvec::SmallVec;

use super::Members;
use crate::error::Result;
use crate::node::OctreeNode;

/// Type of octree transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransitionType {
  /// 1 parent → 8 children (finer detail)
  Subdivide,
  /// 8 children → 1 parent (coarser detail)
  Merge,
}

/// Atomic octree state change.
///
/// All nodes in a group transition together. Group key is always the parent
/// node.
#[derive(Clone, Debug)]
pub struct TransitionGroup {
  pub transition_type: TransitionType,

  /// The parent node (for both subdivide and merge).
  pub group_key: OctreeNode,

  /// - Subdivide: 8 children
  /// - Merge: 1 parent
  pub nodes_to_add: SmallVec<[OctreeNode; 8]>,

  /// - Subdivide: 1 parent
  /// - Merge: 8 children
  pub nodes_to_remove: SmallVec<[OctreeNode; 8]>,
}

impl TransitionGroup {
  /// Subdivide transition: parent → 8 children.
  ///
  /// Fails for a node already at `MAX_LEVEL`.
  pub fn new_subdivide(parent: OctreeNode) -> Result<Self> {
    let nodes_to_add: SmallVec<[OctreeNode; 8]> = parent.children(1)?.into_iter().collect();

    let mut nodes_to_remove = SmallVec::new();
    nodes_to_remove.push(parent);

    Ok(Self {
      transition_type: TransitionType::Subdivide,
      group_key: parent,
      nodes_to_add,
      nodes_to_remove,
    })
  }

  /// Merge transition: 8 children → parent.
  pub fn new_merge(parent: OctreeNode) -> Result<Self> {
    let nodes_to_remove: SmallVec<[OctreeNode; 8]> = parent.children(1)?.into_iter().collect();

    let mut nodes_to_add = SmallVec::new();
    nodes_to_add.push(parent);

    Ok(Self {
      transition_type: TransitionType::Merge,
      group_key: parent,
      nodes_to_add,
      nodes_to_remove,
    })
  }

  /// Merge transition for the family `child` belongs to.
  ///
  /// Fails for the root, which has no family.
  pub fn merge_family_of(child: OctreeNode) -> Result<Self> {
    Self::new_merge(child.parent(1)?)
  }
}

/// Pending additions and removals collected during one pass.
///
/// Applied removals-first, so a node that is both removed and re-added
/// ends up present. Groups are deduplicated by their key.
#[derive(Clone, Debug, Default)]
pub struct Delta {
  pub to_add: HashSet<OctreeNode>,
  pub to_remove: HashSet<OctreeNode>,
  /// Keys of the groups queued so far.
  pub groups: HashSet<OctreeNode>,
  /// Subdivide groups queued.
  pub subdivisions: usize,
  /// Merge groups queued.
  pub merges: usize,
}

impl Delta {
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  pub fn add(&mut self, node: OctreeNode) {
    self.to_add.insert(node);
  }

  #[inline]
  pub fn remove(&mut self, node: OctreeNode) {
    self.to_remove.insert(node);
  }

  /// Queue every node of a transition group.
  ///
  /// Returns false, queueing nothing, when a group with the same key is
  /// already queued.
  pub fn push(&mut self, group: &TransitionGroup) -> bool {
    if !self.groups.insert(group.group_key) {
      return false;
    }
    match group.transition_type {
      TransitionType::Subdivide => self.subdivisions += 1,
      TransitionType::Merge => self.merges += 1,
    }
    self.to_remove.extend(group.nodes_to_remove.iter().copied());
    self.to_add.extend(group.nodes_to_add.iter().copied());
    true
  }

  /// A group keyed on `key` is already queued.
  #[inline]
  pub fn has_group(&self, key: &OctreeNode) -> bool {
    self.groups.contains(key)
  }

  pub fn is_empty(&self) -> bool {
    self.to_add.is_empty() && self.to_remove.is_empty()
  }

  /// Apply to a member set, returning `(added, removed)` counts of nodes
  /// whose membership actually changed.
  pub fn apply(self, members: &mut Members) -> (usize, usize) {
    let mut removed = 0;
    for node in &self.to_remove {
      if !self.to_add.contains(node) && members.remove(node) {
        removed += 1;
      }
    }
    let mut added = 0;
    for node in self.to_add {
      if members.insert(node) {
        added += 1;
      }
    }
    (added, removed)
  }
}

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;
