//! Error types for octree_index.

use thiserror::Error;

use crate::node::OctreeNode;
use crate::topology::Entity;

/// Result alias used throughout the crate.
pub type Result<T, E = OctreeError> = std::result::Result<T, E>;

/// Errors raised by node algebra and octree operations.
///
/// Single-node operations fail fast with one of these. Octree-wide
/// algorithms clamp their parameters instead and report the clamp through
/// [`Clamped`](crate::octree::Clamped).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OctreeError {
  /// Level outside `[0, MAX_LEVEL]`, or a zero-level navigation request.
  #[error("invalid level {level}: {reason}")]
  InvalidLevel {
    /// Offending level (or level delta).
    level: u32,
    /// What was wrong with it.
    reason: &'static str,
  },

  /// `min > max`, or either bound outside `[0, MAX_LEVEL]`.
  #[error("invalid depth range [{min}, {max}]")]
  InvalidDepthRange {
    /// Requested minimum depth.
    min: u32,
    /// Requested maximum depth.
    max: u32,
  },

  /// `parent(l)` with `l` greater than the node's level.
  #[error("no parent {requested} levels above a level {level} node")]
  NoValidParent {
    /// Level of the node that was asked.
    level: u8,
    /// Number of levels requested.
    requested: u8,
  },

  /// The coarser-neighbor candidate is an ancestor of the node itself.
  #[error("coarser neighbor of {node:?} towards {entity:?} lies in its own lineage")]
  AmbiguousNeighbor {
    /// Node whose neighbor was requested.
    node: OctreeNode,
    /// Direction of the request.
    entity: Entity,
  },

  /// Operation invoked outside its documented domain.
  #[error("precondition violated: {0}")]
  PreconditionViolated(&'static str),

  /// Node address or level falls outside the octree's bounds.
  #[error("node {node:?} is out of the octree's bounds")]
  NodeOutOfBounds {
    /// Rejected node.
    node: OctreeNode,
  },
}
