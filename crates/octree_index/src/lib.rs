//! octree_index - adaptive octree index with arithmetic neighbor finding
//!
//! A cubical domain is recursively split into eight octants, and a sparse
//! set of cells at varying depths is materialized. Neighbors at the same,
//! coarser and finer levels are found from a node's integer address alone
//! (Samet, 1989), without walking the tree from the root.
//!
//! # Layers
//!
//! - [`topology`]: the cube's vertices, edges, faces and octants with their
//!   direction vectors and precomputed adjacency tables
//! - [`node`]: `OctreeNode`, an immutable `(r, s, t, level)` address with
//!   hierarchy navigation and neighbor finding
//! - [`octree`]: `Octree`, the materialized node set with generation,
//!   boolean edits and maintenance passes
//! - [`field`]: scalar fields that drive generation
//!
//! # Example
//!
//! ```
//! use octree_index::{Face, Octree, OctreeConfig, OctreeNode};
//!
//! let mut octree = Octree::new(OctreeConfig::default().with_depth_range(0, 3))?;
//! octree.alg_generate(2);
//! assert_eq!(octree.len(), 64);
//!
//! let n = OctreeNode::new(0, 0, 0, 1)?;
//! assert_eq!(n.nbr(Face::R), OctreeNode::new(1, 0, 0, 1)?);
//! # Ok::<(), octree_index::OctreeError>(())
//! ```

pub mod error;
pub mod field;
pub mod node;
pub mod octree;
pub mod topology;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used items
pub use error::{OctreeError, Result};
pub use field::{BoxField, PlaneField, ScalarField, SphereField};
pub use node::{OctreeNode, Rst, SweepLevels, MAX_LEVEL};
pub use octree::{
  CenterSelection, CornerSelection, DAabb3, FixpointBudget, Octree, OctreeConfig, PassStats,
};
pub use topology::{Direction, Edge, Entity, Face, Octant, Vertex};
