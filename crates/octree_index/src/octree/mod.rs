//! Octree module: the materialized node set and the algorithms over it.
//!
//! The octree is implicit. Only member nodes are stored; parent, child and
//! neighbor relationships come from the node algebra in [`crate::node`].
//!
//! # Invariants
//!
//! Plain mutation (`add_node`, `delete_node`, `subdivide_node`,
//! `merge_node`) enforces none of these. Maintenance passes restore them:
//!
//! | invariant    | meaning                                       | restored by              |
//! |--------------|-----------------------------------------------|--------------------------|
//! | no-nesting   | no member inside another                      | `alg_clean_nested`       |
//! | level bounds | level in `[min_depth, max_depth]`             | `alg_clean_wrong_levels` |
//! | code bounds  | each code in `[0, 2^level)`                   | `alg_clean_out_of_bounds`|
//! | k-balance    | face/edge-touching members differ by `<= k`   | `alg_constrain(k)`       |
//!
//! # Module Structure
//!
//! - [`config`]: `OctreeConfig` - depth range and world coordinate mapping
//! - [`bounds`]: `DAabb3` - world-space boxes
//! - [`members`]: `Members` - the node set
//! - [`transition`]: `TransitionGroup`, `Delta` - atomic membership changes
//! - [`tree`]: `Octree` - configuration, membership, selection, mutation
//! - [`boolean`]: region add/subtract
//! - [`generate`]: grid and field-driven generation
//! - [`maintenance`]: simplify, constrain, clean, fix depth
//! - [`budget`]: pass limits, statistics and parameter clamping

pub mod boolean;
pub mod bounds;
pub mod budget;
pub mod config;
pub mod generate;
pub mod maintenance;
pub mod members;
pub mod transition;
pub mod tree;

// Re-exports
pub use bounds::DAabb3;
pub use budget::{Clamped, FixpointBudget, PassStats};
pub use config::OctreeConfig;
pub use generate::{CenterSelection, CornerClass, CornerSelection, GenerationReport};
pub use maintenance::FixpointReport;
pub use members::Members;
pub use transition::{Delta, TransitionGroup, TransitionType};
pub use tree::Octree;
