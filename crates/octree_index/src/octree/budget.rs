//! Pass limits and statistics for fixpoint maintenance algorithms.
//!
//! Simplify and constrain repeat whole-tree passes until nothing changes.
//! A budget caps the number of passes so a pathological input cannot spin
//! forever.

/// Cap on the number of passes a fixpoint algorithm may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixpointBudget {
	/// Maximum passes before giving up (0 = unlimited).
	pub max_passes: usize,
}

impl FixpointBudget {
	/// Enough passes for any realistic tree.
	pub const DEFAULT: Self = Self { max_passes: 256 };

	/// Run until converged.
	pub const UNLIMITED: Self = Self { max_passes: 0 };

	/// Check if another pass may run after `performed` passes.
	#[inline]
	pub fn allows(&self, performed: usize) -> bool {
		self.max_passes == 0 || performed < self.max_passes
	}
}

impl Default for FixpointBudget {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// Statistics from one fixpoint run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
	/// Passes executed, including the final pass that found nothing to do.
	pub passes: usize,
	/// Nodes inserted across all passes.
	pub nodes_added: usize,
	/// Nodes removed across all passes.
	pub nodes_removed: usize,
	/// Subdivide groups applied across all passes.
	pub subdivisions: usize,
	/// Merge groups applied across all passes.
	pub merges: usize,
	/// False when the budget ran out before the fixpoint.
	pub converged: bool,
	/// Wall time in microseconds.
	pub elapsed_us: u64,
}

impl PassStats {
	/// Total membership changes.
	#[inline]
	pub fn total_changes(&self) -> usize {
		self.nodes_added + self.nodes_removed
	}
}

/// A parameter after clamping into its legal range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clamped<T> {
	pub requested: T,
	pub applied: T,
}

impl<T: PartialEq> Clamped<T> {
	#[inline]
	pub fn was_clamped(&self) -> bool {
		self.requested != self.applied
	}
}

/// Clamp a level into `[min_depth, max_depth]`.
#[inline]
pub fn clamp_depth(requested: u8, min_depth: u8, max_depth: u8) -> Clamped<u8> {
	Clamped {
		requested,
		applied: requested.clamp(min_depth, max_depth),
	}
}
