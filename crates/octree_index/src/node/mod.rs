//! OctreeNode - immutable value type addressing one cell of the octree.
//!
//! A node is an integer address `(r, s, t)` at a subdivision `level`. At
//! level `l` the normalized domain `[0, 1)³` is cut into `2^l` cells per
//! axis and the node covers `[code / 2^l, (code + 1) / 2^l)` on each axis.
//! Level 0 is the whole domain; deeper levels are finer.
//!
//! Nothing here checks membership in an [`Octree`](crate::octree::Octree)
//! or that an address is in range. Navigation happily returns negative or
//! overflowing codes; [`OctreeNode::is_code_in_bounds`] and
//! [`OctreeNode::is_level_in_bounds`] are the explicit filters.
//!
//! # Module Structure
//!
//! - this file: construction, hierarchy (parent/child/sibling), relations
//! - [`neighbors`]: same-level, coarser and finer neighbor finding
//! - [`geometry`]: positions in normalized space ([`Rst`])

pub mod geometry;
pub mod neighbors;

pub use geometry::Rst;
pub use neighbors::SweepLevels;

use smallvec::SmallVec;

use crate::error::{OctreeError, Result};
use crate::topology::{Edge, Entity, Face, Octant};

/// Deepest representable level.
pub const MAX_LEVEL: u8 = 127;

/// Octree node - immutable value type.
///
/// Codes are stored as `i128` so that every level up to [`MAX_LEVEL`] is
/// addressable. Equality and hashing cover all four fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct OctreeNode {
  level: u8,
  r: i128,
  s: i128,
  t: i128,
}

impl OctreeNode {
  /// The level 0 node covering the whole domain.
  pub const ROOT: Self = Self::from_parts(0, 0, 0, 0);

  /// Create a node, rejecting levels above [`MAX_LEVEL`].
  pub fn new(r: i128, s: i128, t: i128, level: u8) -> Result<Self> {
    if level > MAX_LEVEL {
      return Err(OctreeError::InvalidLevel {
        level: level as u32,
        reason: "level exceeds MAX_LEVEL",
      });
    }
    Ok(Self::from_parts(r, s, t, level))
  }

  #[inline]
  pub(crate) const fn from_parts(r: i128, s: i128, t: i128, level: u8) -> Self {
    Self { level, r, s, t }
  }

  #[inline]
  pub const fn r(&self) -> i128 {
    self.r
  }

  #[inline]
  pub const fn s(&self) -> i128 {
    self.s
  }

  #[inline]
  pub const fn t(&self) -> i128 {
    self.t
  }

  #[inline]
  pub const fn level(&self) -> u8 {
    self.level
  }

  /// Address as `[r, s, t]`.
  #[inline]
  pub const fn code(&self) -> [i128; 3] {
    [self.r, self.s, self.t]
  }

  /// Octant this node occupies inside its parent, from the code parities.
  #[inline]
  pub const fn octant(&self) -> Octant {
    Octant::from_parity(self.r, self.s, self.t)
  }

  // =======================================================================
  // Parents
  // =======================================================================

  /// Ancestor `l` levels up.
  ///
  /// `l` must be in `1..=level`: zero is [`OctreeError::InvalidLevel`],
  /// anything past the root is [`OctreeError::NoValidParent`].
  pub fn parent(&self, l: u8) -> Result<Self> {
    if l == 0 {
      return Err(OctreeError::InvalidLevel {
        level: 0,
        reason: "parent needs at least one level up",
      });
    }
    if l > self.level {
      return Err(OctreeError::NoValidParent {
        level: self.level,
        requested: l,
      });
    }
    Ok(self.ancestor(l))
  }

  /// All ancestors from 1 up to `l` levels, nearest first.
  pub fn all_parents(&self, l: u8) -> Result<Vec<Self>> {
    if l > self.level {
      return Err(OctreeError::NoValidParent {
        level: self.level,
        requested: l,
      });
    }
    Ok((1..=l).map(|i| self.ancestor(i)).collect())
  }

  #[inline]
  pub(crate) const fn ancestor(&self, l: u8) -> Self {
    Self::from_parts(self.r >> l, self.s >> l, self.t >> l, self.level - l)
  }

  // =======================================================================
  // Children
  // =======================================================================

  /// Child in the given octant, one level down.
  pub fn child(&self, octant: Octant) -> Result<Self> {
    self.check_descend(1)?;
    Ok(self.child_unchecked(octant))
  }

  #[inline]
  pub(crate) const fn child_unchecked(&self, octant: Octant) -> Self {
    let [dr, ds, dt] = octant.offsets();
    Self::from_parts(
      (self.r << 1) + dr,
      (self.s << 1) + ds,
      (self.t << 1) + dt,
      self.level + 1,
    )
  }

  /// All `8^l` descendants exactly `l` levels down.
  pub fn children(&self, l: u8) -> Result<Vec<Self>> {
    self.check_descend(l)?;
    let n = 1i128 << l;
    let level = self.level + l;
    let (r0, s0, t0) = (self.r << l, self.s << l, self.t << l);

    let mut out = Vec::with_capacity(1usize << (3 * l as usize).min(24));
    for dt in 0..n {
      for ds in 0..n {
        for dr in 0..n {
          out.push(Self::from_parts(r0 + dr, s0 + ds, t0 + dt, level));
        }
      }
    }
    Ok(out)
  }

  /// Descendants `l` levels down that lie against `entity` of this node.
  ///
  /// Expands only the octants touching `entity` at every step, so a face
  /// yields `4^l` cells, an edge `2^l`, a vertex or octant exactly one.
  pub fn children_bounded(&self, l: u8, entity: impl Into<Entity>) -> Result<Vec<Self>> {
    self.check_descend(l)?;
    let octants = entity.into().octants();

    let mut frontier = vec![*self];
    for _ in 0..l {
      frontier = frontier
        .iter()
        .flat_map(|n| octants.iter().map(move |o| n.child_unchecked(*o)))
        .collect();
    }
    Ok(frontier)
  }

  /// Union of [`children`](Self::children) for every depth in `1..=l`.
  pub fn all_children(&self, l: u8) -> Result<Vec<Self>> {
    if l == 0 {
      return Ok(Vec::new());
    }
    self.check_descend(l)?;
    let mut out = Vec::new();
    for i in 1..=l {
      out.extend(self.children(i)?);
    }
    Ok(out)
  }

  /// Union of [`children_bounded`](Self::children_bounded) for every depth
  /// in `1..=l`, shallowest first.
  pub fn all_children_bounded(&self, l: u8, entity: impl Into<Entity>) -> Result<Vec<Self>> {
    if l == 0 {
      return Ok(Vec::new());
    }
    self.check_descend(l)?;
    let entity = entity.into();
    let mut out = Vec::new();
    for i in 1..=l {
      out.extend(self.children_bounded(i, entity)?);
    }
    Ok(out)
  }

  fn check_descend(&self, l: u8) -> Result<()> {
    if l == 0 {
      return Err(OctreeError::InvalidLevel {
        level: 0,
        reason: "child expansion needs at least one level down",
      });
    }
    let target = self.level as u32 + l as u32;
    if target > MAX_LEVEL as u32 {
      return Err(OctreeError::InvalidLevel {
        level: target,
        reason: "children would exceed MAX_LEVEL",
      });
    }
    Ok(())
  }

  // =======================================================================
  // Siblings
  // =======================================================================

  /// The other 7 children of this node's parent.
  pub fn siblings(&self) -> Result<SmallVec<[Self; 7]>> {
    let parent = self.parent(1)?;
    Ok(
      Octant::ALL
        .iter()
        .map(|o| parent.child_unchecked(*o))
        .filter(|n| n != self)
        .collect(),
    )
  }

  /// The sibling occupying `octant` of the shared parent.
  ///
  /// Asking for this node's own octant is a precondition violation.
  pub fn sibling(&self, octant: Octant) -> Result<Self> {
    let parent = self.parent(1)?;
    if octant == self.octant() {
      return Err(OctreeError::PreconditionViolated(
        "a node is not its own sibling",
      ));
    }
    Ok(parent.child_unchecked(octant))
  }

  /// Siblings lying against `entity` of the shared parent.
  ///
  /// A face yields up to 4, an edge up to 2, a vertex or octant at most
  /// one; this node itself is never included.
  pub fn siblings_bounded(&self, entity: impl Into<Entity>) -> Result<SmallVec<[Self; 4]>> {
    let parent = self.parent(1)?;
    let own = self.octant();
    Ok(
      entity
        .into()
        .octants()
        .iter()
        .filter(|o| **o != own)
        .map(|o| parent.child_unchecked(*o))
        .collect(),
    )
  }

  /// This node and its 7 siblings, in octant order.
  pub fn family(&self) -> Result<SmallVec<[Self; 8]>> {
    let parent = self.parent(1)?;
    Ok(Octant::ALL.iter().map(|o| parent.child_unchecked(*o)).collect())
  }

  // =======================================================================
  // Relations
  // =======================================================================

  /// Strict descendant test: false at equal levels.
  pub fn is_child_of(&self, other: &Self) -> bool {
    self.level > other.level && self.ancestor(self.level - other.level) == *other
  }

  /// Strict ancestor test: false at equal levels.
  #[inline]
  pub fn is_parent_of(&self, other: &Self) -> bool {
    other.is_child_of(self)
  }

  /// Same parent, different node.
  pub fn is_sibling_of(&self, other: &Self) -> bool {
    self.level == other.level
      && self.level > 0
      && self != other
      && self.ancestor(1) == other.ancestor(1)
  }

  // =======================================================================
  // Bounds
  // =======================================================================

  /// Every code component lies in `[0, 2^level)`.
  pub fn is_code_in_bounds(&self) -> bool {
    self
      .code()
      .iter()
      .all(|&c| c >= 0 && (c >> self.level) == 0)
  }

  /// Level lies in `[min_depth, max_depth]`.
  #[inline]
  pub fn is_level_in_bounds(&self, min_depth: u8, max_depth: u8) -> bool {
    self.level >= min_depth && self.level <= max_depth
  }

  // =======================================================================
  // Sibling boundaries
  // =======================================================================

  /// Parent edge this node and `sibling` both lie along.
  ///
  /// `None` when the two octants do not share an edge (they touch across
  /// the parent face instead, or only at the center).
  pub fn shared_edge(&self, sibling: &Self) -> Result<Option<Edge>> {
    self.require_sibling(sibling, "shared edge is only defined between siblings")?;
    Ok(self.octant().common_edge(sibling.octant()))
  }

  /// Parent face this node and `sibling` both lie against.
  pub fn shared_face(&self, sibling: &Self) -> Result<Option<Face>> {
    self.require_sibling(sibling, "shared face is only defined between siblings")?;
    Ok(self.octant().common_face(sibling.octant()))
  }

  /// The sibling lying along the same parent `edge` as this node.
  pub fn other_node(&self, edge: Edge) -> Result<Self> {
    let parent = self.parent(1)?;
    let own = self.octant();
    if !own.touches(edge) {
      return Err(OctreeError::PreconditionViolated(
        "node does not lie along the requested parent edge",
      ));
    }
    let other = edge.octants().iter().copied().find(|o| *o != own).ok_or(
      OctreeError::PreconditionViolated("edge has no second octant"),
    )?;
    Ok(parent.child_unchecked(other))
  }

  /// The 3 siblings lying against the same parent `face` as this node.
  pub fn other_nodes(&self, face: Face) -> Result<SmallVec<[Self; 3]>> {
    let parent = self.parent(1)?;
    let own = self.octant();
    if !own.touches(face) {
      return Err(OctreeError::PreconditionViolated(
        "node does not lie against the requested parent face",
      ));
    }
    Ok(
      face
        .octants()
        .iter()
        .filter(|o| **o != own)
        .map(|o| parent.child_unchecked(*o))
        .collect(),
    )
  }

  fn require_sibling(&self, other: &Self, what: &'static str) -> Result<()> {
    if self.is_sibling_of(other) {
      Ok(())
    } else {
      Err(OctreeError::PreconditionViolated(what))
    }
  }
}
