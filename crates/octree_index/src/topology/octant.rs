//! The 8 child slots of a cell.

use super::tables::{COMMON_EDGE, COMMON_FACE, EXIT_FACE, REFLECT};
use super::{Direction, Edge, Entity, Face, Vertex, VERTEX_DIRECTIONS};

/// One of the eight children of a cell, named by the corner it occupies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Octant {
  LBD = 0,
  RBD = 1,
  RFD = 2,
  LFD = 3,
  LBU = 4,
  RBU = 5,
  RFU = 6,
  LFU = 7,
}

/// Parent edges each octant lies along.
pub static OCTANT_EDGES: [[Edge; 3]; 8] = [
  [Edge::BD, Edge::LD, Edge::LB], // LBD
  [Edge::BD, Edge::RD, Edge::RB], // RBD
  [Edge::FD, Edge::RD, Edge::RF], // RFD
  [Edge::FD, Edge::LD, Edge::LF], // LFD
  [Edge::BU, Edge::LU, Edge::LB], // LBU
  [Edge::BU, Edge::RU, Edge::RB], // RBU
  [Edge::FU, Edge::RU, Edge::RF], // RFU
  [Edge::FU, Edge::LU, Edge::LF], // LFU
];

/// Parent faces each octant lies against.
pub static OCTANT_FACES: [[Face; 3]; 8] = [
  [Face::L, Face::B, Face::D], // LBD
  [Face::R, Face::B, Face::D], // RBD
  [Face::R, Face::F, Face::D], // RFD
  [Face::L, Face::F, Face::D], // LFD
  [Face::L, Face::B, Face::U], // LBU
  [Face::R, Face::B, Face::U], // RBU
  [Face::R, Face::F, Face::U], // RFU
  [Face::L, Face::F, Face::U], // LFU
];

impl Octant {
  pub const ALL: [Octant; 8] = [
    Octant::LBD,
    Octant::RBD,
    Octant::RFD,
    Octant::LFD,
    Octant::LBU,
    Octant::RBU,
    Octant::RFU,
    Octant::LFU,
  ];

  #[inline]
  pub const fn ordinal(self) -> usize {
    self as usize
  }

  pub const fn from_ordinal(i: usize) -> Option<Self> {
    if i < 8 {
      Some(Self::ALL[i])
    } else {
      None
    }
  }

  #[inline]
  pub const fn direction(self) -> Direction {
    VERTEX_DIRECTIONS[self as usize]
  }

  pub const fn from_direction(d: Direction) -> Option<Self> {
    let mut i = 0;
    while i < 8 {
      if VERTEX_DIRECTIONS[i].same(d) {
        return Some(Self::ALL[i]);
      }
      i += 1;
    }
    None
  }

  /// Child offset bits `[r, s, t]`: 1 on the positive (R/F/U) side.
  #[inline]
  pub const fn offsets(self) -> [i128; 3] {
    let d = self.direction();
    [(d.r > 0) as i128, (d.s > 0) as i128, (d.t > 0) as i128]
  }

  /// Octant from the low bit of each code component.
  pub const fn from_parity(r: i128, s: i128, t: i128) -> Self {
    match Self::from_direction(Direction::new(parity_sign(r), parity_sign(s), parity_sign(t))) {
      Some(o) => o,
      // every sign triple names an octant
      None => unreachable!(),
    }
  }

  /// The parent corner this octant occupies.
  #[inline]
  pub const fn vertex(self) -> Vertex {
    Vertex::ALL[self as usize]
  }

  #[inline]
  pub fn edges(self) -> &'static [Edge; 3] {
    &OCTANT_EDGES[self as usize]
  }

  #[inline]
  pub fn faces(self) -> &'static [Face; 3] {
    &OCTANT_FACES[self as usize]
  }

  /// True when this octant lies on the parent's boundary entity.
  #[inline]
  pub fn touches(self, entity: impl Into<Entity>) -> bool {
    entity.into().touches(self)
  }

  /// This octant mirrored across the non-zero axes of `entity`.
  ///
  /// The same-level neighbor of a node in octant `o`, taken towards
  /// `entity`, sits in octant `o.reflect(entity)` of its own parent.
  #[inline]
  pub fn reflect(self, entity: impl Into<Entity>) -> Octant {
    REFLECT[entity.into().table_row()][self as usize]
  }

  /// Parent face crossed when stepping from this octant towards `entity`,
  /// if exactly one face is crossed.
  #[inline]
  pub fn exit_face(self, entity: impl Into<Entity>) -> Option<Face> {
    EXIT_FACE[entity.into().table_row()][self as usize]
  }

  /// Edge shared with a sibling octant, if any.
  #[inline]
  pub fn common_edge(self, sibling: Octant) -> Option<Edge> {
    COMMON_EDGE[self as usize][sibling as usize]
  }

  /// Face shared with a sibling octant, if any.
  #[inline]
  pub fn common_face(self, sibling: Octant) -> Option<Face> {
    COMMON_FACE[self as usize][sibling as usize]
  }
}

#[inline]
const fn parity_sign(code: i128) -> i8 {
  if code & 1 == 1 {
    1
  } else {
    -1
  }
}
