//! The 12 edges of a cell.

use super::tables::{EDGE_FACES, EDGE_OCTANTS};
use super::{Direction, Face, Octant, Vertex};

/// An edge of a cell, named by the two faces it joins.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Edge {
  BD = 0,
  RD = 1,
  FD = 2,
  LD = 3,
  BU = 4,
  RU = 5,
  FU = 6,
  LU = 7,
  LB = 8,
  RB = 9,
  RF = 10,
  LF = 11,
}

/// Direction vectors indexed by edge ordinal.
pub const EDGE_DIRECTIONS: [Direction; 12] = [
  Direction::new(0, -1, -1), // BD
  Direction::new(1, 0, -1),  // RD
  Direction::new(0, 1, -1),  // FD
  Direction::new(-1, 0, -1), // LD
  Direction::new(0, -1, 1),  // BU
  Direction::new(1, 0, 1),   // RU
  Direction::new(0, 1, 1),   // FU
  Direction::new(-1, 0, 1),  // LU
  Direction::new(-1, -1, 0), // LB
  Direction::new(1, -1, 0),  // RB
  Direction::new(1, 1, 0),   // RF
  Direction::new(-1, 1, 0),  // LF
];

/// Endpoints of each edge, indexed by edge ordinal.
///
/// ```text
///         4─────BU──────5
///        /│            /│
///      LU │          RU │        t (U)
///      /  LB         /  RB       │
///     7─────FU──────6   │        └───r (R)
///     │   │         │   │       /
///     │   0─────BD──│───1     s (F)
///    LF  /         RF  /
///     │ LD          │ RD
///     │/            │/
///     3─────FD──────2
/// ```
pub static EDGE_VERTICES: [[Vertex; 2]; 12] = [
  [Vertex::LBD, Vertex::RBD], // BD
  [Vertex::RBD, Vertex::RFD], // RD
  [Vertex::LFD, Vertex::RFD], // FD
  [Vertex::LBD, Vertex::LFD], // LD
  [Vertex::LBU, Vertex::RBU], // BU
  [Vertex::RBU, Vertex::RFU], // RU
  [Vertex::LFU, Vertex::RFU], // FU
  [Vertex::LBU, Vertex::LFU], // LU
  [Vertex::LBD, Vertex::LBU], // LB
  [Vertex::RBD, Vertex::RBU], // RB
  [Vertex::RFD, Vertex::RFU], // RF
  [Vertex::LFD, Vertex::LFU], // LF
];

impl Edge {
  pub const ALL: [Edge; 12] = [
    Edge::BD,
    Edge::RD,
    Edge::FD,
    Edge::LD,
    Edge::BU,
    Edge::RU,
    Edge::FU,
    Edge::LU,
    Edge::LB,
    Edge::RB,
    Edge::RF,
    Edge::LF,
  ];

  #[inline]
  pub const fn ordinal(self) -> usize {
    self as usize
  }

  pub const fn from_ordinal(i: usize) -> Option<Self> {
    if i < 12 {
      Some(Self::ALL[i])
    } else {
      None
    }
  }

  #[inline]
  pub const fn direction(self) -> Direction {
    EDGE_DIRECTIONS[self as usize]
  }

  pub const fn from_direction(d: Direction) -> Option<Self> {
    let mut i = 0;
    while i < 12 {
      if EDGE_DIRECTIONS[i].same(d) {
        return Some(Self::ALL[i]);
      }
      i += 1;
    }
    None
  }

  /// Axis the edge runs along (0 = r, 1 = s, 2 = t).
  pub const fn axis(self) -> usize {
    let d = self.direction();
    if d.r == 0 {
      0
    } else if d.s == 0 {
      1
    } else {
      2
    }
  }

  /// The edge diagonally across the cell.
  pub const fn opposite(self) -> Self {
    match self {
      Edge::BD => Edge::FU,
      Edge::RD => Edge::LU,
      Edge::FD => Edge::BU,
      Edge::LD => Edge::RU,
      Edge::BU => Edge::FD,
      Edge::RU => Edge::LD,
      Edge::FU => Edge::BD,
      Edge::LU => Edge::RD,
      Edge::LB => Edge::RF,
      Edge::RB => Edge::LF,
      Edge::RF => Edge::LB,
      Edge::LF => Edge::RB,
    }
  }

  #[inline]
  pub fn vertices(self) -> &'static [Vertex; 2] {
    &EDGE_VERTICES[self as usize]
  }

  /// The 2 faces joined by this edge.
  #[inline]
  pub fn faces(self) -> &'static [Face; 2] {
    &EDGE_FACES[self as usize]
  }

  /// The 2 child octants lying along this edge.
  #[inline]
  pub fn octants(self) -> &'static [Octant; 2] {
    &EDGE_OCTANTS[self as usize]
  }
}
