//! The 8 corners of a cell.

use super::tables::{VERTEX_EDGES, VERTEX_FACES};
use super::{Direction, Edge, Face, Octant};

/// A corner of a cell, seen from outside: the point three faces meet at.
///
/// Shares its direction vector with [`Octant`] but is a distinct type; a
/// vertex touches the cell, an octant lies inside it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Vertex {
  LBD = 0,
  RBD = 1,
  RFD = 2,
  LFD = 3,
  LBU = 4,
  RBU = 5,
  RFU = 6,
  LFU = 7,
}

/// Direction vectors indexed by vertex ordinal.
pub const VERTEX_DIRECTIONS: [Direction; 8] = [
  Direction::new(-1, -1, -1), // LBD
  Direction::new(1, -1, -1),  // RBD
  Direction::new(1, 1, -1),   // RFD
  Direction::new(-1, 1, -1),  // LFD
  Direction::new(-1, -1, 1),  // LBU
  Direction::new(1, -1, 1),   // RBU
  Direction::new(1, 1, 1),    // RFU
  Direction::new(-1, 1, 1),   // LFU
];

impl Vertex {
  pub const ALL: [Vertex; 8] = [
    Vertex::LBD,
    Vertex::RBD,
    Vertex::RFD,
    Vertex::LFD,
    Vertex::LBU,
    Vertex::RBU,
    Vertex::RFU,
    Vertex::LFU,
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

  /// The vertex diagonally across the cell.
  pub const fn opposite(self) -> Self {
    match self {
      Vertex::LBD => Vertex::RFU,
      Vertex::RBD => Vertex::LFU,
      Vertex::RFD => Vertex::LBU,
      Vertex::LFD => Vertex::RBU,
      Vertex::LBU => Vertex::RFD,
      Vertex::RBU => Vertex::LFD,
      Vertex::RFU => Vertex::LBD,
      Vertex::LFU => Vertex::RBD,
    }
  }

  /// The child octant sitting in this corner.
  #[inline]
  pub const fn octant(self) -> Octant {
    Octant::ALL[self as usize]
  }

  /// The 3 edges meeting at this vertex.
  #[inline]
  pub fn edges(self) -> &'static [Edge; 3] {
    &VERTEX_EDGES[self as usize]
  }

  /// The 3 faces meeting at this vertex.
  #[inline]
  pub fn faces(self) -> &'static [Face; 3] {
    &VERTEX_FACES[self as usize]
  }
}
