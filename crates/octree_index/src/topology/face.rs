//! The 6 faces of a cell.

use super::tables::FACE_OCTANTS;
use super::{Direction, Edge, Octant, Vertex};

/// A face of a cell: Left/Right, Back/Front, Down/Up.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
  L = 0,
  R = 1,
  B = 2,
  F = 3,
  D = 4,
  U = 5,
}

/// Direction vectors indexed by face ordinal.
pub const FACE_DIRECTIONS: [Direction; 6] = [
  Direction::new(-1, 0, 0), // L
  Direction::new(1, 0, 0),  // R
  Direction::new(0, -1, 0), // B
  Direction::new(0, 1, 0),  // F
  Direction::new(0, 0, -1), // D
  Direction::new(0, 0, 1),  // U
];

/// Corners of each face in cyclic order.
pub static FACE_VERTICES: [[Vertex; 4]; 6] = [
  [Vertex::LFD, Vertex::LFU, Vertex::LBU, Vertex::LBD], // L
  [Vertex::RBD, Vertex::RBU, Vertex::RFU, Vertex::RFD], // R
  [Vertex::LBD, Vertex::LBU, Vertex::RBU, Vertex::RBD], // B
  [Vertex::RFD, Vertex::RFU, Vertex::LFU, Vertex::LFD], // F
  [Vertex::LBD, Vertex::RBD, Vertex::RFD, Vertex::LFD], // D
  [Vertex::LBU, Vertex::LFU, Vertex::RFU, Vertex::RBU], // U
];

/// Edges of each face in cyclic order. Edge `i` joins
/// `FACE_VERTICES[f][i]` and `FACE_VERTICES[f][(i + 1) % 4]`.
pub static FACE_EDGES: [[Edge; 4]; 6] = [
  [Edge::LF, Edge::LU, Edge::LB, Edge::LD], // L
  [Edge::RB, Edge::RU, Edge::RF, Edge::RD], // R
  [Edge::LB, Edge::BU, Edge::RB, Edge::BD], // B
  [Edge::RF, Edge::FU, Edge::LF, Edge::FD], // F
  [Edge::BD, Edge::RD, Edge::FD, Edge::LD], // D
  [Edge::LU, Edge::FU, Edge::RU, Edge::BU], // U
];

impl Face {
  pub const ALL: [Face; 6] = [Face::L, Face::R, Face::B, Face::F, Face::D, Face::U];

  #[inline]
  pub const fn ordinal(self) -> usize {
    self as usize
  }

  pub const fn from_ordinal(i: usize) -> Option<Self> {
    if i < 6 {
      Some(Self::ALL[i])
    } else {
      None
    }
  }

  #[inline]
  pub const fn direction(self) -> Direction {
    FACE_DIRECTIONS[self as usize]
  }

  pub const fn from_direction(d: Direction) -> Option<Self> {
    let mut i = 0;
    while i < 6 {
      if FACE_DIRECTIONS[i].same(d) {
        return Some(Self::ALL[i]);
      }
      i += 1;
    }
    None
  }

  /// Axis of the face normal (0 = r, 1 = s, 2 = t).
  #[inline]
  pub const fn axis(self) -> usize {
    self as usize / 2
  }

  pub const fn opposite(self) -> Self {
    match self {
      Face::L => Face::R,
      Face::R => Face::L,
      Face::B => Face::F,
      Face::F => Face::B,
      Face::D => Face::U,
      Face::U => Face::D,
    }
  }

  #[inline]
  pub fn vertices(self) -> &'static [Vertex; 4] {
    &FACE_VERTICES[self as usize]
  }

  #[inline]
  pub fn edges(self) -> &'static [Edge; 4] {
    &FACE_EDGES[self as usize]
  }

  /// The 4 child octants lying against this face.
  #[inline]
  pub fn octants(self) -> &'static [Octant; 4] {
    &FACE_OCTANTS[self as usize]
  }
}
