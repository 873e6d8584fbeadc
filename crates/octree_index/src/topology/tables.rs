//! Precomputed adjacency tables for the unit cube.
//!
//! Every table here is derived at compile time from the direction vectors
//! of the topology registry, so the registry stays the single source of
//! truth. Hand-written records (edge endpoints, face cycles, octant
//! boundaries) live next to their types and are cross-checked against
//! these tables by the tests.
//!
//! # Row Layout
//!
//! Tables keyed by a neighbor direction have 26 rows:
//!
//! ```text
//! rows  0..6   faces    L R B F D U
//! rows  6..18  edges    BD RD FD LD BU RU FU LU LB RB RF LF
//! rows 18..26  vertices LBD RBD RFD LFD LBU RBU RFU LFU
//! ```
//!
//! Octants share the vertex rows.
//!
//! # Sibling Tables
//!
//! Siblings that differ on one axis both lie along one parent edge;
//! siblings that differ on two axes both lie against one parent face:
//!
//! ```text
//! LBD, RBD   differ on r         COMMON_EDGE = BD   COMMON_FACE = none
//! LBD, RFD   differ on r, s      COMMON_EDGE = none COMMON_FACE = D
//! LBD, RFU   differ on r, s, t   COMMON_EDGE = none COMMON_FACE = none
//! ```

use super::edge::EDGE_DIRECTIONS;
use super::face::FACE_DIRECTIONS;
use super::vertex::VERTEX_DIRECTIONS;
use super::{Direction, Edge, Face, Octant};

/// Number of rows in direction-keyed tables (6 faces + 12 edges + 8 vertices).
pub const DIRECTION_ROWS: usize = 26;

/// Direction of row `row` in a direction-keyed table.
pub const fn row_direction(row: usize) -> Direction {
  if row < 6 {
    FACE_DIRECTIONS[row]
  } else if row < 18 {
    EDGE_DIRECTIONS[row - 6]
  } else {
    VERTEX_DIRECTIONS[row - 18]
  }
}

/// `ADJACENT[row][o]`: octant `o` lies on the parent boundary entity `row`.
pub const ADJACENT: [[bool; 8]; DIRECTION_ROWS] = generate_adjacent();

/// `REFLECT[row][o]`: octant `o` mirrored across the non-zero axes of `row`.
pub const REFLECT: [[Octant; 8]; DIRECTION_ROWS] = generate_reflect();

/// `EXIT_FACE[row][o]`: the single parent face crossed when stepping from
/// octant `o` in direction `row`, or `None` when zero or several are crossed.
pub const EXIT_FACE: [[Option<Face>; 8]; DIRECTION_ROWS] = generate_exit_face();

/// `COMMON_EDGE[a][b]`: parent edge both sibling octants lie along, present
/// when they differ on exactly one axis.
pub const COMMON_EDGE: [[Option<Edge>; 8]; 8] = generate_common_edge();

/// `COMMON_FACE[a][b]`: parent face both sibling octants lie against,
/// present when they differ on exactly two axes.
pub const COMMON_FACE: [[Option<Face>; 8]; 8] = generate_common_face();

/// Edges meeting at each vertex.
pub static VERTEX_EDGES: [[Edge; 3]; 8] = generate_vertex_edges();

/// Faces meeting at each vertex.
pub static VERTEX_FACES: [[Face; 3]; 8] = generate_vertex_faces();

/// Faces joined by each edge.
pub static EDGE_FACES: [[Face; 2]; 12] = generate_edge_faces();

/// Child octants lying along each edge.
pub static EDGE_OCTANTS: [[Octant; 2]; 12] = generate_edge_octants();

/// Child octants lying against each face.
pub static FACE_OCTANTS: [[Octant; 4]; 6] = generate_face_octants();

const fn generate_adjacent() -> [[bool; 8]; DIRECTION_ROWS] {
  let mut table = [[false; 8]; DIRECTION_ROWS];
  let mut row = 0;

  while row < DIRECTION_ROWS {
    let dir = row_direction(row);
    let mut o = 0;
    while o < 8 {
      table[row][o] = dir.touches(VERTEX_DIRECTIONS[o]);
      o += 1;
    }
    row += 1;
  }

  table
}

const fn generate_reflect() -> [[Octant; 8]; DIRECTION_ROWS] {
  let mut table = [[Octant::LBD; 8]; DIRECTION_ROWS];
  let mut row = 0;

  while row < DIRECTION_ROWS {
    let dir = row_direction(row);
    let mut o = 0;
    while o < 8 {
      let src = VERTEX_DIRECTIONS[o];
      let mirrored = Direction::new(
        if dir.r != 0 { -src.r } else { src.r },
        if dir.s != 0 { -src.s } else { src.s },
        if dir.t != 0 { -src.t } else { src.t },
      );
      table[row][o] = octant_of(mirrored);
      o += 1;
    }
    row += 1;
  }

  table
}

const fn generate_exit_face() -> [[Option<Face>; 8]; DIRECTION_ROWS] {
  let mut table = [[None; 8]; DIRECTION_ROWS];
  let mut row = 0;

  while row < DIRECTION_ROWS {
    let dir = row_direction(row);
    let mut o = 0;
    while o < 8 {
      let oct = VERTEX_DIRECTIONS[o];
      let mut exits = 0;
      let mut exit = [0i8; 3];
      let mut axis = 0;
      while axis < 3 {
        let d = dir.component(axis);
        // stepping towards the side the octant already sits on leaves the parent
        if d != 0 && d == oct.component(axis) {
          exits += 1;
          exit[axis] = d;
        }
        axis += 1;
      }
      if exits == 1 {
        table[row][o] = Face::from_direction(Direction::from_array(exit));
      }
      o += 1;
    }
    row += 1;
  }

  table
}

const fn generate_common_edge() -> [[Option<Edge>; 8]; 8] {
  let mut table = [[None; 8]; 8];
  let mut a = 0;

  while a < 8 {
    let mut b = 0;
    while b < 8 {
      let da = VERTEX_DIRECTIONS[a];
      let db = VERTEX_DIRECTIONS[b];
      let mut shared = [0i8; 3];
      let mut differing = 0;
      let mut axis = 0;
      while axis < 3 {
        if da.component(axis) == db.component(axis) {
          shared[axis] = da.component(axis);
        } else {
          differing += 1;
        }
        axis += 1;
      }
      if differing == 1 {
        table[a][b] = Edge::from_direction(Direction::from_array(shared));
      }
      b += 1;
    }
    a += 1;
  }

  table
}

const fn generate_common_face() -> [[Option<Face>; 8]; 8] {
  let mut table = [[None; 8]; 8];
  let mut a = 0;

  while a < 8 {
    let mut b = 0;
    while b < 8 {
      let da = VERTEX_DIRECTIONS[a];
      let db = VERTEX_DIRECTIONS[b];
      let mut shared = [0i8; 3];
      let mut differing = 0;
      let mut axis = 0;
      while axis < 3 {
        if da.component(axis) == db.component(axis) {
          shared[axis] = da.component(axis);
        } else {
          differing += 1;
        }
        axis += 1;
      }
      if differing == 2 {
        table[a][b] = Face::from_direction(Direction::from_array(shared));
      }
      b += 1;
    }
    a += 1;
  }

  table
}

const fn generate_vertex_edges() -> [[Edge; 3]; 8] {
  let mut table = [[Edge::BD; 3]; 8];
  let mut v = 0;

  while v < 8 {
    let mut n = 0;
    let mut e = 0;
    while e < 12 {
      if EDGE_DIRECTIONS[e].touches(VERTEX_DIRECTIONS[v]) {
        table[v][n] = Edge::ALL[e];
        n += 1;
      }
      e += 1;
    }
    v += 1;
  }

  table
}

const fn generate_vertex_faces() -> [[Face; 3]; 8] {
  let mut table = [[Face::L; 3]; 8];
  let mut v = 0;

  while v < 8 {
    let mut n = 0;
    let mut f = 0;
    while f < 6 {
      if FACE_DIRECTIONS[f].touches(VERTEX_DIRECTIONS[v]) {
        table[v][n] = Face::ALL[f];
        n += 1;
      }
      f += 1;
    }
    v += 1;
  }

  table
}

const fn generate_edge_faces() -> [[Face; 2]; 12] {
  let mut table = [[Face::L; 2]; 12];
  let mut e = 0;

  while e < 12 {
    let mut n = 0;
    let mut f = 0;
    while f < 6 {
      if FACE_DIRECTIONS[f].touches(EDGE_DIRECTIONS[e]) {
        table[e][n] = Face::ALL[f];
        n += 1;
      }
      f += 1;
    }
    e += 1;
  }

  table
}

const fn generate_edge_octants() -> [[Octant; 2]; 12] {
  let mut table = [[Octant::LBD; 2]; 12];
  let mut e = 0;

  while e < 12 {
    let mut n = 0;
    let mut o = 0;
    while o < 8 {
      if EDGE_DIRECTIONS[e].touches(VERTEX_DIRECTIONS[o]) {
        table[e][n] = Octant::ALL[o];
        n += 1;
      }
      o += 1;
    }
    e += 1;
  }

  table
}

const fn generate_face_octants() -> [[Octant; 4]; 6] {
  let mut table = [[Octant::LBD; 4]; 6];
  let mut f = 0;

  while f < 6 {
    let mut n = 0;
    let mut o = 0;
    while o < 8 {
      if FACE_DIRECTIONS[f].touches(VERTEX_DIRECTIONS[o]) {
        table[f][n] = Octant::ALL[o];
        n += 1;
      }
      o += 1;
    }
    f += 1;
  }

  table
}

const fn octant_of(d: Direction) -> Octant {
  match Octant::from_direction(d) {
    Some(o) => o,
    // mirroring keeps every component non-zero
    None => unreachable!(),
  }
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
