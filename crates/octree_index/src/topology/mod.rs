//! Topology registry of the unit cube.
//!
//! Four closed enumerations describe a cell and its surroundings:
//!
//! - [`Vertex`] (8): corners, a point touching the cell from outside
//! - [`Edge`] (12): edges, named by the two faces they join
//! - [`Face`] (6): faces, Left/Right, Back/Front, Down/Up
//! - [`Octant`] (8): the cell's own children, named by their corner
//!
//! Each member carries a [`Direction`] vector. Vertex and Octant share the
//! same eight vectors on purpose and stay separate types.
//!
//! Cross-references between the sets are stored as ordinal-indexed arrays,
//! either written out next to the type or generated in [`tables`].

pub mod direction;
pub mod edge;
pub mod face;
pub mod octant;
pub mod tables;
pub mod vertex;

pub use direction::Direction;
pub use edge::{Edge, EDGE_DIRECTIONS, EDGE_VERTICES};
pub use face::{Face, FACE_DIRECTIONS, FACE_EDGES, FACE_VERTICES};
pub use octant::{Octant, OCTANT_EDGES, OCTANT_FACES};
pub use vertex::{Vertex, VERTEX_DIRECTIONS};

use tables::{ADJACENT, EDGE_OCTANTS, FACE_OCTANTS};

static OCTANT_SLOTS: [Octant; 8] = Octant::ALL;

/// Any topology entity, used to select a neighbor direction or to bound a
/// child expansion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Entity {
  Vertex(Vertex),
  Edge(Edge),
  Face(Face),
  Octant(Octant),
}

impl Entity {
  /// All 26 same-level neighbor directions: 6 faces, 12 edges, 8 vertices.
  pub const NEIGHBOR_DIRECTIONS: [Entity; 26] = [
    Entity::Face(Face::L),
    Entity::Face(Face::R),
    Entity::Face(Face::B),
    Entity::Face(Face::F),
    Entity::Face(Face::D),
    Entity::Face(Face::U),
    Entity::Edge(Edge::BD),
    Entity::Edge(Edge::RD),
    Entity::Edge(Edge::FD),
    Entity::Edge(Edge::LD),
    Entity::Edge(Edge::BU),
    Entity::Edge(Edge::RU),
    Entity::Edge(Edge::FU),
    Entity::Edge(Edge::LU),
    Entity::Edge(Edge::LB),
    Entity::Edge(Edge::RB),
    Entity::Edge(Edge::RF),
    Entity::Edge(Edge::LF),
    Entity::Vertex(Vertex::LBD),
    Entity::Vertex(Vertex::RBD),
    Entity::Vertex(Vertex::RFD),
    Entity::Vertex(Vertex::LFD),
    Entity::Vertex(Vertex::LBU),
    Entity::Vertex(Vertex::RBU),
    Entity::Vertex(Vertex::RFU),
    Entity::Vertex(Vertex::LFU),
  ];

  /// Directions that cross a face or an edge (the balance directions).
  pub const FACE_AND_EDGE_DIRECTIONS: [Entity; 18] = {
    let mut out = [Entity::Face(Face::L); 18];
    let mut i = 0;
    while i < 18 {
      out[i] = Self::NEIGHBOR_DIRECTIONS[i];
      i += 1;
    }
    out
  };

  pub const fn direction(self) -> Direction {
    match self {
      Entity::Vertex(v) => v.direction(),
      Entity::Edge(e) => e.direction(),
      Entity::Face(f) => f.direction(),
      Entity::Octant(o) => o.direction(),
    }
  }

  /// Face, edge or vertex matching `d`, chosen by its magnitude.
  pub const fn from_direction(d: Direction) -> Option<Self> {
    if !d.is_unit() {
      return None;
    }
    match d.magnitude() {
      1 => match Face::from_direction(d) {
        Some(f) => Some(Entity::Face(f)),
        None => None,
      },
      2 => match Edge::from_direction(d) {
        Some(e) => Some(Entity::Edge(e)),
        None => None,
      },
      3 => match Vertex::from_direction(d) {
        Some(v) => Some(Entity::Vertex(v)),
        None => None,
      },
      _ => None,
    }
  }

  /// Ordinal within the entity's own set.
  pub const fn ordinal(self) -> usize {
    match self {
      Entity::Vertex(v) => v.ordinal(),
      Entity::Edge(e) => e.ordinal(),
      Entity::Face(f) => f.ordinal(),
      Entity::Octant(o) => o.ordinal(),
    }
  }

  /// Row in the direction-keyed tables of [`tables`].
  pub const fn table_row(self) -> usize {
    match self {
      Entity::Face(f) => f.ordinal(),
      Entity::Edge(e) => 6 + e.ordinal(),
      Entity::Vertex(v) => 18 + v.ordinal(),
      Entity::Octant(o) => 18 + o.ordinal(),
    }
  }

  /// Entity pointing the other way. Octants map to the opposite octant.
  pub const fn opposite(self) -> Self {
    match self {
      Entity::Vertex(v) => Entity::Vertex(v.opposite()),
      Entity::Edge(e) => Entity::Edge(e.opposite()),
      Entity::Face(f) => Entity::Face(f.opposite()),
      Entity::Octant(o) => Entity::Octant(o.vertex().opposite().octant()),
    }
  }

  /// Child octants touching this entity (1, 2, 4 or 1 for an octant).
  pub fn octants(self) -> &'static [Octant] {
    match self {
      Entity::Vertex(v) => std::slice::from_ref(&OCTANT_SLOTS[v.ordinal()]),
      Entity::Octant(o) => std::slice::from_ref(&OCTANT_SLOTS[o.ordinal()]),
      Entity::Edge(e) => &EDGE_OCTANTS[e.ordinal()],
      Entity::Face(f) => &FACE_OCTANTS[f.ordinal()],
    }
  }

  /// True when child octant `o` lies on this entity.
  #[inline]
  pub fn touches(self, o: Octant) -> bool {
    ADJACENT[self.table_row()][o.ordinal()]
  }
}

impl From<Vertex> for Entity {
  fn from(v: Vertex) -> Self {
    Entity::Vertex(v)
  }
}

impl From<Edge> for Entity {
  fn from(e: Edge) -> Self {
    Entity::Edge(e)
  }
}

impl From<Face> for Entity {
  fn from(f: Face) -> Self {
    Entity::Face(f)
  }
}

impl From<Octant> for Entity {
  fn from(o: Octant) -> Self {
    Entity::Octant(o)
  }
}
