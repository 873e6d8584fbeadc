use std::collections::HashSet;

use super::*;
use crate::topology::{
  Entity, Vertex, EDGE_VERTICES, FACE_EDGES, FACE_VERTICES, OCTANT_EDGES, OCTANT_FACES,
};

// =========================================================================
// Batch 1: Hand-written records agree with direction vectors
// =========================================================================

/// Each edge joins exactly the two vertices its direction touches.
#[test]
fn test_edge_vertices_match_directions() {
  for edge in Edge::ALL {
    let expected: HashSet<Vertex> = Vertex::ALL
      .into_iter()
      .filter(|v| edge.direction().touches(v.direction()))
      .collect();
    let actual: HashSet<Vertex> = EDGE_VERTICES[edge.ordinal()].iter().copied().collect();
    assert_eq!(actual.len(), 2, "{:?} should have 2 distinct vertices", edge);
    assert_eq!(actual, expected, "{:?} endpoints", edge);
  }
}

/// Face edge `i` joins face vertex `i` and `i + 1`.
#[test]
fn test_face_cycles_are_consistent() {
  for face in Face::ALL {
    let verts = FACE_VERTICES[face.ordinal()];
    let edges = FACE_EDGES[face.ordinal()];
    for i in 0..4 {
      let a = verts[i];
      let b = verts[(i + 1) % 4];
      let ends: HashSet<Vertex> = EDGE_VERTICES[edges[i].ordinal()].iter().copied().collect();
      assert_eq!(ends, HashSet::from([a, b]), "{:?} edge {} ({:?})", face, i, edges[i]);
      assert!(face.direction().touches(a.direction()));
    }
  }
}

/// Every face edge is shared with exactly one other face.
#[test]
fn test_face_edges_shared_with_one_other_face() {
  for face in Face::ALL {
    for edge in FACE_EDGES[face.ordinal()] {
      let sharing: Vec<Face> = Face::ALL
        .into_iter()
        .filter(|f| *f != face && FACE_EDGES[f.ordinal()].contains(&edge))
        .collect();
      assert_eq!(sharing.len(), 1, "{:?} on {:?} shared by {:?}", edge, face, sharing);
      assert!(EDGE_FACES[edge.ordinal()].contains(&face));
      assert!(EDGE_FACES[edge.ordinal()].contains(&sharing[0]));
    }
  }
}

/// Octant records match the incidence of their corner vertex.
#[test]
fn test_octant_records_match_vertex_incidence() {
  for octant in Octant::ALL {
    let vertex = Vertex::ALL[octant.ordinal()];
    assert_eq!(octant.vertex(), vertex);
    assert_eq!(octant.direction(), vertex.direction());

    let edges: HashSet<Edge> = OCTANT_EDGES[octant.ordinal()].iter().copied().collect();
    let expected: HashSet<Edge> = VERTEX_EDGES[vertex.ordinal()].iter().copied().collect();
    assert_eq!(edges.len(), 3, "{:?} edges must be distinct", octant);
    assert_eq!(edges, expected, "{:?} edges", octant);

    let faces: HashSet<Face> = OCTANT_FACES[octant.ordinal()].iter().copied().collect();
    let expected: HashSet<Face> = VERTEX_FACES[vertex.ordinal()].iter().copied().collect();
    assert_eq!(faces, expected, "{:?} faces", octant);
  }
}

#[test]
fn test_lfu_octant_edges() {
  let edges: HashSet<Edge> = Octant::LFU.edges().iter().copied().collect();
  assert_eq!(edges, HashSet::from([Edge::LF, Edge::FU, Edge::LU]));
}

// =========================================================================
// Batch 2: Derived incidence tables
// =========================================================================

#[test]
fn test_vertex_edges_and_faces_distinct() {
  for v in Vertex::ALL {
    let edges: HashSet<Edge> = VERTEX_EDGES[v.ordinal()].iter().copied().collect();
    let faces: HashSet<Face> = VERTEX_FACES[v.ordinal()].iter().copied().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(faces.len(), 3);
    for e in edges {
      assert!(EDGE_VERTICES[e.ordinal()].contains(&v));
    }
    for f in faces {
      assert!(FACE_VERTICES[f.ordinal()].contains(&v));
    }
  }
}

#[test]
fn test_face_octants() {
  assert_eq!(
    FACE_OCTANTS[Face::L.ordinal()],
    [Octant::LBD, Octant::LFD, Octant::LBU, Octant::LFU]
  );
  for face in Face::ALL {
    for o in FACE_OCTANTS[face.ordinal()] {
      assert_eq!(o.direction().component(face.axis()), face.direction().component(face.axis()));
    }
  }
}

#[test]
fn test_edge_octants() {
  assert_eq!(EDGE_OCTANTS[Edge::BD.ordinal()], [Octant::LBD, Octant::RBD]);
  assert_eq!(EDGE_OCTANTS[Edge::LF.ordinal()], [Octant::LFD, Octant::LFU]);
  for edge in Edge::ALL {
    let [a, b] = EDGE_OCTANTS[edge.ordinal()];
    assert_eq!(a.common_edge(b), Some(edge), "{:?}", edge);
  }
}

/// Faces touch 4 octants, edges 2, vertices 1.
#[test]
fn test_adjacency_counts() {
  for row in 0..DIRECTION_ROWS {
    let count = ADJACENT[row].iter().filter(|&&a| a).count();
    let expected = match row_direction(row).magnitude() {
      1 => 4,
      2 => 2,
      _ => 1,
    };
    assert_eq!(count, expected, "row {}", row);
  }
}

#[test]
fn test_row_directions_match_entities() {
  for (i, entity) in Entity::NEIGHBOR_DIRECTIONS.iter().enumerate() {
    assert_eq!(entity.table_row(), i);
    assert_eq!(row_direction(i), entity.direction());
  }
}

// =========================================================================
// Batch 3: Sibling tables
// =========================================================================

#[test]
fn test_common_edge_examples() {
  assert_eq!(COMMON_EDGE[Octant::LBD as usize][Octant::LBU as usize], Some(Edge::LB));
  assert_eq!(COMMON_EDGE[Octant::LBD as usize][Octant::RBD as usize], Some(Edge::BD));
  assert_eq!(COMMON_EDGE[Octant::RFU as usize][Octant::RFD as usize], Some(Edge::RF));
  assert_eq!(COMMON_EDGE[Octant::LBD as usize][Octant::RFD as usize], None);
  assert_eq!(COMMON_EDGE[Octant::LBD as usize][Octant::LBD as usize], None);
}

#[test]
fn test_common_face_examples() {
  assert_eq!(COMMON_FACE[Octant::RFD as usize][Octant::LBD as usize], Some(Face::D));
  assert_eq!(COMMON_FACE[Octant::LBD as usize][Octant::LFU as usize], Some(Face::L));
  assert_eq!(COMMON_FACE[Octant::RBU as usize][Octant::LBD as usize], Some(Face::B));
  assert_eq!(COMMON_FACE[Octant::LBD as usize][Octant::RBD as usize], None);
  assert_eq!(COMMON_FACE[Octant::LBD as usize][Octant::RFU as usize], None);
}

#[test]
fn test_sibling_tables_symmetric() {
  for a in 0..8 {
    for b in 0..8 {
      assert_eq!(COMMON_EDGE[a][b], COMMON_EDGE[b][a]);
      assert_eq!(COMMON_FACE[a][b], COMMON_FACE[b][a]);
    }
    let edges = COMMON_EDGE[a].iter().flatten().count();
    let faces = COMMON_FACE[a].iter().flatten().count();
    assert_eq!(edges, 3, "octant {} has 3 edge-siblings", a);
    assert_eq!(faces, 3, "octant {} has 3 face-siblings", a);
  }
}

/// A shared edge or face really is bounded by both octants.
#[test]
fn test_sibling_tables_touch_both() {
  for a in Octant::ALL {
    for b in Octant::ALL {
      if let Some(edge) = a.common_edge(b) {
        assert!(a.touches(edge) && b.touches(edge));
      }
      if let Some(face) = a.common_face(b) {
        assert!(a.touches(face) && b.touches(face));
      }
    }
  }
}

// =========================================================================
// Batch 4: Reflection and exit faces
// =========================================================================

#[test]
fn test_reflect_examples() {
  assert_eq!(Octant::LBD.reflect(Face::L), Octant::RBD);
  assert_eq!(Octant::LBD.reflect(Edge::BD), Octant::LFU);
  assert_eq!(Octant::LBD.reflect(Vertex::RFU), Octant::RFU);
}

#[test]
fn test_reflect_is_involution() {
  for row in 0..DIRECTION_ROWS {
    for o in Octant::ALL {
      let once = REFLECT[row][o.ordinal()];
      assert_eq!(REFLECT[row][once.ordinal()], o);
    }
  }
}

#[test]
fn test_exit_face() {
  assert_eq!(Octant::RBD.exit_face(Face::R), Some(Face::R));
  assert_eq!(Octant::RBD.exit_face(Face::L), None);
  // crosses both R and D
  assert_eq!(Octant::RBD.exit_face(Edge::RD), None);
  assert_eq!(Octant::RBD.exit_face(Edge::RU), Some(Face::R));
  assert_eq!(Octant::LFU.exit_face(Vertex::RBU), Some(Face::U));
  assert_eq!(Octant::LFU.exit_face(Vertex::RBD), None);
}
