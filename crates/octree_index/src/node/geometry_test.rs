use super::*;
use crate::test_utils::node;

#[test]
fn test_root_geometry() {
  let root = OctreeNode::ROOT;
  assert_eq!(root.size(), 1.0);
  assert_eq!(root.min_corner(), Rst::new(0.0, 0.0, 0.0));
  assert_eq!(root.max_corner(), Rst::new(1.0, 1.0, 1.0));
  assert_eq!(root.center(), Rst::new(0.5, 0.5, 0.5));
}

#[test]
fn test_center_and_corners() {
  let n = node(1, 2, 3, 2);
  assert_eq!(n.size(), 0.25);
  assert_eq!(n.center(), Rst::new(0.375, 0.625, 0.875));
  assert_eq!(n.vertex(Vertex::LBD), n.min_corner());
  assert_eq!(n.vertex(Vertex::RFU), n.max_corner());
  assert_eq!(n.vertex(Vertex::RBD), Rst::new(0.5, 0.5, 0.75));
}

#[test]
fn test_face_and_edge_centers() {
  let n = node(0, 0, 0, 1);
  assert_eq!(n.face_center(Face::R), Rst::new(0.5, 0.25, 0.25));
  assert_eq!(n.face_center(Face::D), Rst::new(0.25, 0.25, 0.0));
  assert_eq!(n.edge_center(Edge::RF), Rst::new(0.5, 0.5, 0.25));
}

#[test]
fn test_vertices_in_vertex_order() {
  let n = node(3, 0, 1, 2);
  let verts = n.vertices();
  for v in Vertex::ALL {
    assert_eq!(verts[v.ordinal()], n.vertex(v));
  }
}

/// A child's center lies in the parent's octant of the same name.
#[test]
fn test_child_center_inside_parent_octant() {
  let parent = node(1, 1, 0, 1);
  let c = parent.center();
  for o in crate::topology::Octant::ALL {
    let child = parent.child(o).unwrap().center();
    let d = o.direction();
    assert_eq!((child.r() - c.r()).signum() as i8, d.r);
    assert_eq!((child.s() - c.s()).signum() as i8, d.s);
    assert_eq!((child.t() - c.t()).signum() as i8, d.t);
  }
}

#[test]
fn test_containing_point() {
  let p = Rst::new(0.3, 0.8, 0.05);
  assert_eq!(OctreeNode::containing(p, 2).unwrap(), node(1, 3, 0, 2));
  assert_eq!(OctreeNode::containing(p, 0).unwrap(), OctreeNode::ROOT);
  assert!(!OctreeNode::containing(Rst::new(1.0, 0.0, 0.0), 3)
    .unwrap()
    .is_code_in_bounds());
  assert!(OctreeNode::containing(p, 200).is_err());
}

#[test]
fn test_unit_cube_check() {
  assert!(Rst::new(0.0, 1.0, 0.5).is_in_unit_cube());
  assert!(!Rst::new(-0.1, 0.5, 0.5).is_in_unit_cube());
}
