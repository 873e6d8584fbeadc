use glam::DVec3;

use super::*;
use crate::field::{PlaneField, SphereField};
use crate::octree::OctreeConfig;
use crate::test_utils::{has_nesting, unit_octree};

// =========================================================================
// Batch 1: Uniform generation
// =========================================================================

/// Depth bounds [0,3], generate(2): the full 4x4x4 grid.
#[test]
fn test_generate_full_grid() {
  let mut octree = unit_octree(0, 3);
  let report = octree.alg_generate(2);

  assert_eq!(report.nodes_added, 64);
  assert!(!report.was_adjusted());
  assert_eq!(octree.len(), 64);
  assert!(octree.iter().all(|n| n.level() == 2));
  for r in 0..4 {
    for s in 0..4 {
      for t in 0..4 {
        assert!(octree.contains(&OctreeNode::new(r, s, t, 2).unwrap()));
      }
    }
  }
}

#[test]
fn test_generate_clamps_depth() {
  let mut octree = unit_octree(1, 2);
  let report = octree.alg_generate(6);
  assert_eq!(report.start.requested, 6);
  assert_eq!(report.start.applied, 2);
  assert!(report.was_adjusted());
  assert_eq!(octree.len(), 64);

  let mut octree = unit_octree(1, 2);
  assert_eq!(octree.alg_generate(0).start.applied, 1);
  assert_eq!(octree.len(), 8);
}

#[test]
fn test_generate_only_inserts() {
  let mut octree = unit_octree(0, 3);
  octree.add_node(OctreeNode::ROOT);
  let report = octree.alg_generate(1);
  assert_eq!(report.nodes_added, 8);
  assert!(octree.contains(&OctreeNode::ROOT));
  assert!(has_nesting(octree.nodes()));
}

// =========================================================================
// Batch 2: Center selection
// =========================================================================

#[test]
fn test_generate_by_center_sphere() {
  let sphere = SphereField::new(0.3).with_center(DVec3::splat(0.5));

  let mut inside = unit_octree(0, 3);
  let report = inside.alg_generate_by_center(&sphere, 0.0, 2, CenterSelection::INSIDE);
  assert_eq!(report.nodes_added, 8);
  assert!(inside.iter().all(|n| (1..=2).contains(&n.r())));

  let mut outside = unit_octree(0, 3);
  outside.alg_generate_by_center(&sphere, 0.0, 2, CenterSelection::OUTSIDE);
  assert_eq!(outside.len(), 56);
  assert!(inside.iter().all(|n| !outside.contains(n)));
}

#[test]
fn test_generate_by_center_uses_world_mapping() {
  let mut octree = Octree::new(
    OctreeConfig::default()
      .with_origin(DVec3::splat(-1.0))
      .with_extent(DVec3::splat(2.0))
      .with_depth_range(0, 4),
  )
  .unwrap();
  let field = |x: f64, _y: f64, _z: f64| x;
  octree.alg_generate_by_center(&field, 0.0, 1, CenterSelection::OUTSIDE);
  assert_eq!(octree.len(), 4);
  assert!(octree.iter().all(|n| n.r() == 1));
}

#[test]
fn test_center_selection_flags() {
  let all = CenterSelection {
    smaller: true,
    equal: true,
    larger: true,
  };
  assert!(all.accepts(1.0, 1.0));
  assert!(!CenterSelection::INSIDE.accepts(1.0, 1.0));
  assert!(CenterSelection::INSIDE.accepts(0.5, 1.0));
  assert!(!CenterSelection::default().accepts(0.0, 1.0));
}

// =========================================================================
// Batch 3: Corner classification
// =========================================================================

#[test]
fn test_classify_corners() {
  let octree = unit_octree(0, 3);
  let plane = PlaneField::ground(0.3);
  let low = OctreeNode::new(0, 0, 0, 1).unwrap();
  let high = OctreeNode::new(0, 0, 1, 1).unwrap();
  let thin = OctreeNode::new(0, 0, 0, 2).unwrap();
  assert_eq!(octree.classify_corners(&plane, 0.0, &low), CornerClass::Crossing);
  assert_eq!(octree.classify_corners(&plane, 0.0, &high), CornerClass::Above);
  assert_eq!(octree.classify_corners(&plane, 0.0, &thin), CornerClass::Below);
}

/// Only the finest straddling band survives.
#[test]
fn test_generate_by_corners_surface_band() {
  let mut octree = unit_octree(0, 3);
  let plane = PlaneField::ground(0.3);
  let report = octree
    .alg_generate_by_corners(&plane, 0.0, 1, 3, CornerSelection::SURFACE)
    .unwrap();

  assert_eq!(report.nodes_added, 64);
  assert!(octree.iter().all(|n| n.level() == 3 && n.t() == 2));
}

/// Solid fill is coarse in the interior and fine at the surface.
#[test]
fn test_generate_by_corners_solid_is_adaptive() {
  let mut octree = unit_octree(0, 3);
  let plane = PlaneField::ground(0.3);
  octree
    .alg_generate_by_corners(&plane, 0.0, 1, 3, CornerSelection::SOLID)
    .unwrap();

  assert_eq!(octree.iter().filter(|n| n.level() == 2).count(), 16);
  assert_eq!(octree.iter().filter(|n| n.level() == 3).count(), 64);
  assert!(!has_nesting(octree.nodes()));
  let volume: f64 = octree.iter().map(|n| n.size().powi(3)).sum();
  assert_eq!(volume, 0.375);
}

#[test]
fn test_generate_by_corners_swaps_and_clamps() {
  let plane = PlaneField::ground(0.3);

  let mut ordered = unit_octree(0, 3);
  ordered
    .alg_generate_by_corners(&plane, 0.0, 1, 3, CornerSelection::SURFACE)
    .unwrap();

  let mut swapped = unit_octree(0, 3);
  let report = swapped
    .alg_generate_by_corners(&plane, 0.0, 5, 1, CornerSelection::SURFACE)
    .unwrap();
  assert!(report.swapped);
  assert_eq!(report.end.requested, 5);
  assert_eq!(report.end.applied, 3);
  assert_eq!(swapped.nodes(), ordered.nodes());
}

#[test]
fn test_generate_by_corners_single_level() {
  let mut octree = unit_octree(0, 3);
  let plane = PlaneField::ground(0.3);
  octree
    .alg_generate_by_corners(&plane, 0.0, 2, 2, CornerSelection::SURFACE)
    .unwrap();
  assert_eq!(octree.len(), 16);
  assert!(octree.iter().all(|n| n.level() == 2 && n.t() == 1));
}
