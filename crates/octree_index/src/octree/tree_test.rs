use super::*;
use crate::node::MAX_LEVEL;
use crate::test_utils::{node, unit_octree};

// =========================================================================
// Batch 1: Construction and configuration
// =========================================================================

#[test]
fn test_new_validates_config() {
  let bad = OctreeConfig::default().with_depth_range(4, 1);
  assert_eq!(
    Octree::new(bad).unwrap_err(),
    OctreeError::InvalidDepthRange { min: 4, max: 1 }
  );
  assert!(Octree::new(OctreeConfig::default()).unwrap().is_empty());
}

#[test]
fn test_depth_setters_check_each_other() {
  let mut octree = unit_octree(2, 5);
  assert!(octree.set_min_depth(6).is_err());
  assert_eq!(octree.min_depth(), 2, "rejected change leaves state alone");
  assert!(octree.set_max_depth(1).is_err());
  octree.set_max_depth(9).unwrap();
  octree.set_min_depth(9).unwrap();
  assert_eq!((octree.min_depth(), octree.max_depth()), (9, 9));
  assert!(octree.set_depth_range(0, MAX_LEVEL + 1).is_err());
}

#[test]
fn test_world_bounds() {
  let mut octree = Octree::new(
    OctreeConfig::default()
      .with_origin(DVec3::new(10.0, 0.0, 0.0))
      .with_extent(DVec3::new(-4.0, 2.0, 2.0)),
  )
  .unwrap();
  assert_eq!(octree.min(), DVec3::new(6.0, 0.0, 0.0));
  assert_eq!(octree.max(), DVec3::new(10.0, 2.0, 2.0));
  assert_eq!(octree.center(), DVec3::new(8.0, 1.0, 1.0));

  octree.set_center(DVec3::ZERO);
  assert_eq!(octree.center(), DVec3::ZERO);
  assert_eq!(octree.origin(), DVec3::new(2.0, -1.0, -1.0));
}

// =========================================================================
// Batch 2: Plain mutation
// =========================================================================

#[test]
fn test_add_and_delete() {
  let mut octree = unit_octree(0, 4);
  let n = node(1, 2, 3, 3);
  assert!(octree.add_node(n));
  assert!(!octree.add_node(n));
  assert!(octree.contains(&n));
  assert!(octree.delete_node(&n));
  assert!(!octree.delete_node(&n));
  assert!(octree.is_empty());
}

#[test]
fn test_plain_insert_allows_invalid_members() {
  let mut octree = unit_octree(1, 2);
  // out of code range, wrong level, nested: all accepted
  assert!(octree.add_node(node(-1, 0, 0, 1)));
  assert!(octree.add_node(OctreeNode::ROOT));
  assert!(octree.add_node(node(0, 0, 0, 2)));
  assert_eq!(octree.len(), 3);
}

#[test]
fn test_try_add_node_checks_bounds() {
  let mut octree = unit_octree(1, 2);
  assert_eq!(octree.try_add_node(node(1, 1, 1, 2)), Ok(true));
  let bad_code = node(4, 0, 0, 2);
  assert_eq!(
    octree.try_add_node(bad_code),
    Err(OctreeError::NodeOutOfBounds { node: bad_code })
  );
  assert!(octree.try_add_node(OctreeNode::ROOT).is_err());
  assert_eq!(octree.len(), 1);
}

#[test]
fn test_batch_add_delete_counts() {
  let mut octree = unit_octree(0, 3);
  let kids = OctreeNode::ROOT.children(1).unwrap();
  assert_eq!(octree.add_nodes(kids.iter().copied()), 8);
  assert_eq!(octree.add_nodes(kids.iter().copied()), 0);
  assert_eq!(octree.delete_nodes([kids[0], kids[1], node(0, 0, 0, 3)]), 2);
  assert_eq!(octree.len(), 6);
}

#[test]
fn test_add_point_uses_world_mapping() {
  let mut octree = Octree::new(
    OctreeConfig::default()
      .with_origin(DVec3::splat(-8.0))
      .with_extent(DVec3::splat(16.0)),
  )
  .unwrap();
  let n = octree.add_point(DVec3::new(1.0, -7.0, 7.9), 2).unwrap();
  assert_eq!(n, node(2, 0, 3, 2));
  assert!(octree.contains(&n));
  assert!(octree.add_point(DVec3::ZERO, 200).is_err());
}

#[test]
fn test_filter_keeps_members_in_order() {
  let mut octree = unit_octree(0, 3);
  octree.add_nodes([node(0, 0, 0, 1), node(1, 1, 1, 1)]);
  let candidates = [node(1, 1, 1, 1), node(1, 0, 0, 1), node(0, 0, 0, 1)];
  assert_eq!(octree.filter(candidates), vec![node(1, 1, 1, 1), node(0, 0, 0, 1)]);
}

#[test]
fn test_clear_resets_depths_but_not_mapping() {
  let mut octree = Octree::new(
    OctreeConfig::default()
      .with_extent(DVec3::splat(5.0))
      .with_depth_range(3, 4),
  )
  .unwrap();
  octree.add_node(node(0, 0, 0, 3));
  octree.select(node(0, 0, 0, 3));

  octree.clear_nodes();
  assert!(octree.is_empty() && octree.selected().is_empty());
  assert_eq!(octree.min_depth(), 3);

  octree.clear();
  assert_eq!((octree.min_depth(), octree.max_depth()), (0, 8));
  assert_eq!(octree.extent(), DVec3::splat(5.0));
}

// =========================================================================
// Batch 3: Subdivide and merge
// =========================================================================

#[test]
fn test_subdivide_node_replaces_with_children() {
  let mut octree = unit_octree(0, 3);
  octree.add_node(OctreeNode::ROOT);
  octree.subdivide_node(OctreeNode::ROOT).unwrap();
  assert_eq!(octree.len(), 8);
  assert!(octree.iter().all(|n| n.level() == 1));
  assert!(octree.subdivide_node(node(0, 0, 0, MAX_LEVEL)).is_err());
}

#[test]
fn test_subdivide_nodes_skips_non_members() {
  let mut octree = unit_octree(0, 3);
  octree.add_node(node(0, 0, 0, 1));
  let count = octree
    .subdivide_nodes([node(0, 0, 0, 1), node(1, 0, 0, 1), node(0, 0, 0, 1)])
    .unwrap();
  assert_eq!(count, 1);
  assert_eq!(octree.len(), 8);
}

#[test]
fn test_merge_node_replaces_family() {
  let mut octree = unit_octree(0, 3);
  octree.add_nodes(node(1, 1, 1, 1).children(1).unwrap());
  octree.merge_node(node(2, 2, 2, 2)).unwrap();
  assert_eq!(octree.nodes(), &HashSet::from([node(1, 1, 1, 1)]));
  assert!(octree.merge_node(OctreeNode::ROOT).is_err());
}

#[test]
fn test_merge_can_leave_nesting() {
  let mut octree = unit_octree(0, 3);
  octree.add_nodes([node(0, 0, 0, 2), node(2, 2, 2, 3)]);
  octree.merge_node(node(0, 0, 0, 2)).unwrap();
  assert!(octree.contains(&node(0, 0, 0, 1)));
  assert!(octree.contains(&node(2, 2, 2, 3)), "finer members survive a merge");
}

#[test]
fn test_merge_nodes_counts_families() {
  let mut octree = unit_octree(0, 3);
  octree.add_nodes(OctreeNode::ROOT.children(2).unwrap());
  let first = node(0, 0, 0, 2);
  let same_family = node(1, 1, 1, 2);
  let other = node(2, 0, 0, 2);
  assert_eq!(octree.merge_nodes([first, same_family, other]).unwrap(), 2);
  assert_eq!(octree.len(), 64 - 16 + 2);
}

// =========================================================================
// Batch 4: Selection and neighbor queries
// =========================================================================

#[test]
fn test_selection_only_members() {
  let mut octree = unit_octree(0, 3);
  let n = node(0, 0, 0, 1);
  assert!(!octree.select(n));
  octree.add_node(n);
  assert!(octree.select(n));
  assert!(octree.is_selected(&n));
  assert!(octree.deselect(&n));
  octree.select(n);
  octree.clear_selection();
  assert!(octree.selected().is_empty());
}

#[test]
fn test_removal_deselects() {
  let mut octree = unit_octree(0, 3);
  let n = node(0, 0, 0, 1);
  octree.add_node(n);
  octree.select(n);
  octree.subdivide_node(n).unwrap();
  assert!(!octree.is_selected(&n));

  let child = node(0, 0, 0, 2);
  octree.select(child);
  octree.delete_node(&child);
  assert!(octree.selected().is_empty());
}

#[test]
fn test_members_touching() {
  let mut octree = unit_octree(0, 3);
  octree.add_nodes([node(1, 0, 0, 1), node(4, 4, 4, 3), node(1, 1, 1, 2)]);
  let n = node(0, 0, 0, 1);
  let mut touching = octree.members_touching(&n).unwrap();
  touching.sort();
  assert_eq!(touching, vec![node(1, 0, 0, 1), node(4, 4, 4, 3)]);
}
