//! Shared helpers for unit tests.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::node::OctreeNode;
use crate::octree::{Octree, OctreeConfig};

/// Deterministic RNG so property tests are reproducible.
pub fn seeded_rng(seed: u64) -> StdRng {
  StdRng::seed_from_u64(seed)
}

/// Shorthand for a node known to be valid.
pub fn node(r: i128, s: i128, t: i128, level: u8) -> OctreeNode {
  OctreeNode::new(r, s, t, level).unwrap()
}

/// Random in-bounds node with level in `min_level..=max_level`.
pub fn random_node(rng: &mut StdRng, min_level: u8, max_level: u8) -> OctreeNode {
  let level = rng.random_range(min_level..=max_level);
  let side = 1i128 << level;
  let mut code = || rng.random_range(0..side as i64) as i128;
  let (r, s, t) = (code(), code(), code());
  node(r, s, t, level)
}

/// Unit-cube octree with the given depth range.
pub fn unit_octree(min_depth: u8, max_depth: u8) -> Octree {
  Octree::new(OctreeConfig::default().with_depth_range(min_depth, max_depth)).unwrap()
}

/// How two cells meet, from their integer extents alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
  Apart,
  Vertex,
  Edge,
  Face,
  Overlap,
}

/// Classify the contact between two cells by comparing their code
/// intervals at the finer of the two levels.
pub fn contact(a: &OctreeNode, b: &OctreeNode) -> Contact {
  let level = a.level().max(b.level());
  let span = |n: &OctreeNode, c: i128| {
    let shift = level - n.level();
    (c << shift, (c + 1) << shift)
  };
  let mut overlapping = 0;
  for (ca, cb) in a.code().into_iter().zip(b.code()) {
    let (lo_a, hi_a) = span(a, ca);
    let (lo_b, hi_b) = span(b, cb);
    if lo_a < hi_b && lo_b < hi_a {
      overlapping += 1;
    } else if hi_a != lo_b && hi_b != lo_a {
      return Contact::Apart;
    }
  }
  match overlapping {
    3 => Contact::Overlap,
    2 => Contact::Face,
    1 => Contact::Edge,
    _ => Contact::Vertex,
  }
}

/// Every pair of members touching across a face or edge whose level gap
/// exceeds `k`, as `(finer, coarser)`. Pairs are found by brute force over
/// cell extents, without any neighbor finding.
pub fn unbalanced_pairs(octree: &Octree, k: u8) -> Vec<(OctreeNode, OctreeNode)> {
  let members: Vec<_> = octree.iter().copied().collect();
  let mut out = Vec::new();
  for fine in &members {
    for coarse in &members {
      if fine.level() <= coarse.level() || fine.level() - coarse.level() <= k {
        continue;
      }
      if matches!(contact(fine, coarse), Contact::Face | Contact::Edge) {
        out.push((*fine, *coarse));
      }
    }
  }
  out
}

/// True when some member is a strict ancestor of another.
pub fn has_nesting(nodes: &HashSet<OctreeNode>) -> bool {
  nodes
    .iter()
    .any(|n| (1..=n.level()).any(|l| nodes.contains(&n.parent(l).unwrap())))
}
