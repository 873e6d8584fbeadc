//! Direction vectors on the unit cube.

use std::ops::Neg;

/// Integer direction vector `(r, s, t)` with components in `{-1, 0, 1}`.
///
/// Axes: `r` runs Left (-1) to Right (+1), `s` runs Back (-1) to Front (+1),
/// `t` runs Down (-1) to Up (+1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Direction {
  pub r: i8,
  pub s: i8,
  pub t: i8,
}

impl Direction {
  /// The zero vector. Matches no topology entity.
  pub const ZERO: Self = Self::new(0, 0, 0);

  pub const fn new(r: i8, s: i8, t: i8) -> Self {
    Self { r, s, t }
  }

  /// Number of non-zero components: 1 = face, 2 = edge, 3 = vertex/octant.
  pub const fn magnitude(self) -> u8 {
    (self.r != 0) as u8 + (self.s != 0) as u8 + (self.t != 0) as u8
  }

  /// True when every component is in `{-1, 0, 1}`.
  pub const fn is_unit(self) -> bool {
    self.r >= -1 && self.r <= 1 && self.s >= -1 && self.s <= 1 && self.t >= -1 && self.t <= 1
  }

  /// Component along `axis` (0 = r, 1 = s, 2 = t).
  pub const fn component(self, axis: usize) -> i8 {
    match axis {
      0 => self.r,
      1 => self.s,
      _ => self.t,
    }
  }

  pub const fn to_array(self) -> [i8; 3] {
    [self.r, self.s, self.t]
  }

  pub const fn from_array(v: [i8; 3]) -> Self {
    Self::new(v[0], v[1], v[2])
  }

  /// Component-wise negation.
  pub const fn reversed(self) -> Self {
    Self::new(-self.r, -self.s, -self.t)
  }

  /// `const` equality, usable while building lookup tables.
  pub const fn same(self, other: Self) -> bool {
    self.r == other.r && self.s == other.s && self.t == other.t
  }

  /// True when `octant` lies on the boundary this direction points at:
  /// the octant agrees with every non-zero component.
  pub const fn touches(self, octant: Direction) -> bool {
    let mut axis = 0;
    while axis < 3 {
      let d = self.component(axis);
      if d != 0 && d != octant.component(axis) {
        return false;
      }
      axis += 1;
    }
    true
  }
}

impl Neg for Direction {
  type Output = Self;

  fn neg(self) -> Self {
    self.reversed()
  }
}

impl From<[i8; 3]> for Direction {
  fn from(v: [i8; 3]) -> Self {
    Self::from_array(v)
  }
}
