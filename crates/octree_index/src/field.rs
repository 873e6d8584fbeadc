//! Scalar fields that drive generation.
//!
//! Generation only needs a value per world-space point and a threshold.
//! Any `Fn(f64, f64, f64) -> f64` is a field; the analytic samplers below are
//! signed distance functions that are easy to verify by hand.

use glam::DVec3;

/// A scalar function over world space.
pub trait ScalarField {
  fn sample(&self, p: DVec3) -> f64;
}

impl<F> ScalarField for F
where
  F: Fn(f64, f64, f64) -> f64,
{
  #[inline]
  fn sample(&self, p: DVec3) -> f64 {
    self(p.x, p.y, p.z)
  }
}

/// Sphere SDF: negative inside.
///
/// SDF: `|p - center| - radius`
#[derive(Clone, Debug)]
pub struct SphereField {
  pub center: DVec3,
  pub radius: f64,
}

impl Default for SphereField {
  fn default() -> Self {
    Self {
      center: DVec3::ZERO,
      radius: 1.0,
    }
  }
}

impl SphereField {
  pub fn new(radius: f64) -> Self {
    Self {
      radius,
      ..Default::default()
    }
  }

  pub fn with_center(mut self, center: DVec3) -> Self {
    self.center = center;
    self
  }
}

impl ScalarField for SphereField {
  #[inline]
  fn sample(&self, p: DVec3) -> f64 {
    (p - self.center).length() - self.radius
  }
}

/// Plane SDF: negative behind the plane.
///
/// SDF: `dot(p, normal) - offset`, with `normal` normalized on construction.
#[derive(Clone, Debug)]
pub struct PlaneField {
  pub normal: DVec3,
  pub offset: f64,
}

impl Default for PlaneField {
  /// Ground plane `z = 0`.
  fn default() -> Self {
    Self {
      normal: DVec3::Z,
      offset: 0.0,
    }
  }
}

impl PlaneField {
  /// Falls back to +Z for a zero normal.
  pub fn new(normal: DVec3, offset: f64) -> Self {
    Self {
      normal: normal.try_normalize().unwrap_or(DVec3::Z),
      offset,
    }
  }

  /// Horizontal plane at height `z`.
  pub fn ground(z: f64) -> Self {
    Self::new(DVec3::Z, z)
  }
}

impl ScalarField for PlaneField {
  #[inline]
  fn sample(&self, p: DVec3) -> f64 {
    p.dot(self.normal) - self.offset
  }
}

/// Axis-aligned box SDF: negative inside.
#[derive(Clone, Debug)]
pub struct BoxField {
  pub center: DVec3,
  pub half_extents: DVec3,
}

impl BoxField {
  pub fn new(half_extents: DVec3) -> Self {
    Self {
      center: DVec3::ZERO,
      half_extents,
    }
  }

  pub fn with_center(mut self, center: DVec3) -> Self {
    self.center = center;
    self
  }
}

impl ScalarField for BoxField {
  fn sample(&self, p: DVec3) -> f64 {
    let q = (p - self.center).abs() - self.half_extents;
    q.max(DVec3::ZERO).length() + q.max_element().min(0.0)
  }
}
