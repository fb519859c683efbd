use std::ops::Mul;

use crate::*;

/// Unit quaternion rotation. `w` is the scalar part.
#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Facet)]
pub struct Quat<T> {
  pub x: T,
  pub y: T,
  pub z: T,
  pub w: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Scalar> Default for Quat<T> {
  fn default() -> Self {
    Self::identity()
  }
}

impl<T: Scalar> Quat<T> {
  pub fn new(x: T, y: T, z: T, w: T) -> Self {
    Self { x, y, z, w }
  }

  pub fn identity() -> Self {
    Self::new(T::zero(), T::zero(), T::zero(), T::one())
  }

  pub fn from_axis_angle(axis: NormalizedVec3<T>, rad: T) -> Self {
    let (s, c) = (rad * T::half()).sin_cos();
    Self::new(axis.x * s, axis.y * s, axis.z * s, c)
  }

  /// The shortest arc rotation that maps `from` onto `to`.
  pub fn from_rotation_arc(from: NormalizedVec3<T>, to: NormalizedVec3<T>) -> Self {
    let d = from.dot(to);
    let eps = T::by_f64(1e-6);
    if d >= T::one() - eps {
      return Self::identity();
    }
    if d <= -T::one() + eps {
      // any axis perpendicular to `from` works for the half turn
      let mut helper = from.cross(Vec3::unit_x());
      if helper.length2() < eps {
        helper = from.cross(Vec3::unit_y());
      }
      return Self::from_axis_angle(helper.into_normalized(), T::PI());
    }
    let axis = from.cross(*to);
    Self::new(axis.x, axis.y, axis.z, T::one() + d).normalize()
  }

  /// Rotation whose local +Z axis points along `forward`.
  pub fn looking_towards(forward: NormalizedVec3<T>) -> Self {
    Self::from_rotation_arc(Vec3::unit_z().into_normalized(), forward)
  }

  pub fn length2(&self) -> T {
    self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
  }

  #[must_use]
  pub fn normalize(&self) -> Self {
    let len2 = self.length2();
    if len2 <= T::zero() {
      return Self::identity();
    }
    let inv = T::one() / len2.sqrt();
    Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
  }

  #[must_use]
  pub fn conjugate(&self) -> Self {
    Self::new(-self.x, -self.y, -self.z, self.w)
  }

  /// v' = v + 2w(q × v) + 2q × (q × v)
  pub fn rotate(&self, v: Vec3<T>) -> Vec3<T> {
    let q = Vec3::new(self.x, self.y, self.z);
    let t = q.cross(v) * T::two();
    v + t * self.w + q.cross(t)
  }

  pub fn forward(&self) -> NormalizedVec3<T> {
    self.rotate(Vec3::unit_z()).into_normalized()
  }
}

impl<T: Scalar> Mul for Quat<T> {
  type Output = Self;

  fn mul(self, b: Self) -> Self {
    let a = self;
    Self::new(
      a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
      a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
      a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
      a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
  }
}

impl<T: Scalar> Mul<Vec3<T>> for Quat<T> {
  type Output = Vec3<T>;

  fn mul(self, v: Vec3<T>) -> Vec3<T> {
    self.rotate(v)
  }
}
