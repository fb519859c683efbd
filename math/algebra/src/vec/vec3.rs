use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Facet)]
pub struct Vec3<T> {
  pub x: T,
  pub y: T,
  pub z: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec3<T> {}

impl<T> VectorSpace<T> for Vec3<T> where
  T: Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T> + Div<T, Output = T> + Copy
{
}
impl<T: Scalar> InnerProductSpace<T> for Vec3<T> {
  #[inline]
  fn dot_impl(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y + self.z * b.z
  }
}

impl<T: Scalar> Lerp<T> for Vec3<T> {
  #[inline(always)]
  fn lerp(self, b: Self, t: T) -> Self {
    self * (T::one() - t) + b * t
  }
}

impl<T> Vec3<T> {
  #[inline(always)]
  pub const fn new(x: T, y: T, z: T) -> Self {
    Self { x, y, z }
  }
}

impl<T: Copy> Vec3<T> {
  #[inline(always)]
  pub fn splat(v: T) -> Self {
    Self::new(v, v, v)
  }

  #[inline]
  pub fn map<X>(self, f: impl Fn(T) -> X) -> Vec3<X> {
    Vec3::new(f(self.x), f(self.y), f(self.z))
  }

  #[inline]
  pub fn zip<X>(self, other: Self, f: impl Fn(T, T) -> X) -> Vec3<X> {
    Vec3::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
  }
}

impl<T: Scalar> Vec3<T> {
  #[inline(always)]
  pub fn zero() -> Self {
    Self::splat(T::zero())
  }

  #[inline(always)]
  pub fn one() -> Self {
    Self::splat(T::one())
  }

  #[inline(always)]
  pub fn unit_x() -> Self {
    Self::new(T::one(), T::zero(), T::zero())
  }

  #[inline(always)]
  pub fn unit_y() -> Self {
    Self::new(T::zero(), T::one(), T::zero())
  }

  #[inline(always)]
  pub fn unit_z() -> Self {
    Self::new(T::zero(), T::zero(), T::one())
  }

  #[inline]
  pub fn cross(&self, b: Self) -> Self {
    Self {
      x: self.y * b.z - self.z * b.y,
      y: self.z * b.x - self.x * b.z,
      z: self.x * b.y - self.y * b.x,
    }
  }

  /// Unsigned angle between the two vectors in rad, in [0, PI]. Zero if either side is zero.
  ///
  /// Solved with atan2 of the sine and cosine parts so that small angles keep their precision,
  /// acos of a cosine near 1 can not resolve them in f32.
  #[inline]
  pub fn angle_to(&self, other: impl InnerData<Self>) -> T {
    let other = other.get_inner();
    self.cross(other).length().atan2(self.dot(other))
  }

  #[inline]
  pub fn min(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.min(b))
  }

  #[inline]
  pub fn max(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.max(b))
  }

  #[inline]
  pub fn clamp(self, min: Self, max: Self) -> Self {
    self.max(min).min(max)
  }

  #[inline]
  pub fn abs(self) -> Self {
    self.map(|v| v.abs())
  }

  #[inline]
  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
  }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
  type Output = Self;
  #[inline(always)]
  fn add(self, b: Self) -> Self {
    Self::new(self.x + b.x, self.y + b.y, self.z + b.z)
  }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
  type Output = Self;
  #[inline(always)]
  fn sub(self, b: Self) -> Self {
    Self::new(self.x - b.x, self.y - b.y, self.z - b.z)
  }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vec3<T> {
  type Output = Self;
  #[inline(always)]
  fn mul(self, s: T) -> Self {
    Self::new(self.x * s, self.y * s, self.z * s)
  }
}

impl<T: Div<Output = T> + Copy> Div<T> for Vec3<T> {
  type Output = Self;
  #[inline(always)]
  fn div(self, s: T) -> Self {
    Self::new(self.x / s, self.y / s, self.z / s)
  }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
  type Output = Self;
  #[inline(always)]
  fn neg(self) -> Self {
    Self::new(-self.x, -self.y, -self.z)
  }
}

impl<T> fmt::Display for Vec3<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
  }
}
