//! Small linear algebra kernel used by the pointing crates.
//!
//! Only the three dimensional pieces the interaction volumes need live here:
//! vectors, normalized directions, rotations and angle units.

mod angle;
mod quat;
mod vec;

use std::fmt::{Debug, Display};

pub use angle::*;
pub use num_traits::{Float, FloatConst, One, Zero};
pub use quat::*;
pub use vec::*;

pub use facet::Facet;
pub use serde::{Deserialize, Serialize};

/// The real number type all geometry is generic over. Implemented for `f32` and `f64`.
pub trait Scalar:
  Float + FloatConst + Lerp<Self> + Default + Debug + Display + Send + Sync + 'static
{
  fn by_f64(v: f64) -> Self;

  #[inline(always)]
  fn half() -> Self {
    Self::by_f64(0.5)
  }

  #[inline(always)]
  fn two() -> Self {
    Self::by_f64(2.0)
  }

  #[inline(always)]
  fn pi_by_c180() -> Self {
    Self::PI() / Self::by_f64(180.0)
  }

  #[inline(always)]
  fn c180_by_pi() -> Self {
    Self::by_f64(180.0) / Self::PI()
  }

  /// clamp into [0, 1], NaN maps to zero
  #[inline]
  fn saturate(self) -> Self {
    self.max(Self::zero()).min(Self::one())
  }
}

impl Scalar for f32 {
  #[inline(always)]
  fn by_f64(v: f64) -> Self {
    v as f32
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn by_f64(v: f64) -> Self {
    v
  }
}

pub trait Lerp<T> {
  #[must_use]
  fn lerp(self, b: Self, t: T) -> Self;
}

macro_rules! impl_scalar_lerp {
  ($ty: ty) => {
    impl Lerp<$ty> for $ty {
      #[inline(always)]
      fn lerp(self, b: Self, t: $ty) -> Self {
        self * (1.0 - t) + b * t
      }
    }
  };
}

impl_scalar_lerp!(f32);
impl_scalar_lerp!(f64);

#[test]
fn scalar_lerp_hits_both_ends() {
  assert_eq!(0.03_f32.lerp(3.0, 0.), 0.03);
  assert_eq!(0.03_f32.lerp(3.0, 1.), 3.0);
  assert_eq!(2.0_f64.lerp(4.0, 0.5), 3.0);
  assert_eq!(f32::NAN.saturate(), 0.);
  assert_eq!(1.5_f32.saturate(), 1.);
  assert_eq!((-0.5_f64).saturate(), 0.);
}
