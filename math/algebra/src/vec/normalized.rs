use std::{marker::PhantomData, ops::*};

use crate::*;

pub type NormalizedVec3<T> = NormalizedVector<T, Vec3<T>>;

/// A vector that is known to be unit length.
///
/// The only way to build one is through normalization, so holding one proves the
/// direction is valid, except for the zero vector case of [`IntoNormalizedVector::into_normalized`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NormalizedVector<T, V> {
  value: V,
  phantom: PhantomData<T>,
}

pub trait IntoNormalizedVector<T, V> {
  /// zero length input produce the zero vector, use [`Self::try_into_normalized`] if
  /// that matters for the caller.
  #[must_use]
  fn into_normalized(self) -> NormalizedVector<T, V>;

  /// return None if the vector has no direction (zero length or not finite)
  #[must_use]
  fn try_into_normalized(self) -> Option<NormalizedVector<T, V>>;
}

impl<T: Scalar, V: InnerProductSpace<T>> IntoNormalizedVector<T, V> for V {
  #[inline(always)]
  fn into_normalized(self) -> NormalizedVector<T, V> {
    NormalizedVector::wrap(self.normalize())
  }

  #[inline]
  fn try_into_normalized(self) -> Option<NormalizedVector<T, V>> {
    let length2 = self.length2();
    if length2 > T::zero() && length2.is_finite() {
      Some(NormalizedVector::wrap(self.normalize()))
    } else {
      None
    }
  }
}

impl<T, V> NormalizedVector<T, V> {
  #[inline(always)]
  pub(crate) fn wrap(v: V) -> Self {
    Self {
      value: v,
      phantom: PhantomData,
    }
  }

  #[inline(always)]
  pub fn value(self) -> V {
    self.value
  }
}

pub trait InnerData<T> {
  fn get_inner(self) -> T;
}

impl<T, V> InnerData<V> for NormalizedVector<T, V> {
  #[inline(always)]
  fn get_inner(self) -> V {
    self.value
  }
}
impl<V> InnerData<V> for V {
  #[inline(always)]
  fn get_inner(self) -> V {
    self
  }
}

// after add / sub / mul scalar, the vector may not be normalized
impl<T, V: VectorSpace<T>, Rhs: InnerData<V>> Add<Rhs> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn add(self, rhs: Rhs) -> Self::Output {
    self.value + rhs.get_inner()
  }
}
impl<T, V: VectorSpace<T>, Rhs: InnerData<V>> Sub<Rhs> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn sub(self, rhs: Rhs) -> Self::Output {
    self.value - rhs.get_inner()
  }
}
impl<T, V: VectorSpace<T>> Mul<T> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn mul(self, rhs: T) -> Self::Output {
    self.value * rhs
  }
}

impl<T, V> Deref for NormalizedVector<T, V> {
  type Target = V;
  #[inline(always)]
  fn deref(&self) -> &Self::Target {
    &self.value
  }
}

#[test]
fn normalization() {
  let a = Vec3::new(3., 0., 4.).into_normalized();
  assert!(a.distance_to(Vec3::new(0.6, 0., 0.8)) < 1e-12);
  assert!((a.value().length() - 1.).abs() < 1e-12);

  let scaled = a * 5.;
  assert!(scaled.distance_to(Vec3::new(3., 0., 4.)) < 1e-12);

  assert!(Vec3::<f32>::zero().try_into_normalized().is_none());
  assert!(Vec3::new(f32::INFINITY, 0., 0.).try_into_normalized().is_none());
  assert_eq!(*Vec3::<f32>::zero().into_normalized(), Vec3::zero());
}
