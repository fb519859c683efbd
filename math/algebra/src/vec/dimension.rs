use std::ops::*;

use crate::*;

/// https://en.wikipedia.org/wiki/Vector_space
pub trait VectorSpace<T>:
  Add<Self, Output = Self>
  + Sub<Self, Output = Self>
  + Mul<T, Output = Self>
  + Div<T, Output = Self>
  + Sized
  + Copy
{
}

/// https://en.wikipedia.org/wiki/Inner_product
///
/// inner space define the length and angle based on vector space
pub trait InnerProductSpace<T: Scalar>: VectorSpace<T> {
  fn dot_impl(&self, b: Self) -> T;

  #[inline]
  fn dot<Rhs: InnerData<Self>>(&self, b: Rhs) -> T {
    self.dot_impl(b.get_inner())
  }

  /// zero length vector stay unchanged
  #[inline]
  fn normalize(&self) -> Self {
    let mag_sq = self.length2();
    if mag_sq > T::zero() {
      let inv_sqrt = T::one() / mag_sq.sqrt();
      return *self * inv_sqrt;
    }
    *self
  }

  #[inline]
  fn length(&self) -> T {
    self.length2().sqrt()
  }

  #[inline]
  fn length2(&self) -> T {
    self.dot(*self)
  }

  #[inline]
  fn distance_to<Rhs: InnerData<Self>>(&self, b: Rhs) -> T {
    (*self - b.get_inner()).length()
  }

  /// Vector projection of self onto the line spanned by `onto`.
  ///
  /// A zero `onto` has no direction, the projection is then the zero vector.
  #[inline]
  fn project_onto<Rhs: InnerData<Self>>(&self, onto: Rhs) -> Self {
    let onto = onto.get_inner();
    let mag_sq = onto.length2();
    if mag_sq <= T::zero() {
      return *self * T::zero();
    }
    onto * (self.dot(onto) / mag_sq)
  }
}
