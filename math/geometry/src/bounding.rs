use crate::*;

/// A target's bounding volume as seen by interaction queries.
///
/// The closest point follows the usual "closest point on bounds" rule: a query point
/// that is already inside the volume is returned unchanged.
pub trait TargetBounding<T: Scalar> {
  fn center(&self) -> Vec3<T>;

  fn closest_point(&self, query: Vec3<T>) -> Vec3<T>;
}

impl<T: Scalar, B: TargetBounding<T> + ?Sized> TargetBounding<T> for &B {
  fn center(&self) -> Vec3<T> {
    (**self).center()
  }

  fn closest_point(&self, query: Vec3<T>) -> Vec3<T> {
    (**self).closest_point(query)
  }
}
