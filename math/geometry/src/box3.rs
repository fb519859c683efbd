use std::iter::FromIterator;

use crate::*;

/// Axis aligned box.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Facet)]
pub struct Box3<T = f32> {
  pub min: Vec3<T>,
  pub max: Vec3<T>,
}

impl<T: Scalar> Box3<T> {
  pub fn new(min: Vec3<T>, max: Vec3<T>) -> Self {
    Self { min, max }
  }

  /// An inverted box, expanding it by any point makes it valid.
  pub fn empty() -> Self {
    Self::new(Vec3::splat(T::infinity()), Vec3::splat(T::neg_infinity()))
  }

  pub fn from_center_half_extent(center: Vec3<T>, half_extent: Vec3<T>) -> Self {
    let half_extent = half_extent.abs();
    Self::new(center - half_extent, center + half_extent)
  }

  pub fn is_empty(&self) -> bool {
    self.max.x < self.min.x || self.max.y < self.min.y || self.max.z < self.min.z
  }

  pub fn expand_by_point(&mut self, point: Vec3<T>) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }
}

impl<T: Scalar> FromIterator<Vec3<T>> for Box3<T> {
  fn from_iter<I: IntoIterator<Item = Vec3<T>>>(items: I) -> Self {
    let mut bbox = Self::empty();
    items.into_iter().for_each(|p| bbox.expand_by_point(p));
    bbox
  }
}

impl<T: Scalar> ContainAble<T, Vec3<T>> for Box3<T> {
  fn contains(&self, v: &Vec3<T>) -> bool {
    v.x >= self.min.x
      && v.x <= self.max.x
      && v.y >= self.min.y
      && v.y <= self.max.y
      && v.z >= self.min.z
      && v.z <= self.max.z
  }
}

impl<T: Scalar> TargetBounding<T> for Box3<T> {
  fn center(&self) -> Vec3<T> {
    (self.min + self.max) * T::half()
  }

  fn closest_point(&self, query: Vec3<T>) -> Vec3<T> {
    query.clamp(self.min, self.max)
  }
}

#[test]
fn box_closest_point() {
  let b = Box3::new(Vec3::new(-1., -1., 4.), Vec3::new(1., 1., 6.));
  assert_eq!(b.center(), Vec3::new(0., 0., 5.));
  assert_eq!(b.closest_point(Vec3::new(0., 0., 5.5)), Vec3::new(0., 0., 5.5));
  assert_eq!(b.closest_point(Vec3::new(3., 0., 5.)), Vec3::new(1., 0., 5.));
  assert_eq!(b.closest_point(Vec3::new(-3., 2., 0.)), Vec3::new(-1., 1., 4.));
  assert!(b.contains(&Vec3::new(0.5, -0.5, 4.)));
  assert!(!b.contains(&Vec3::new(0.5, -0.5, 3.9)));

  let collected: Box3 = [Vec3::new(1., 2., 3.), Vec3::new(-1., 0., 5.)]
    .into_iter()
    .collect();
  assert_eq!(collected, Box3::new(Vec3::new(-1., 0., 3.), Vec3::new(1., 2., 5.)));
  assert!(Box3::<f32>::empty().is_empty());
}
