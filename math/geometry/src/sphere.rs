use crate::*;

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Facet)]
pub struct Sphere<T = f32> {
  pub center: Vec3<T>,
  pub radius: T,
}

impl<T: Scalar> Sphere<T> {
  pub fn new(center: Vec3<T>, radius: T) -> Self {
    Self { center, radius }
  }

  pub fn to_box3(&self) -> Box3<T> {
    Box3::from_center_half_extent(self.center, Vec3::splat(self.radius))
  }
}

impl<T: Scalar> ContainAble<T, Vec3<T>> for Sphere<T> {
  fn contains(&self, point: &Vec3<T>) -> bool {
    (*point - self.center).length2() <= self.radius * self.radius
  }
}

impl<T: Scalar> TargetBounding<T> for Sphere<T> {
  fn center(&self) -> Vec3<T> {
    self.center
  }

  fn closest_point(&self, query: Vec3<T>) -> Vec3<T> {
    if self.contains(&query) {
      return query;
    }
    self.center + (query - self.center).into_normalized() * self.radius
  }
}

#[test]
fn sphere_closest_point() {
  let s = Sphere::new(Vec3::new(0., 2., 0.), 1.);
  assert_eq!(s.closest_point(Vec3::new(0., 2.5, 0.)), Vec3::new(0., 2.5, 0.));
  assert_eq!(s.closest_point(Vec3::new(0., 10., 0.)), Vec3::new(0., 3., 0.));
  assert_eq!(s.closest_point(Vec3::new(-4., 2., 0.)), Vec3::new(-1., 2., 0.));
  assert_eq!(s.to_box3().max, Vec3::new(1., 3., 1.));
}
