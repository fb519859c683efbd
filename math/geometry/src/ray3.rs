use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray3<T = f32> {
  pub origin: Vec3<T>,
  pub direction: NormalizedVec3<T>,
}

impl<T: Scalar> Ray3<T> {
  pub fn new(origin: Vec3<T>, direction: NormalizedVec3<T>) -> Self {
    Self { origin, direction }
  }

  /// None if the direction is zero length.
  pub fn from_origin_to_target(origin: Vec3<T>, target: Vec3<T>) -> Option<Self> {
    let direction = (target - origin).try_into_normalized()?;
    Some(Self::new(origin, direction))
  }

  pub fn at(&self, distance: T) -> Vec3<T> {
    self.origin + self.direction * distance
  }

  /// See [`intersect_horizontal_plane_through_point`].
  pub fn intersect_horizontal_plane(&self, plane_point: Vec3<T>) -> Option<Vec3<T>> {
    intersect_horizontal_plane_through_point(self.origin, *self.direction, plane_point)
  }
}

/// Where the line `origin + t * direction` crosses the horizontal (y = const) plane passing
/// through `plane_point`.
///
/// `t` may be negative, the plane is allowed to lie behind the origin. The returned point
/// lies exactly on the plane's height. Return None for a ray parallel to the plane, or
/// when the solved point is not finite.
pub fn intersect_horizontal_plane_through_point<T: Scalar>(
  origin: Vec3<T>,
  direction: Vec3<T>,
  plane_point: Vec3<T>,
) -> Option<Vec3<T>> {
  if direction.y == T::zero() {
    return None;
  }
  let t = (plane_point.y - origin.y) / direction.y;
  let hit = Vec3::new(
    origin.x + t * direction.x,
    plane_point.y,
    origin.z + t * direction.z,
  );
  hit.is_finite().then_some(hit)
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn horizontal_plane_crossing() {
    let origin = Vec3::new(0., 1., 0.);
    let direction = Vec3::new(0., -1., 1.).into_normalized();
    let ray = Ray3::new(origin, direction);
    let hit = ray.intersect_horizontal_plane(Vec3::new(0., 0., 5.)).unwrap();
    assert!(hit.distance_to(Vec3::new(0., 0., 1.)) < 1e-12);
    assert_eq!(hit.y, 0.);

    // plane above the origin: solved backwards along the ray
    let behind = ray.intersect_horizontal_plane(Vec3::new(3., 2., 3.)).unwrap();
    assert!(behind.distance_to(Vec3::new(0., 2., -1.)) < 1e-12);
  }

  #[test]
  fn parallel_ray_has_no_crossing() {
    let forward = Vec3::new(0., 0., 1.);
    assert!(intersect_horizontal_plane_through_point(
      Vec3::new(0., 1., 0.),
      forward,
      Vec3::new(0., 0., 5.)
    )
    .is_none());

    let tiny = Vec3::new(0., f64::MIN_POSITIVE, 1.);
    assert!(
      intersect_horizontal_plane_through_point(Vec3::new(0., 1e300, 0.), tiny, Vec3::zero())
        .is_none()
    );
  }

  #[test]
  fn scale_of_direction_does_not_matter() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
      let origin = Vec3::new(rng.gen_range(-5.0..5.0), rng.gen_range(0.5..3.0), 0.);
      let direction = Vec3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..-0.1),
        rng.gen_range(0.1..1.0),
      );
      let plane_point = Vec3::new(0., rng.gen_range(-1.0..0.4), 3.);
      let a = intersect_horizontal_plane_through_point(origin, direction, plane_point).unwrap();
      let b =
        intersect_horizontal_plane_through_point(origin, direction * 7.5, plane_point).unwrap();
      assert!(a.distance_to(b) < 1e-9);
      assert_eq!(a.y, plane_point.y);
    }
  }

  #[test]
  fn ray_from_points() {
    assert!(Ray3::from_origin_to_target(Vec3::<f32>::one(), Vec3::one()).is_none());
    let ray = Ray3::from_origin_to_target(Vec3::zero(), Vec3::new(0., 0., 4.)).unwrap();
    assert_eq!(ray.at(2.), Vec3::new(0., 0., 2.));
  }
}
