use crate::*;

/// Box with its own rotation, `half_extent` is measured along the rotated axes.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Facet)]
pub struct OrientedBox3<T = f32> {
  pub center: Vec3<T>,
  pub half_extent: Vec3<T>,
  pub rotation: Quat<T>,
}

impl<T: Scalar> OrientedBox3<T> {
  pub fn new(center: Vec3<T>, half_extent: Vec3<T>, rotation: Quat<T>) -> Self {
    Self {
      center,
      half_extent: half_extent.abs(),
      rotation,
    }
  }

  fn to_local(&self, point: Vec3<T>) -> Vec3<T> {
    self.rotation.conjugate() * (point - self.center)
  }

  fn to_world(&self, local: Vec3<T>) -> Vec3<T> {
    self.rotation * local + self.center
  }

  /// Axis aligned box enclosing this one.
  pub fn to_box3(&self) -> Box3<T> {
    let e = self.half_extent;
    let (one, neg) = (T::one(), -T::one());
    [one, neg]
      .into_iter()
      .flat_map(|sx| [one, neg].into_iter().map(move |sy| (sx, sy)))
      .flat_map(|(sx, sy)| [one, neg].into_iter().map(move |sz| (sx, sy, sz)))
      .map(|(sx, sy, sz)| self.to_world(Vec3::new(e.x * sx, e.y * sy, e.z * sz)))
      .collect()
  }
}

impl<T: Scalar> ContainAble<T, Vec3<T>> for OrientedBox3<T> {
  fn contains(&self, point: &Vec3<T>) -> bool {
    let local = self.to_local(*point).abs();
    local.x <= self.half_extent.x && local.y <= self.half_extent.y && local.z <= self.half_extent.z
  }
}

impl<T: Scalar> TargetBounding<T> for OrientedBox3<T> {
  fn center(&self) -> Vec3<T> {
    self.center
  }

  fn closest_point(&self, query: Vec3<T>) -> Vec3<T> {
    let local = self
      .to_local(query)
      .clamp(-self.half_extent, self.half_extent);
    self.to_world(local)
  }
}

#[test]
fn oriented_box_closest_point() {
  let y = Vec3::new(0., 1., 0.).into_normalized();
  let rotation = Quat::from_axis_angle(y, std::f64::consts::FRAC_PI_4);
  let obb = OrientedBox3::new(Vec3::new(0., 0., 5.), Vec3::new(1., 1., 1.), rotation);

  // the rotated corner sticks out along +x by sqrt(2)
  let far = obb.closest_point(Vec3::new(10., 0., 5.));
  assert!((far.x - 2.0_f64.sqrt()).abs() < 1e-9);
  assert!(far.y.abs() < 1e-9);
  assert!((far.z - 5.).abs() < 1e-9);

  let inside = Vec3::new(0.2, 0.3, 5.1);
  assert!(obb.contains(&inside));
  assert!(obb.closest_point(inside).distance_to(inside) < 1e-9);

  let aabb = obb.to_box3();
  assert!((aabb.max.x - 2.0_f64.sqrt()).abs() < 1e-9);
  assert!((aabb.max.y - 1.).abs() < 1e-9);
}
