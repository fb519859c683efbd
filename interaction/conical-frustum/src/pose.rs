use crate::*;

/// Tracked anchor (hand, controller) snapshot. Local +Z is the pointing direction.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Facet)]
pub struct Pose<T = f32> {
  pub position: Vec3<T>,
  pub rotation: Quat<T>,
}

impl<T: Scalar> Default for Pose<T> {
  fn default() -> Self {
    Self::new(Vec3::zero(), Quat::identity())
  }
}

impl<T: Scalar> Pose<T> {
  pub fn new(position: Vec3<T>, rotation: Quat<T>) -> Self {
    Self { position, rotation }
  }

  /// None if `forward` has no direction.
  pub fn looking_towards(position: Vec3<T>, forward: Vec3<T>) -> Option<Self> {
    let forward = forward.try_into_normalized()?;
    Some(Self::new(position, Quat::looking_towards(forward)))
  }

  pub fn forward(&self) -> NormalizedVec3<T> {
    self.rotation.forward()
  }
}

#[test]
fn pose_forward() {
  let pose = Pose::<f32>::default();
  assert_eq!(*pose.forward(), Vec3::unit_z());

  let pose = Pose::looking_towards(Vec3::new(0., 1., 0.), Vec3::new(0., -2., 2.)).unwrap();
  let expect = Vec3::new(0., -1., 1.).into_normalized();
  assert!(pose.forward().distance_to(expect) < 1e-6);

  assert!(Pose::looking_towards(Vec3::<f32>::zero(), Vec3::zero()).is_none());
}
