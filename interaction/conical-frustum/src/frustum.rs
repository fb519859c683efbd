use crate::*;

/// A conical frustum anchored at a pose: the apex sits at the pose position and the axis
/// follows the pose forward. The usable part of the cone spans `[min_length, max_length]`
/// along the axis.
///
/// Everything derived (direction, end points, radius) is recomputed from the current pose
/// on access, so a moving anchor only needs [`ConicalFrustum::set_pose`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConicalFrustum<T: Scalar = f32> {
  config: ConicalFrustumConfig<T>,
  pose: Pose<T>,
}

impl<T: Scalar> ConicalFrustum<T> {
  pub fn new(config: ConicalFrustumConfig<T>, pose: Pose<T>) -> Self {
    Self { config, pose }
  }

  pub fn config(&self) -> &ConicalFrustumConfig<T> {
    &self.config
  }

  pub fn config_mut(&mut self) -> &mut ConicalFrustumConfig<T> {
    &mut self.config
  }

  pub fn pose(&self) -> &Pose<T> {
    &self.pose
  }

  pub fn set_pose(&mut self, pose: Pose<T>) -> &mut Self {
    self.pose = pose;
    self
  }

  pub fn position(&self) -> Vec3<T> {
    self.pose.position
  }

  pub fn direction(&self) -> NormalizedVec3<T> {
    self.pose.forward()
  }

  pub fn start_point(&self) -> Vec3<T> {
    self.position() + self.direction() * self.config.min_length()
  }

  pub fn end_point(&self) -> Vec3<T> {
    self.position() + self.direction() * self.config.max_length()
  }

  /// Cross section radius at `length` from the apex.
  ///
  /// Interpolates from the start radius at the apex to the end radius at `max_length`,
  /// so the result is only meaningful for lengths inside `[min_length, max_length]`.
  /// Return None when `max_length` is zero, the cone then has no extent to interpolate over.
  pub fn radius_at_length(&self, length: T) -> Option<T> {
    let max_length = self.config.max_length();
    if max_length <= T::zero() {
      return None;
    }
    let ratio = length / max_length;
    Some(self.config.radius_start().lerp(self.config.radius_end(), ratio))
  }

  /// The projection of `point` onto the axis line through the apex, as an offset from the apex.
  pub(crate) fn axis_offset_of(&self, point: Vec3<T>) -> Vec3<T> {
    (point - self.position()).project_onto(self.direction())
  }

  /// Axis point nearest to `point`, in world space.
  pub fn project_on_axis(&self, point: Vec3<T>) -> Vec3<T> {
    self.position() + self.axis_offset_of(point)
  }
}

impl<T: Scalar> ContainAble<T, Vec3<T>> for ConicalFrustum<T> {
  fn contains(&self, point: &Vec3<T>) -> bool {
    let along_axis = self.axis_offset_of(*point);
    if along_axis.dot(self.direction()) < T::zero() {
      return false;
    }

    let length = along_axis.length();
    if length < self.config.min_length() || length > self.config.max_length() {
      return false;
    }

    let Some(radius) = self.radius_at_length(length) else {
      log::trace!("empty conical frustum rejects {point:?}");
      return false;
    };

    let radial = (self.position() + along_axis).distance_to(*point);
    radial <= radius
  }
}
