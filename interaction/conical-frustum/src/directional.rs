use crate::*;

impl<T: Scalar> ConicalFrustum<T> {
  /// The target's bounds point closest to the axis point nearest its center. For targets
  /// sitting off the axis this picks the part of the bounds that leans towards it.
  pub fn closest_target_point(&self, target: &impl TargetBounding<T>) -> Vec3<T> {
    target.closest_point(self.project_on_axis(target.center()))
  }

  /// Angle in rad between the axis and the ray from the apex to `point`.
  ///
  /// An offset from the axis within the rounding noise of the inputs counts as zero, so a
  /// point computed on the axis of any pose gets angle 0.
  pub fn angle_to_axis(&self, point: Vec3<T>) -> T {
    let offset = point - self.position();
    let direction = *self.direction();
    let noise = T::epsilon() * T::by_f64(16.) * (point.length() + self.position().length());
    if offset.dot(direction) > T::zero() && offset.cross(direction).length() <= noise {
      return T::zero();
    }
    offset.angle_to(direction)
  }

  /// 1 on the axis, falling linearly to 0 at the aperture angle and beyond.
  pub fn angular_score(&self, point: Vec3<T>) -> T {
    let angle = Deg::from_rad(self.angle_to_axis(point)).value;
    let aperture = self.config().aperture().value;
    let ratio = if aperture > T::zero() {
      angle / aperture
    } else if angle > T::zero() {
      T::one()
    } else {
      T::zero()
    };
    T::one() - ratio.saturate()
  }

  /// Directional hit test: the target's closest point must lie inside the frustum, the score
  /// then grades how close to the axis it is.
  pub fn hits_target(&self, target: &impl TargetBounding<T>) -> TargetScore<T> {
    self.hits_target_with_inspector(target, &mut ())
  }

  pub fn hits_target_with_inspector(
    &self,
    target: &impl TargetBounding<T>,
    inspector: &mut impl ScoringInspector<T>,
  ) -> TargetScore<T> {
    let point = self.closest_target_point(target);
    inspector.on_closest_point(point);

    if !self.contains(&point) {
      return TargetScore::miss(point);
    }

    TargetScore {
      hit: true,
      score: self.angular_score(point),
      point,
    }
  }

  /// Same angular score as [`Self::hits_target`] but without requiring containment, for a best
  /// guess when nothing is strictly inside.
  pub fn nearest_target_hit(&self, target: &impl TargetBounding<T>) -> TargetScore<T> {
    self.nearest_target_hit_with_inspector(target, &mut ())
  }

  pub fn nearest_target_hit_with_inspector(
    &self,
    target: &impl TargetBounding<T>,
    inspector: &mut impl ScoringInspector<T>,
  ) -> TargetScore<T> {
    let point = self.closest_target_point(target);
    inspector.on_closest_point(point);
    TargetScore::from_score(self.angular_score(point), point)
  }
}
