use crate::*;

pub const DEFAULT_GAUSSIAN_SIGMA: f64 = 0.4;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum GaussianScoringError {
  #[error("gaussian sigma must be finite and positive, got {0}")]
  InvalidSigma(f64),
}

/// Which ray is cast from the anchor towards the target's horizontal plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ReferenceDirection<T = f32> {
  /// The anchor's own forward axis.
  FromForward,
  /// From the given head position through the anchor.
  FromHeadToAnchor(Vec3<T>),
  /// From the given body (torso) position through the anchor.
  FromBodyToAnchor(Vec3<T>),
}

impl<T: Scalar> ReferenceDirection<T> {
  /// None if the direction is undefined, i.e. the head or body sits exactly on the anchor.
  pub fn resolve(&self, pose: &Pose<T>) -> Option<NormalizedVec3<T>> {
    match self {
      Self::FromForward => Some(pose.forward()),
      Self::FromHeadToAnchor(origin) | Self::FromBodyToAnchor(origin) => {
        (pose.position - *origin).try_into_normalized()
      }
    }
  }

  pub fn ray(&self, pose: &Pose<T>) -> Option<Ray3<T>> {
    self
      .resolve(pose)
      .map(|direction| Ray3::new(pose.position, direction))
  }
}

/// Scores a target by the normal density of the distance between the target center and the
/// point where a reference ray crosses the target's horizontal plane.
///
/// The score is a raw density, its maximum is [`GaussianScoring::peak_density`] and not 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaussianScoring<T = f32> {
  density: NormalDistribution<T>,
}

impl<T: Scalar> Default for GaussianScoring<T> {
  fn default() -> Self {
    let sigma = T::by_f64(DEFAULT_GAUSSIAN_SIGMA);
    Self {
      density: NormalDistribution::centered(sigma).unwrap_or_default(),
    }
  }
}

impl<T: Scalar> GaussianScoring<T> {
  pub fn new(sigma: T) -> Result<Self, GaussianScoringError> {
    NormalDistribution::centered(sigma)
      .map(|density| Self { density })
      .ok_or_else(|| GaussianScoringError::InvalidSigma(sigma.to_f64().unwrap_or(f64::NAN)))
  }

  pub fn sigma(&self) -> T {
    self.density.sigma()
  }

  pub fn peak_density(&self) -> T {
    self.density.peak_density()
  }

  pub fn score_distance(&self, distance: T) -> T {
    self.density.eval(distance)
  }

  pub fn score(
    &self,
    pose: &Pose<T>,
    target: &impl TargetBounding<T>,
    reference: ReferenceDirection<T>,
  ) -> TargetScore<T> {
    self.score_with_inspector(pose, target, reference, &mut ())
  }

  pub fn score_with_inspector(
    &self,
    pose: &Pose<T>,
    target: &impl TargetBounding<T>,
    reference: ReferenceDirection<T>,
    inspector: &mut impl ScoringInspector<T>,
  ) -> TargetScore<T> {
    let center = target.center();
    let Some(point) = reference
      .ray(pose)
      .and_then(|ray| ray.intersect_horizontal_plane(center))
    else {
      log::debug!("gaussian reference ray {reference:?} never crosses the target plane");
      return TargetScore::miss(pose.position);
    };
    inspector.on_projected_point(point);

    TargetScore::from_score(self.score_distance(point.distance_to(center)), point)
  }
}

impl<T: Scalar> ConicalFrustum<T> {
  /// Gaussian intent score of `target` from this frustum's anchor. Only the pose is used, the
  /// frustum shape does not gate the result.
  pub fn gaussian_hit(
    &self,
    target: &impl TargetBounding<T>,
    reference: ReferenceDirection<T>,
    scoring: &GaussianScoring<T>,
  ) -> TargetScore<T> {
    scoring.score(self.pose(), target, reference)
  }

  pub fn gaussian_hit_with_inspector(
    &self,
    target: &impl TargetBounding<T>,
    reference: ReferenceDirection<T>,
    scoring: &GaussianScoring<T>,
    inspector: &mut impl ScoringInspector<T>,
  ) -> TargetScore<T> {
    scoring.score_with_inspector(self.pose(), target, reference, inspector)
  }
}

/// Evenly spaced points on the horizontal circle of radius `sigma` around `center`, the ring
/// where the score has dropped to `exp(-0.5)` of its peak.
pub fn gaussian_ring_points<T: Scalar>(
  center: Vec3<T>,
  sigma: T,
  resolution: usize,
) -> impl Iterator<Item = Vec3<T>> {
  let step = T::two() * T::PI() / T::by_f64(resolution.max(1) as f64);
  (0..resolution).map(move |i| {
    let (s, c) = (step * T::by_f64(i as f64)).sin_cos();
    center + Vec3::new(c, T::zero(), s) * sigma
  })
}

#[cfg(test)]
mod test {
  use crate::*;

  fn tilted_pose() -> Pose<f64> {
    Pose::looking_towards(Vec3::new(0., 1., 0.), Vec3::new(0., -1., 1.)).unwrap()
  }

  #[test]
  fn horizontal_forward_never_reaches_the_plane() {
    let pose = Pose::looking_towards(Vec3::new(0., 1., 0.), Vec3::new(0., 0., 1.)).unwrap();
    let target = Sphere::new(Vec3::new(0., 0., 5.), 0.5);
    let result = GaussianScoring::default().score(&pose, &target, ReferenceDirection::FromForward);
    assert!(!result.hit);
    assert_eq!(result.score, 0.);
    assert_eq!(result.point, pose.position);
  }

  #[test]
  fn forward_ray_projection() {
    let pose = tilted_pose();
    let target = Sphere::new(Vec3::new(0., 0., 5.), 0.5);
    let scoring = GaussianScoring::default();
    let mut recorded = RecordedPoints::default();
    let result =
      scoring.score_with_inspector(&pose, &target, ReferenceDirection::FromForward, &mut recorded);

    // t = (0 - 1) / (-1 / sqrt 2) = sqrt 2, so the crossing is one unit ahead on z
    assert!(result.point.distance_to(Vec3::new(0., 0., 1.)) < 1e-9);
    assert_eq!(recorded.projected, vec![result.point]);

    let sigma = 0.4_f64;
    let expect =
      1. / (sigma * (2. * std::f64::consts::PI).sqrt()) * (-0.5 * (4.0_f64 / sigma).powi(2)).exp();
    assert!(result.hit);
    assert!((result.score - expect).abs() <= expect * 1e-6);
  }

  #[test]
  fn aimed_ray_scores_peak() {
    // forward from (0, 1, 0) down to the target center on y = 0
    let pose = Pose::looking_towards(Vec3::new(0., 1., 0.), Vec3::new(0., -1., 5.)).unwrap();
    let target = Box3::from_center_half_extent(Vec3::new(0., 0., 5.), Vec3::splat(0.2));
    let scoring = GaussianScoring::default();
    let result = scoring.score(&pose, &target, ReferenceDirection::FromForward);
    assert!(result.hit);
    assert!((result.score - scoring.peak_density()).abs() < 1e-6);
    assert!((result.normalized_by(scoring.peak_density()).score - 1.).abs() < 1e-6);
  }

  #[test]
  fn head_and_body_rays() {
    // the anchor orientation is irrelevant for these two strategies
    let pose = Pose::new(Vec3::new(0., 1., 1.), Quat::identity());
    let target = Sphere::new(Vec3::new(0., 0., 3.), 0.3);
    let scoring = GaussianScoring::default();

    // head above and behind: the ray continues down to z = 3 on y = 0
    let head = ReferenceDirection::FromHeadToAnchor(Vec3::new(0., 2., -1.));
    let result = scoring.score(&pose, &target, head);
    assert!(result.point.distance_to(Vec3::new(0., 0., 3.)) < 1e-9);
    assert!((result.score - scoring.peak_density()).abs() < 1e-9);

    // body lower than the anchor: the ray climbs, the plane is met behind the anchor
    let body = ReferenceDirection::FromBodyToAnchor(Vec3::new(0., 0.5, 0.));
    let result = scoring.score(&pose, &target, body);
    assert!(result.point.distance_to(Vec3::new(0., 0., -1.)) < 1e-9);
    assert!(result.score < scoring.peak_density());

    // body at the anchor: no direction
    let degenerate = ReferenceDirection::FromBodyToAnchor(pose.position);
    assert!(!scoring.score(&pose, &target, degenerate).hit);
  }

  #[test]
  fn frustum_delegates_to_its_pose() {
    let frustum = ConicalFrustum::new(ConicalFrustumConfig::default(), tilted_pose());
    let target = Sphere::new(Vec3::new(0., 0., 1.2), 0.1);
    let scoring = GaussianScoring::default();
    let direct = scoring.score(frustum.pose(), &target, ReferenceDirection::FromForward);
    let through = frustum.gaussian_hit(&target, ReferenceDirection::FromForward, &scoring);
    assert_eq!(direct, through);
    assert!(through.hit);
  }

  #[test]
  fn density_falls_off_symmetrically() {
    let scoring = GaussianScoring::<f64>::default();
    assert_eq!(scoring.sigma(), 0.4);
    assert_eq!(scoring.score_distance(0.), scoring.peak_density());
    let mut last = scoring.peak_density();
    for i in 1..50 {
      let d = i as f64 * 0.1;
      assert!(scoring.score_distance(d) < last);
      assert_eq!(scoring.score_distance(d), scoring.score_distance(-d));
      last = scoring.score_distance(d);
    }
  }

  #[test]
  fn sigma_validation() {
    assert_eq!(
      GaussianScoring::new(0.0_f32),
      Err(GaussianScoringError::InvalidSigma(0.))
    );
    assert!(GaussianScoring::new(-0.4_f32).is_err());
    assert!(GaussianScoring::new(0.1_f32).is_ok());

    // the default never falls back to the standard normal
    assert_eq!(GaussianScoring::<f32>::default().sigma(), 0.4);
    assert_eq!(
      GaussianScoring::<f32>::default(),
      GaussianScoring::new(0.4).unwrap()
    );
  }

  #[test]
  fn ring_points_lie_on_sigma_circle() {
    let center = Vec3::new(1., 2., 3.);
    let points: Vec<_> = gaussian_ring_points(center, 0.4, 8).collect();
    assert_eq!(points.len(), 8);
    for p in &points {
      assert_eq!(p.y, 2.);
      assert!((p.distance_to(center) - 0.4).abs() < 1e-12);
    }
    assert!(points[0].distance_to(Vec3::new(1.4, 2., 3.)) < 1e-12);
    assert!(points[2].distance_to(Vec3::new(1., 2., 3.4)) < 1e-12);
    assert_eq!(gaussian_ring_points(center, 0.4, 0).count(), 0);
  }
}
