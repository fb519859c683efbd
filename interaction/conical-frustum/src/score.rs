use crate::*;

/// Outcome of scoring one target.
///
/// `point` is always filled for visualization, even on a miss.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TargetScore<T = f32> {
  pub hit: bool,
  pub score: T,
  pub point: Vec3<T>,
}

impl<T: Scalar> TargetScore<T> {
  /// A hit needs a finite positive score, anything else is reported as a miss.
  pub fn from_score(score: T, point: Vec3<T>) -> Self {
    if score.is_finite() && score > T::zero() {
      Self {
        hit: true,
        score,
        point,
      }
    } else {
      Self::miss(point)
    }
  }

  pub fn miss(point: Vec3<T>) -> Self {
    Self {
      hit: false,
      score: T::zero(),
      point,
    }
  }

  /// Rescale the score by the best score the model can produce, for example
  /// [`GaussianScoring::peak_density`], so models can be compared in [0, 1].
  #[must_use]
  pub fn normalized_by(self, peak: T) -> Self {
    if peak <= T::zero() || !peak.is_finite() {
      return Self::miss(self.point);
    }
    Self {
      score: (self.score / peak).saturate(),
      ..self
    }
  }
}

#[test]
fn degenerate_scores_are_misses() {
  let p = Vec3::new(1., 2., 3.);
  assert!(!TargetScore::from_score(f32::NAN, p).hit);
  assert!(!TargetScore::from_score(0., p).hit);
  assert!(!TargetScore::from_score(f32::INFINITY, p).hit);
  assert_eq!(TargetScore::from_score(f32::NAN, p).score, 0.);

  let s = TargetScore::from_score(0.5_f32, p);
  assert!(s.hit);
  assert_eq!(s.normalized_by(2.).score, 0.25);
  assert!(!s.normalized_by(0.).hit);
}
