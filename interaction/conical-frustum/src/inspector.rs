use crate::*;

/// Optional observer of intermediate points computed while scoring, e.g. to visualize them.
///
/// Scoring never depends on what the inspector does.
pub trait ScoringInspector<T: Scalar> {
  /// The bounds point chosen for the directional test.
  fn on_closest_point(&mut self, _point: Vec3<T>) {}
  /// Where the Gaussian reference ray met the target's horizontal plane.
  fn on_projected_point(&mut self, _point: Vec3<T>) {}
}

impl<T: Scalar> ScoringInspector<T> for () {}

/// Inspector that keeps every reported point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedPoints<T> {
  pub closest: Vec<Vec3<T>>,
  pub projected: Vec<Vec3<T>>,
}

impl<T: Scalar> ScoringInspector<T> for RecordedPoints<T> {
  fn on_closest_point(&mut self, point: Vec3<T>) {
    self.closest.push(point);
  }

  fn on_projected_point(&mut self, point: Vec3<T>) {
    self.projected.push(point);
  }
}
