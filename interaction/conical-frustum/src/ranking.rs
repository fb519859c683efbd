use std::cmp::Ordering;

use crate::*;

/// How a frustum turns a target into a [`TargetScore`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScoringModel<T = f32> {
  /// [`ConicalFrustum::hits_target`]
  Directional,
  /// [`ConicalFrustum::nearest_target_hit`]
  NearestDirectional,
  /// [`ConicalFrustum::gaussian_hit`]
  Gaussian {
    reference: ReferenceDirection<T>,
    scoring: GaussianScoring<T>,
  },
}

impl<T: Scalar> Default for ScoringModel<T> {
  fn default() -> Self {
    Self::Directional
  }
}

impl<T: Scalar> ScoringModel<T> {
  pub fn gaussian_from_forward(scoring: GaussianScoring<T>) -> Self {
    Self::Gaussian {
      reference: ReferenceDirection::FromForward,
      scoring,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedTarget<K, T = f32> {
  pub key: K,
  pub result: TargetScore<T>,
}

impl<T: Scalar> ConicalFrustum<T> {
  pub fn score_target(
    &self,
    target: &impl TargetBounding<T>,
    model: &ScoringModel<T>,
    inspector: &mut impl ScoringInspector<T>,
  ) -> TargetScore<T> {
    match model {
      ScoringModel::Directional => self.hits_target_with_inspector(target, inspector),
      ScoringModel::NearestDirectional => self.nearest_target_hit_with_inspector(target, inspector),
      ScoringModel::Gaussian { reference, scoring } => {
        self.gaussian_hit_with_inspector(target, *reference, scoring, inspector)
      }
    }
  }

  /// Score every target and return the hits, best first. Equal scores keep their input order.
  pub fn rank_targets<K, B: TargetBounding<T>>(
    &self,
    targets: impl IntoIterator<Item = (K, B)>,
    model: &ScoringModel<T>,
  ) -> Vec<RankedTarget<K, T>> {
    let mut ranked: Vec<_> = targets
      .into_iter()
      .map(|(key, target)| RankedTarget {
        key,
        result: self.score_target(&target, model, &mut ()),
      })
      .filter(|r| r.result.hit && !r.result.score.is_nan())
      .collect();

    ranked.sort_by(|a, b| {
      b.result
        .score
        .partial_cmp(&a.result.score)
        .unwrap_or(Ordering::Equal)
    });

    log::trace!("ranked {} hit targets", ranked.len());
    ranked
  }

  pub fn best_target<K, B: TargetBounding<T>>(
    &self,
    targets: impl IntoIterator<Item = (K, B)>,
    model: &ScoringModel<T>,
  ) -> Option<RankedTarget<K, T>> {
    self.rank_targets(targets, model).into_iter().next()
  }
}
