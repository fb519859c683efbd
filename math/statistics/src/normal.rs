use pointing_algebra::*;

use crate::Distribution;

/// One dimensional normal distribution N(mean, sigma^2).
///
/// https://en.wikipedia.org/wiki/Normal_distribution
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NormalDistribution<T> {
  mean: T,
  sigma: T,
}

/// The standard normal N(0, 1).
impl<T: Scalar> Default for NormalDistribution<T> {
  fn default() -> Self {
    Self {
      mean: T::zero(),
      sigma: T::one(),
    }
  }
}

impl<T: Scalar> NormalDistribution<T> {
  /// sigma must be finite and positive
  pub fn new(mean: T, sigma: T) -> Option<Self> {
    (sigma.is_finite() && sigma > T::zero() && mean.is_finite()).then_some(Self { mean, sigma })
  }

  /// Zero mean, used when the sample is already a distance.
  pub fn centered(sigma: T) -> Option<Self> {
    Self::new(T::zero(), sigma)
  }

  pub fn sigma(&self) -> T {
    self.sigma
  }

  /// Density at the mean, 1 / (sigma * sqrt(2 PI)).
  pub fn peak_density(&self) -> T {
    T::one() / (self.sigma * (T::two() * T::PI()).sqrt())
  }
}

impl<T: Scalar> Distribution<T> for NormalDistribution<T> {
  type Sample = T;

  fn eval(&self, at: T) -> T {
    let z = (at - self.mean) / self.sigma;
    self.peak_density() * (-T::half() * z * z).exp()
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn density_shape() {
    let n = NormalDistribution::centered(0.4_f64).unwrap();
    let peak = 1. / (0.4 * (2. * std::f64::consts::PI).sqrt());
    assert!((n.eval(0.) - peak).abs() < 1e-12);
    assert_eq!(n.eval(0.), n.peak_density());

    // one sigma away the density drops by exp(-0.5)
    assert!((n.eval(0.4) / peak - (-0.5_f64).exp()).abs() < 1e-12);

    let mut last = n.eval(0.);
    for i in 1..100 {
      let d = i as f64 * 0.05;
      let v = n.eval(d);
      assert!(v < last);
      assert_eq!(v, n.eval(-d));
      last = v;
    }
  }

  #[test]
  fn integrates_to_one() {
    use rand::Rng;
    let n = NormalDistribution::new(1.5_f64, 0.4).unwrap();
    let mut rng = rand::thread_rng();
    let (lo, hi) = (1.5 - 4.0, 1.5 + 4.0);
    let count = 200_000;
    let sum: f64 = (0..count).map(|_| n.eval(rng.gen_range(lo..hi))).sum();
    let integral = sum / count as f64 * (hi - lo);
    assert!((integral - 1.).abs() < 0.02, "{integral}");
  }

  #[test]
  fn rejects_bad_sigma() {
    assert!(NormalDistribution::centered(0.0_f32).is_none());
    assert!(NormalDistribution::centered(-1.0_f32).is_none());
    assert!(NormalDistribution::centered(f32::NAN).is_none());
    assert!(NormalDistribution::new(f32::INFINITY, 1.).is_none());
  }

  #[test]
  fn default_is_standard_normal() {
    let n = NormalDistribution::<f64>::default();
    assert_eq!(n, NormalDistribution::centered(1.).unwrap());
    assert!((n.eval(0.) - 1. / (2. * std::f64::consts::PI).sqrt()).abs() < 1e-12);
  }
}
