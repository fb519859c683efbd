use crate::*;

/// A simple value wrapper that indicate the inner value type is in degree unit.
/// Avoid possible miss conversion between degree and rad.
///
/// Trigonometric functions are only meaningful for rad unit, so call [`Deg::to_rad`] first.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, PartialOrd, Facet)]
pub struct Deg<T> {
  pub value: T,
}

impl<T: Scalar> Deg<T> {
  pub fn by(value: T) -> Self {
    Deg { value }
  }
  pub fn to_rad(&self) -> T {
    self.value * T::pi_by_c180()
  }
  pub fn from_rad(rad: T) -> Self {
    Self::by(rad * T::c180_by_pi())
  }
}

#[test]
fn deg_rad_conversion() {
  let right = Deg::by(90.0_f64);
  assert!((right.to_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
  assert!((Deg::from_rad(std::f64::consts::PI).value - 180.).abs() < 1e-12);
}
