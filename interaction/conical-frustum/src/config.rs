use crate::*;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum FrustumConfigError {
  #[error("frustum parameter `{0}` is not a finite number")]
  NotFinite(&'static str),
  #[error("min length must not be negative, got {0}")]
  NegativeMinLength(f64),
  #[error("max length must not be negative, got {0}")]
  NegativeMaxLength(f64),
  #[error("start radius must not be negative, got {0}")]
  NegativeRadiusStart(f64),
  #[error("aperture must be within [0, 90] degrees, got {0}")]
  ApertureOutOfRange(f64),
  #[error("max length {max} is smaller than min length {min}")]
  MaxLengthBelowMinLength { min: f64, max: f64 },
}

/// Shape of the conical frustum, independent of where it is anchored.
///
/// Every constructor and setter validates, so a value of this type always satisfies
/// `0 <= min_length <= max_length`, `radius_start >= 0` and `aperture` in [0, 90] degrees.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Facet)]
#[serde(
  into = "ConicalFrustumShape<T>",
  try_from = "ConicalFrustumShape<T>",
  bound(
    serialize = "T: Scalar + Serialize",
    deserialize = "T: Scalar + Deserialize<'de>"
  )
)]
pub struct ConicalFrustumConfig<T = f32> {
  min_length: T,
  max_length: T,
  radius_start: T,
  aperture: Deg<T>,
}

/// The serialized form of [`ConicalFrustumConfig`], not validated.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConicalFrustumShape<T> {
  pub min_length: T,
  pub max_length: T,
  pub radius_start: T,
  pub aperture_degrees: T,
}

impl<T: Scalar> Default for ConicalFrustumConfig<T> {
  fn default() -> Self {
    Self {
      min_length: T::zero(),
      max_length: T::by_f64(10.),
      radius_start: T::by_f64(0.03),
      aperture: Deg::by(T::by_f64(20.)),
    }
  }
}

fn report<T: Scalar>(value: T) -> f64 {
  value.to_f64().unwrap_or(f64::NAN)
}

impl<T: Scalar> ConicalFrustumConfig<T> {
  pub fn new(
    min_length: T,
    max_length: T,
    radius_start: T,
    aperture: Deg<T>,
  ) -> Result<Self, FrustumConfigError> {
    let config = Self {
      min_length,
      max_length,
      radius_start,
      aperture,
    };
    config.validate()?;
    config.warn_if_empty();
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), FrustumConfigError> {
    use FrustumConfigError::*;
    let checks = [
      (self.min_length, "min_length"),
      (self.max_length, "max_length"),
      (self.radius_start, "radius_start"),
      (self.aperture.value, "aperture"),
    ];
    if let Some((_, name)) = checks.iter().find(|(v, _)| !v.is_finite()) {
      return Err(NotFinite(*name));
    }

    if self.min_length < T::zero() {
      return Err(NegativeMinLength(report(self.min_length)));
    }
    if self.max_length < T::zero() {
      return Err(NegativeMaxLength(report(self.max_length)));
    }
    if self.radius_start < T::zero() {
      return Err(NegativeRadiusStart(report(self.radius_start)));
    }
    if self.aperture.value < T::zero() || self.aperture.value > T::by_f64(90.) {
      return Err(ApertureOutOfRange(report(self.aperture.value)));
    }
    if self.max_length < self.min_length {
      return Err(MaxLengthBelowMinLength {
        min: report(self.min_length),
        max: report(self.max_length),
      });
    }
    Ok(())
  }

  pub fn min_length(&self) -> T {
    self.min_length
  }

  pub fn max_length(&self) -> T {
    self.max_length
  }

  pub fn radius_start(&self) -> T {
    self.radius_start
  }

  pub fn aperture(&self) -> Deg<T> {
    self.aperture
  }

  /// Apply a change only if the result is still valid, otherwise self is untouched.
  fn update(&mut self, f: impl FnOnce(&mut Self)) -> Result<&mut Self, FrustumConfigError> {
    let mut next = *self;
    f(&mut next);
    if let Err(err) = next.validate() {
      log::debug!("rejected frustum config change: {err}");
      return Err(err);
    }
    next.warn_if_empty();
    *self = next;
    Ok(self)
  }

  /// A zero `max_length` is accepted but the cone then contains nothing. Reported here once
  /// per change rather than on every query.
  fn warn_if_empty(&self) {
    if self.is_empty() {
      log::warn!("conical frustum with zero max length will not contain any target");
    }
  }

  pub fn is_empty(&self) -> bool {
    self.max_length <= T::zero()
  }

  pub fn set_min_length(&mut self, min_length: T) -> Result<&mut Self, FrustumConfigError> {
    self.update(|c| c.min_length = min_length)
  }

  pub fn set_max_length(&mut self, max_length: T) -> Result<&mut Self, FrustumConfigError> {
    self.update(|c| c.max_length = max_length)
  }

  pub fn set_radius_start(&mut self, radius_start: T) -> Result<&mut Self, FrustumConfigError> {
    self.update(|c| c.radius_start = radius_start)
  }

  pub fn set_aperture(&mut self, aperture: Deg<T>) -> Result<&mut Self, FrustumConfigError> {
    self.update(|c| c.aperture = aperture)
  }

  /// Radius of the cone's far end, `max_length * tan(aperture)`.
  pub fn radius_end(&self) -> T {
    self.max_length * self.aperture.to_rad().tan()
  }
}

impl<T: Scalar> TryFrom<ConicalFrustumShape<T>> for ConicalFrustumConfig<T> {
  type Error = FrustumConfigError;

  fn try_from(shape: ConicalFrustumShape<T>) -> Result<Self, Self::Error> {
    Self::new(
      shape.min_length,
      shape.max_length,
      shape.radius_start,
      Deg::by(shape.aperture_degrees),
    )
  }
}

impl<T: Scalar> From<ConicalFrustumConfig<T>> for ConicalFrustumShape<T> {
  fn from(config: ConicalFrustumConfig<T>) -> Self {
    Self {
      min_length: config.min_length,
      max_length: config.max_length,
      radius_start: config.radius_start,
      aperture_degrees: config.aperture.value,
    }
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn default_matches_reference_shape() {
    let config = ConicalFrustumConfig::<f32>::default();
    assert_eq!(config.min_length(), 0.);
    assert_eq!(config.max_length(), 10.);
    assert_eq!(config.radius_start(), 0.03);
    assert_eq!(config.aperture(), Deg::by(20.));
    assert!(config.validate().is_ok());
    assert!((config.radius_end() - 3.6397).abs() < 1e-3);
  }

  #[test]
  fn construction_rejects_out_of_range() {
    use FrustumConfigError::*;
    let new =
      |min: f32, max: f32, r: f32, a: f32| ConicalFrustumConfig::new(min, max, r, Deg::by(a));

    assert_eq!(new(-1., 10., 0., 20.), Err(NegativeMinLength(-1.)));
    assert_eq!(new(0., -1., 0., 20.), Err(NegativeMaxLength(-1.)));
    assert_eq!(new(0., 10., -0.5, 20.), Err(NegativeRadiusStart(-0.5)));
    assert_eq!(new(0., 10., 0., 91.), Err(ApertureOutOfRange(91.)));
    assert_eq!(new(0., 10., 0., -1.), Err(ApertureOutOfRange(-1.)));
    assert_eq!(
      new(5., 2., 0., 20.),
      Err(MaxLengthBelowMinLength { min: 5., max: 2. })
    );
    assert_eq!(new(f32::NAN, 2., 0., 20.), Err(NotFinite("min_length")));
    assert_eq!(new(0., f32::INFINITY, 0., 20.), Err(NotFinite("max_length")));

    assert!(new(0., 0., 0., 0.).is_ok());
    assert!(new(2., 2., 1., 90.).is_ok());
  }

  #[test]
  fn setters_keep_config_valid() {
    let mut config = ConicalFrustumConfig::<f64>::default();
    config.set_min_length(2.).unwrap().set_radius_start(0.1).unwrap();
    assert_eq!(config.min_length(), 2.);
    assert_eq!(config.radius_start(), 0.1);

    assert!(config.set_max_length(1.).is_err());
    assert_eq!(config.max_length(), 10.);

    assert!(config.set_aperture(Deg::by(120.)).is_err());
    assert_eq!(config.aperture(), Deg::by(20.));

    config.set_aperture(Deg::by(45.)).unwrap();
    assert!((config.radius_end() - 10.).abs() < 1e-9);
  }

  #[test]
  fn serde_validates_on_load() {
    let config: ConicalFrustumConfig = serde_json::from_str(
      r#"{ "min_length": 0.5, "max_length": 4.0, "radius_start": 0.1, "aperture_degrees": 30.0 }"#,
    )
    .unwrap();
    assert_eq!(config.max_length(), 4.);
    assert_eq!(config.aperture(), Deg::by(30.));

    let back = serde_json::to_value(config).unwrap();
    assert_eq!(back["aperture_degrees"], 30.0);
    assert_eq!(back["min_length"], 0.5);

    let bad = serde_json::from_str::<ConicalFrustumConfig>(
      r#"{ "min_length": 5.0, "max_length": 4.0, "radius_start": 0.1, "aperture_degrees": 30.0 }"#,
    );
    let message = bad.unwrap_err().to_string();
    assert!(message.contains("smaller than min length"), "{message}");
  }
}
