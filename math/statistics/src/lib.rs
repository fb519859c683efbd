//! Probability densities used to turn geometric error into intent scores.

mod normal;

pub use normal::*;

/// not required to be normalized
pub trait Distribution<T> {
  type Sample;
  fn eval(&self, at: Self::Sample) -> T;
}
