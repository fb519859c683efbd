//! Bounding volumes and the spatial queries the pointing crates run against them.

mod bounding;
mod box3;
mod oriented_box3;
mod ray3;
mod sphere;

pub use bounding::*;
pub use box3::*;
pub use oriented_box3::*;
pub use pointing_algebra::*;
pub use ray3::*;
pub use sphere::*;

pub trait ContainAble<T: Scalar, Target> {
  fn contains(&self, target: &Target) -> bool;
}
