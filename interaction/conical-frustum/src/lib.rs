//! Pointing target selection for tracked anchors (hands, controllers).
//!
//! A [`ConicalFrustum`] is attached to an anchor [`Pose`] and answers which targets the user is
//! pointing at. Two scoring families are provided:
//!
//! - directional: the target's closest bounds point must sit inside the frustum, the score
//!   falls off linearly with the angle to the axis, see [`ConicalFrustum::hits_target`].
//! - gaussian: a reference ray is intersected with the target's horizontal plane and the miss
//!   distance is scored by a normal density, see [`ConicalFrustum::gaussian_hit`].
//!
//! [`ConicalFrustum::rank_targets`] applies either model to a set of candidates.

mod config;
mod directional;
mod frustum;
mod gaussian;
mod inspector;
mod pose;
mod ranking;
mod score;

pub use config::*;
pub use frustum::*;
pub use gaussian::*;
pub use inspector::*;
pub use pointing_geometry::*;
pub use pointing_statistics::*;
pub use pose::*;
pub use ranking::*;
pub use score::*;
