mod dimension;
mod normalized;
mod vec3;

pub use dimension::*;
pub use normalized::*;
pub use vec3::*;
