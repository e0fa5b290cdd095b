pub mod constants;
pub mod effects;
pub mod geometry;
pub mod scene;

pub use constants::*;
pub use geometry::*;
pub use scene::*;
