//! Scene management: the globe camera and the controller that orbits it

mod camera;
mod orbit;
mod render_mode;
mod shared;

pub use camera::*;
pub use orbit::*;
pub use render_mode::*;
pub use shared::*;
