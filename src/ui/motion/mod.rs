//! Browser bindings of the motion engine in `core::motion`

pub mod cursor;
pub mod driver;
pub mod intro;
pub mod tilt;

pub use cursor::CustomCursor;
pub use driver::{FrameSubscription, init_motion, subscribe, wake};
#[cfg(not(feature = "ssr"))]
pub use intro::play_hero_intro;
pub use intro::{intro_style, pose_style};
pub use tilt::{LAYER_ATTR, TiltCard};
