pub mod icon;
pub mod motion;
pub mod pages;
pub mod sections;
pub mod theme;

pub use icon::{Icon, icons};
pub use theme::Theme;
