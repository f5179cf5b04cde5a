//! Core domain models and logic shared by the server and the browser bundle

#[cfg(feature = "ssr")]
pub mod ai_api;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod menu;
pub mod motion;
pub mod workflow;
