//! Strata engine crate.
//!
//! This crate owns the compositor's vertex stage: window and order lists, the
//! bulk and single-window quad transforms, and depth ordering across draws.
//! Device setup and presentation stay with the caller.

pub mod config;
pub mod coords;
pub mod error;
pub mod logging;
pub mod render;
pub mod scene;

pub use config::CompositorConfig;
pub use error::{CompositeError, Result};
