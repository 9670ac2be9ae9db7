//! Application layer driving the demo state.

/// Session and reveal scheduling services.
pub mod services;

pub use services::{DemoSession, RevealScheduler};
