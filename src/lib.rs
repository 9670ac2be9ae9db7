//! mfe-demo - A terminal demo of micro-frontends loading at runtime.
//!
//! Three independently owned panels (catalog, cart and profile) are revealed
//! on demand after a simulated fetch delay, the way a host shell composes
//! remote modules.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer driving the demo state.
pub mod application;
/// Domain layer containing panel state, content and key bindings.
pub mod domain;
/// Infrastructure layer with configuration loading.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "mfe-demo";
