//! Domain layer with the demo's panels, static content and state transitions.

/// Static copy and panel content.
pub mod content;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Panel identities.
pub mod panel;
/// Demo state and reducer.
pub mod state;

pub use errors::KeyParseError;
pub use panel::PanelId;
pub use state::{DemoAction, DemoState, Effect, PanelState, PanelStatus, RevealTicket, Update, reduce};
