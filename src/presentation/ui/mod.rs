//! UI screens.

mod app;
mod demo_screen;
mod splash_screen;
pub mod utils;

pub use app::App;
pub use demo_screen::{DemoScreen, DemoScreenState};
pub use splash_screen::{LoadingState, SplashScreen};
