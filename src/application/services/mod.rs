pub mod demo_session;
pub mod reveal_scheduler;

pub use demo_session::DemoSession;
pub use reveal_scheduler::RevealScheduler;
