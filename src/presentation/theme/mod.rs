pub mod adapter;
pub mod service;

pub use service::Theme;
