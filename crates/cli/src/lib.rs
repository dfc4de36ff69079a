//! Demo entry point: configuration and the fixed walkthrough sequence.

pub mod config;
pub mod demo;

pub use config::DemoConfig;
pub use demo::run_demo;
