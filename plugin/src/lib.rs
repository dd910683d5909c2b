//! Drone Firebase Plugin Library
//!
//! Parses the pipeline payload, builds the `firebase use` and
//! `firebase deploy` invocations and runs them.

pub mod app;
pub mod deploy;
pub mod errors;
pub mod input;
pub mod logs;
pub mod models;
pub mod utils;
