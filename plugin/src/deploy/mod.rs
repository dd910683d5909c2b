//! Deployment module

pub mod command;
pub mod env;
pub mod executor;
