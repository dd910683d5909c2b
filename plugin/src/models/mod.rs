//! Data models

pub mod params;
pub mod workspace;
