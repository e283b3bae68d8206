//! Core services and infrastructure

pub mod logging;
pub mod time;
pub mod version;
