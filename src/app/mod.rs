//! Application layer: CLI parsing and process startup

pub mod cli;
pub mod startup;
