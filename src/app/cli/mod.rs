//! Command-line interface for the version generator

pub mod args;
