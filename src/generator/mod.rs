//! Version Generator Component
//!
//! Resolves a (major, minor) version pair from caller input, derives a
//! (build, revision) pair from the current time, renders a C#
//! AssemblyInfo-style source document, and writes it to a destination path.
//!
//! - **Build number**: whole days since 2000-01-01 (UTC), plus one
//! - **Revision number**: 2-second intervals since local midnight
//!
//! The two components deliberately use different time bases (UTC day count,
//! local seconds); downstream consumers depend on the values staying exactly
//! like this.

pub mod error;
pub mod task;
pub mod types;

pub use error::{GenResult, VersionGenError};
pub use task::{GenerateVersionTask, LogSink, ReportSink};
pub use types::{GeneratedDocument, ResolvedVersion, VersionRequest};

#[cfg(test)]
mod tests;
