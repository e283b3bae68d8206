//! Version generation task: input resolution, derived numbers, file write

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use log::{error, info};
use std::fs;

use super::error::{GenResult, VersionGenError};
use super::types::{GeneratedDocument, ResolvedVersion, VersionRequest};
use crate::core::time::Clock;

/// Sink for human-readable progress and failure messages.
///
/// Models a build host's logger without tying the generator to one; errors
/// never propagate past [`GenerateVersionTask::execute`].
pub trait ReportSink {
    /// Informational progress message
    fn message(&self, text: &str);

    /// Failure message
    fn error(&self, text: &str);
}

/// Production sink routing through the `log` facade
#[derive(Default, Clone)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn message(&self, text: &str) {
        info!("{}", text);
    }

    fn error(&self, text: &str) {
        error!("{}", text);
    }
}

/// Single-shot version generation task
pub struct GenerateVersionTask {
    request: VersionRequest,
}

impl GenerateVersionTask {
    pub fn new(request: VersionRequest) -> Self {
        Self { request }
    }

    /// Resolve the (major, minor) pair from the request.
    ///
    /// The combined form wins when present; it must split into exactly two
    /// dot-separated parts. Otherwise both separate components must be
    /// supplied.
    pub fn resolve_version(&self) -> GenResult<ResolvedVersion> {
        if let Some(combined) = self.request.combined() {
            let parts: Vec<&str> = combined.split('.').collect();
            if parts.len() != 2 {
                return Err(VersionGenError::MalformedVersion {
                    input: combined.to_string(),
                });
            }
            return Ok(ResolvedVersion {
                major: parts[0].to_string(),
                minor: parts[1].to_string(),
            });
        }

        match (self.request.major(), self.request.minor()) {
            (Some(major), Some(minor)) => Ok(ResolvedVersion {
                major: major.to_string(),
                minor: minor.to_string(),
            }),
            _ => Err(VersionGenError::MissingVersion),
        }
    }

    /// Resolve inputs and derive numbers without touching the file system
    pub fn prepare(&self, clock: &dyn Clock) -> GenResult<GeneratedDocument> {
        let resolved = self.resolve_version()?;

        Ok(GeneratedDocument {
            major: resolved.major,
            minor: resolved.minor,
            build: build_number(clock),
            revision: revision_number(clock),
            product: self.request.product().map(sanitize_product),
        })
    }

    /// Generate the document and write it to the requested output path,
    /// replacing any existing content in one whole-document write.
    pub fn run(&self, clock: &dyn Clock) -> GenResult<GeneratedDocument> {
        let document = self.prepare(clock)?;

        fs::write(&self.request.output_path, document.render()).map_err(|source| {
            VersionGenError::Write {
                path: self.request.output_path.clone(),
                source,
            }
        })?;

        Ok(document)
    }

    /// Host-facing entry point: report through the sink, never propagate.
    ///
    /// Returns `true` on success, `false` after reporting a failure.
    pub fn execute(&self, clock: &dyn Clock, sink: &dyn ReportSink) -> bool {
        match self.run(clock) {
            Ok(document) => {
                sink.message(&format!(
                    "buildNumber: {}, revisionNumber: {}",
                    document.build, document.revision
                ));
                true
            }
            Err(e) => {
                sink.error(&e.to_string());
                false
            }
        }
    }
}

fn build_epoch() -> NaiveDateTime {
    // 2000-01-01T00:00:00 is always representable
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("build epoch is a valid date")
}

/// Whole days since 2000-01-01 (UTC), plus one.
/// Constant within a UTC calendar day, increments by one per day.
fn build_number(clock: &dyn Clock) -> i64 {
    let elapsed = clock.now_utc().naive_utc() - build_epoch();
    elapsed.num_days() + 1
}

/// 2-second intervals since local midnight, in [0, 43199].
/// Resets at local midnight; the local base is intentional even though the
/// build number counts UTC days.
fn revision_number(clock: &dyn Clock) -> u32 {
    clock.now_local().time().num_seconds_from_midnight() / 2
}

/// Delete embedded quote characters so the value cannot escape its attribute
/// string in the generated source.
fn sanitize_product(raw: &str) -> String {
    raw.replace('"', "")
}
