//! Version generator unit tests, organized by concern

mod resolution;

use super::types::VersionRequest;

/// Request with only version inputs set; output path is unused by pure paths
pub(crate) fn request(
    version: Option<&str>,
    major: Option<&str>,
    minor: Option<&str>,
) -> VersionRequest {
    VersionRequest {
        output_path: "unused".into(),
        version: version.map(String::from),
        major_version: major.map(String::from),
        minor_version: minor.map(String::from),
        product_version: None,
    }
}
