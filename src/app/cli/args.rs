//! Core CLI arguments structure
//!
//! Maps the command line onto a `VersionRequest` for the generator. The
//! built-in clap version flag is disabled so `--version` can carry the
//! combined version input.

use clap::Parser;
use std::path::PathBuf;

use crate::generator::VersionRequest;

#[derive(Parser, Debug, Clone)]
#[command(name = "genversion")]
#[command(about = "Generate a C# AssemblyInfo-style version source file")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Destination path for the generated source file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Combined version as 'Major.Minor' (takes precedence over --major/--minor)
    #[arg(short = 'v', long = "version", value_name = "MAJOR.MINOR")]
    pub version: Option<String>,

    /// Major version component
    #[arg(long = "major", value_name = "NUM")]
    pub major_version: Option<String>,

    /// Minor version component
    #[arg(long = "minor", value_name = "NUM")]
    pub minor_version: Option<String>,

    /// Product version embedded as AssemblyInformationalVersion
    #[arg(short = 'p', long = "product-version", value_name = "TEXT")]
    pub product_version: Option<String>,

    /// Color output control:
    /// --color sets Some(true), --color=false disables, unspecified = None (auto/TTY)
    #[arg(short = 'g', long = "color", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub color: Option<bool>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'F', long = "log-format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub log_format: Option<String>,
}

impl Args {
    /// Convert the parsed arguments into a generator request
    pub fn to_request(&self) -> VersionRequest {
        VersionRequest {
            output_path: self.output.clone(),
            version: self.version.clone(),
            major_version: self.major_version.clone(),
            minor_version: self.minor_version.clone(),
            product_version: self.product_version.clone(),
        }
    }
}
