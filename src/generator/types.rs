//! Version Generator Types

use std::path::PathBuf;

/// Caller-supplied inputs for one generation run.
///
/// Empty strings behave exactly like absent values; the accessors normalize
/// this in one place so the resolution order stays unambiguous.
#[derive(Debug, Clone, Default)]
pub struct VersionRequest {
    /// Destination file path
    pub output_path: PathBuf,
    /// Combined "Major.Minor" form; takes precedence over the separate pair
    pub version: Option<String>,
    /// Separate major component
    pub major_version: Option<String>,
    /// Separate minor component
    pub minor_version: Option<String>,
    /// Free text embedded as the informational version; quotes are stripped
    pub product_version: Option<String>,
}

impl VersionRequest {
    pub fn combined(&self) -> Option<&str> {
        non_empty(self.version.as_deref())
    }

    pub fn major(&self) -> Option<&str> {
        non_empty(self.major_version.as_deref())
    }

    pub fn minor(&self) -> Option<&str> {
        non_empty(self.minor_version.as_deref())
    }

    pub fn product(&self) -> Option<&str> {
        non_empty(self.product_version.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Major/minor pair resolved from a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub major: String,
    pub minor: String,
}

/// Rendered output, fully determined by its fields.
///
/// `product` holds the already-sanitized informational version, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub major: String,
    pub minor: String,
    pub build: i64,
    pub revision: u32,
    pub product: Option<String>,
}

impl GeneratedDocument {
    /// Four-part version string "major.minor.build.revision"
    pub fn version_string(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }

    /// Render the C# source document, trailing newline included.
    ///
    /// The informational-version line collapses to an empty line when no
    /// product version was supplied.
    pub fn render(&self) -> String {
        let version = self.version_string();
        let product_line = match &self.product {
            Some(product) => format!("[assembly: AssemblyInformationalVersion(\"{}\")]", product),
            None => String::new(),
        };

        format!(
            "using System.Reflection;\n\
             [assembly: AssemblyVersion(\"{version}\")]\n\
             [assembly: AssemblyFileVersion(\"{version}\")]\n\
             {product_line}\n"
        )
    }
}
