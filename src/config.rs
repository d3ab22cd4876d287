//! Calculator configuration
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the standard report layout.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QuoteResult;
use crate::premium::DOB_FORMAT;

/// Default report document title
pub const DEFAULT_REPORT_TITLE: &str = "Insurance Calculation Report";

/// Default file name offered for the exported document
pub const DEFAULT_DOCUMENT_FILE_NAME: &str = "insurance-report.pdf";

/// Shown in place of a premium that cannot be computed
pub const DEFAULT_UNAVAILABLE_PLACEHOLDER: &str = "N/A";

fn default_report_title() -> String { DEFAULT_REPORT_TITLE.to_string() }
fn default_document_file_name() -> String { DEFAULT_DOCUMENT_FILE_NAME.to_string() }
fn default_unavailable_placeholder() -> String { DEFAULT_UNAVAILABLE_PLACEHOLDER.to_string() }
fn default_date_format() -> String { DOB_FORMAT.to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Heading of the rendered report
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// File name suggested for the downloadable document
    #[serde(default = "default_document_file_name")]
    pub document_file_name: String,

    /// Text displayed for a premium that is not computable
    #[serde(default = "default_unavailable_placeholder")]
    pub unavailable_placeholder: String,

    /// chrono format string for the DOB field
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            report_title: default_report_title(),
            document_file_name: default_document_file_name(),
            unavailable_placeholder: default_unavailable_placeholder(),
            date_format: default_date_format(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> QuoteResult<Self> {
        let file = File::open(path.as_ref())?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> QuoteResult<Self> {
        match path {
            Some(path) => {
                log::info!("loading calculator config from {}", path.display());
                Self::from_json_path(path)
            }
            None => Ok(Self::default()),
        }
    }
}
