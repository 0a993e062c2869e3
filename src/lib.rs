pub mod error;
pub mod utils;

pub use error::*;
pub use utils::checker::{CheckReport, EntryReport, FailureMode, VersionChecker};
pub use utils::config::{CONFIG_FILE_NAME, OutputFormat, VersyncConfig};
pub use utils::diagnostic::{Diagnostic, DiagnosticKind};
pub use utils::extractor::{Extraction, find_version, scan_lines};
pub use utils::registry::{Registry, VersionSpec};
