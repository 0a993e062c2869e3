use serde::{Deserialize, Serialize};
use std::fmt;

/// kind of finding produced while checking one registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// the file carries the expected version
    Confirmed,
    /// the file does not exist at its location
    MissingFile,
    /// the file exists but no line captured the expected version
    VersionMismatch,
    /// the file exists but could not be opened or read
    Unreadable,
}

impl DiagnosticKind {
    pub fn is_failure(&self) -> bool {
        !matches!(self, DiagnosticKind::Confirmed)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Confirmed => write!(f, "confirmed"),
            DiagnosticKind::MissingFile => write!(f, "missing_file"),
            DiagnosticKind::VersionMismatch => write!(f, "version_mismatch"),
            DiagnosticKind::Unreadable => write!(f, "unreadable"),
        }
    }
}

/// one line of checker output, tied to a registry location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// location as declared in the registry
    pub location: String,
    /// underlying error text for unreadable files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: impl Into<String>) -> Self {
        Self {
            kind,
            location: location.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.kind.is_failure()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Confirmed => write!(f, "{} ... ok", self.location),
            DiagnosticKind::MissingFile => write!(f, "Failed to find file:{}", self.location),
            DiagnosticKind::VersionMismatch => {
                write!(
                    f,
                    "Failed to find correct version number in:{}",
                    self.location
                )
            }
            DiagnosticKind::Unreadable => match &self.detail {
                Some(detail) => write!(f, "Failed to read file:{} ({})", self.location, detail),
                None => write!(f, "Failed to read file:{}", self.location),
            },
        }
    }
}
