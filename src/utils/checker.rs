// release version checker

use super::diagnostic::{Diagnostic, DiagnosticKind};
use super::extractor::{Extraction, find_version};
use super::registry::{Registry, VersionSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// what the checker does after the first failing entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// stop at the first failure; later entries are never evaluated
    #[default]
    FailFast,
    /// evaluate every entry and report every failure
    KeepGoing,
}

/// per-entry result in a check report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryReport {
    pub diagnostic: Diagnostic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction: Option<Extraction>,
}

/// everything a single run produced, in registry order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub expected_version: String,
    pub mode: FailureMode,
    pub entries: Vec<EntryReport>,
    /// registry entries never evaluated because the run stopped early
    pub skipped: usize,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.skipped == 0 && self.entries.iter().all(|e| !e.diagnostic.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .map(|e| &e.diagnostic)
            .filter(|d| d.is_failure())
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().map(|e| &e.diagnostic)
    }
}

/// walks a registry and checks each location for the expected version
pub struct VersionChecker<'a> {
    registry: &'a Registry,
    root: PathBuf,
    mode: FailureMode,
}

impl<'a> VersionChecker<'a> {
    /// create a checker resolving registry locations against `root`
    pub fn new(registry: &'a Registry, root: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            root: root.into(),
            mode: FailureMode::default(),
        }
    }

    pub fn mode(mut self, mode: FailureMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// check every entry against `expected`
    ///
    /// `on_diagnostic` is called as soon as each entry is decided, before the
    /// next entry is looked at
    pub fn check<F>(&self, expected: &str, mut on_diagnostic: F) -> CheckReport
    where
        F: FnMut(&Diagnostic),
    {
        let mut entries = Vec::with_capacity(self.registry.len());

        for spec in self.registry {
            let entry = self.check_entry(spec, expected);
            on_diagnostic(&entry.diagnostic);

            let failed = entry.diagnostic.is_failure();
            entries.push(entry);

            if failed && self.mode == FailureMode::FailFast {
                break;
            }
        }

        let skipped = self.registry.len() - entries.len();
        if skipped > 0 {
            debug!(skipped, "stopped at first failure");
        }

        CheckReport {
            expected_version: expected.to_string(),
            mode: self.mode,
            entries,
            skipped,
        }
    }

    /// check one entry without touching any other
    pub fn check_entry(&self, spec: &VersionSpec, expected: &str) -> EntryReport {
        let path = spec.resolve(&self.root);
        debug!(location = spec.location(), path = %path.display(), "checking");

        if !path.is_file() {
            info!(location = spec.location(), "file not found");
            return EntryReport {
                diagnostic: Diagnostic::new(DiagnosticKind::MissingFile, spec.location()),
                extraction: None,
            };
        }

        let (kind, extraction, detail) = match find_version(&path, spec.pattern(), expected) {
            Ok(extraction @ Extraction::Found { .. }) => {
                (DiagnosticKind::Confirmed, Some(extraction), None)
            }
            Ok(extraction @ Extraction::NotFound { .. }) => {
                (DiagnosticKind::VersionMismatch, Some(extraction), None)
            }
            Err(e) => (DiagnosticKind::Unreadable, None, Some(read_error_detail(e))),
        };

        info!(location = spec.location(), result = %kind, "checked");

        let mut diagnostic = Diagnostic::new(kind, spec.location());
        if let Some(detail) = detail {
            diagnostic = diagnostic.with_detail(detail);
        }

        EntryReport {
            diagnostic,
            extraction,
        }
    }
}

fn read_error_detail(err: crate::error::Error) -> String {
    match err {
        crate::error::Error::FileReadError { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
