// version extraction from release files

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// outcome of scanning one file for the expected version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Extraction {
    /// a line matched and captured the expected version
    Found { line_number: usize },
    /// end of input reached without a satisfying line
    NotFound {
        lines_scanned: usize,
        /// differing values captured along the way, in file order
        candidates: Vec<String>,
    },
}

impl Extraction {
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found { .. })
    }
}

/// scan lines until one matches `pattern` with a captured value equal to `expected`
///
/// lines where the pattern matches but captures a different value are skipped;
/// the scan stops at the first satisfying line
pub fn scan_lines<R: BufRead>(reader: R, pattern: &Regex, expected: &str) -> Result<Extraction> {
    let mut candidates = Vec::new();
    let mut lines_scanned = 0;

    for line in reader.lines() {
        let line = line?;
        lines_scanned += 1;

        let Some(captured) = pattern.captures(&line).and_then(|c| c.get(1)) else {
            continue;
        };

        if captured.as_str() == expected {
            return Ok(Extraction::Found {
                line_number: lines_scanned,
            });
        }

        debug!(
            line = lines_scanned,
            found = captured.as_str(),
            expected,
            "ignoring differing version"
        );
        candidates.push(captured.as_str().to_string());
    }

    Ok(Extraction::NotFound {
        lines_scanned,
        candidates,
    })
}

/// scan a file for the expected version
///
/// the file is held open only for the duration of the scan
pub fn find_version(path: &Path, pattern: &Regex, expected: &str) -> Result<Extraction> {
    let file = File::open(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    scan_lines(BufReader::new(file), pattern, expected).map_err(|e| match e {
        Error::IoError(source) => Error::FileReadError {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
