// version location registry

use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// built-in locations as (relative location, pattern body) pairs
///
/// locations are relative to the project's `scripts/` directory, which is
/// where the checker is expected to be run from
const BUILTIN_LOCATIONS: &[(&str, &str)] = &[
    // help line in main.rs: #[command(version="1.0.1")]
    ("../src/main.rs", r#"#\[command\(version="(\d+\.\d+\.\d+)"\)\]"#),
    // cargo manifest: version = "1.0.1"
    ("../Cargo.toml", r#"version\s?=\s?"(\d+\.\d+\.\d+)""#),
    // .deb control file: Version: 1.0.1
    ("./control", r"Version:\s?(\d+\.\d+\.\d+)"),
    // latest debian changelog entry: photodedupe (1.0.1)
    ("../docs/debian_specific/changelog", r"photodedupe \((\d+\.\d+\.\d+)"),
    // metadata header of the man page source
    (
        "../docs/man_page/man_page_source.md",
        r"% photodedupe\(1\) Version (\d+\.\d+\.\d+)",
    ),
    // title header of the rendered man page
    (
        "../docs/man_page/photodedupe.1",
        r#"\.TH "photodedupe" .*?Version (\d+\.\d+\.\d+)"#,
    ),
];

/// one place in the project where the version string must be present
#[derive(Debug, Clone)]
pub struct VersionSpec {
    location: String,
    pattern: Regex,
}

impl VersionSpec {
    /// create a spec from a relative location and a pattern body
    ///
    /// the pattern is anchored at the start of the line and must contain
    /// exactly one capturing group
    pub fn new(location: impl Into<String>, pattern: &str) -> Result<Self> {
        let location = location.into();

        let pattern = Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
            Error::InvalidPattern {
                location: location.clone(),
                reason: e.to_string(),
            }
        })?;

        // captures_len counts the implicit whole-match group
        let groups = pattern.captures_len() - 1;
        if groups != 1 {
            return Err(Error::InvalidPattern {
                location,
                reason: format!("expected exactly one capturing group, found {}", groups),
            });
        }

        Ok(Self { location, pattern })
    }

    /// location as declared, relative to the reference directory
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// resolve the location against a reference directory
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.location)
    }
}

/// ordered, immutable collection of version specs
///
/// order decides evaluation order and therefore which failure is reported first
#[derive(Debug, Clone)]
pub struct Registry {
    specs: Vec<VersionSpec>,
}

impl Registry {
    pub fn new(specs: Vec<VersionSpec>) -> Self {
        Self { specs }
    }

    /// the locations checked on every release
    pub fn builtin() -> Result<Self> {
        let specs = BUILTIN_LOCATIONS
            .iter()
            .map(|(location, pattern)| VersionSpec::new(*location, pattern))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(specs))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a VersionSpec;
    type IntoIter = std::slice::Iter<'a, VersionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
