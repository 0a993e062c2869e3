use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// a release file tracked by the built-in registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseFile {
    MainSource,
    CargoManifest,
    Control,
    DebianChangelog,
    ManPageSource,
    ManPage,
}

impl ReleaseFile {
    /// all release files, in built-in registry order
    pub const ALL: [ReleaseFile; 6] = [
        ReleaseFile::MainSource,
        ReleaseFile::CargoManifest,
        ReleaseFile::Control,
        ReleaseFile::DebianChangelog,
        ReleaseFile::ManPageSource,
        ReleaseFile::ManPage,
    ];

    /// location relative to the scripts directory
    pub fn location(&self) -> &'static str {
        match self {
            ReleaseFile::MainSource => "../src/main.rs",
            ReleaseFile::CargoManifest => "../Cargo.toml",
            ReleaseFile::Control => "./control",
            ReleaseFile::DebianChangelog => "../docs/debian_specific/changelog",
            ReleaseFile::ManPageSource => "../docs/man_page/man_page_source.md",
            ReleaseFile::ManPage => "../docs/man_page/photodedupe.1",
        }
    }

    /// typical file contents carrying `version`, with decoy versions around it
    pub fn render(&self, version: &str) -> String {
        match self {
            ReleaseFile::MainSource => format!(
                "use clap::Parser;\n\n\
                 #[derive(Parser, Debug)]\n\
                 #[command(version=\"{version}\")]\n\
                 #[command(about=\"identify duplicate photos\")]\n\
                 struct Args {{\n    dirs: Vec<String>,\n}}\n"
            ),
            ReleaseFile::CargoManifest => format!(
                "[package]\n\
                 name = \"photodedupe\"\n\
                 version = \"{version}\"\n\
                 edition = \"2021\"\n\n\
                 [dependencies]\n\
                 clap = {{ version = \"4.5.4\", features = [\"derive\"] }}\n\n\
                 [dependencies.image]\n\
                 version = \"0.24.7\"\n"
            ),
            ReleaseFile::Control => format!(
                "Package: photodedupe\n\
                 Version: {version}\n\
                 Architecture: amd64\n\
                 Standards-Version: 4.6.0\n"
            ),
            ReleaseFile::DebianChangelog => format!(
                "photodedupe ({version}) unstable; urgency=medium\n\n  \
                 * New upstream release.\n\n \
                 -- Maintainer <maintainer@example.com>  Mon, 01 Jan 2024 00:00:00 +0000\n\n\
                 photodedupe (0.9.0) unstable; urgency=medium\n\n  \
                 * Initial release.\n"
            ),
            ReleaseFile::ManPageSource => format!(
                "% photodedupe(1) Version {version} | photodedupe documentation\n\n\
                 NAME\n====\n\n**photodedupe** - find duplicate photos\n"
            ),
            ReleaseFile::ManPage => format!(
                ".\\\" Automatically generated by Pandoc\n\
                 .TH \"photodedupe\" \"1\" \"\" \"Version {version}\" \"photodedupe documentation\"\n\
                 .SH NAME\n"
            ),
        }
    }
}

#[derive(Debug, Clone)]
enum FileOverride {
    Version(String),
    Contents(String),
    Omit,
}

/// builder for a temporary project tree holding every release file
pub struct TestProjectBuilder {
    version: String,
    overrides: HashMap<ReleaseFile, FileOverride>,
}

impl TestProjectBuilder {
    /// every release file carries `version` unless overridden
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            overrides: HashMap::new(),
        }
    }

    /// write a different version into one file
    pub fn with_file_version(mut self, file: ReleaseFile, version: &str) -> Self {
        self.overrides
            .insert(file, FileOverride::Version(version.to_string()));
        self
    }

    /// write raw contents into one file
    pub fn with_contents(mut self, file: ReleaseFile, contents: &str) -> Self {
        self.overrides
            .insert(file, FileOverride::Contents(contents.to_string()));
        self
    }

    /// leave one file out of the tree
    pub fn without_file(mut self, file: ReleaseFile) -> Self {
        self.overrides.insert(file, FileOverride::Omit);
        self
    }

    pub fn build(self) -> Result<TestProject> {
        let temp_dir = TempDir::new()?;
        let scripts_dir = temp_dir.path().join("scripts");
        fs::create_dir_all(&scripts_dir)?;

        for file in ReleaseFile::ALL {
            let contents = match self.overrides.get(&file) {
                Some(FileOverride::Omit) => continue,
                Some(FileOverride::Contents(contents)) => contents.clone(),
                Some(FileOverride::Version(version)) => file.render(version),
                None => file.render(&self.version),
            };

            let path = scripts_dir.join(file.location());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, contents)?;
        }

        Ok(TestProject {
            temp_dir,
            scripts_dir,
        })
    }
}

/// temporary project tree, removed on drop
pub struct TestProject {
    temp_dir: TempDir,
    scripts_dir: PathBuf,
}

impl TestProject {
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// reference directory the built-in registry locations are relative to
    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    pub fn path_of(&self, file: ReleaseFile) -> PathBuf {
        self.scripts_dir.join(file.location())
    }
}
