// testing utilities for generating release project trees

pub mod project_builder;

pub use project_builder::{ReleaseFile, TestProject, TestProjectBuilder};
