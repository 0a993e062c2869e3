pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod extractor;
pub mod registry;

pub mod testing;
