//! CLI command implementations

pub mod build;
pub mod derive;
mod interactive;
pub mod options;
pub mod sectors;
