pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CatalogArgs, CliArgs, Commands, ContextArgs, DetectArgs};
pub use output::{OutputFormat, OutputFormatter};
