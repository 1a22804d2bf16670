//! Command-line interface and tool filtering.

mod types;

pub use types::{Cli, ToolsetConfig, available_tools, unknown_tools};
