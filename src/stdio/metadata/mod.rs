//! Static tool metadata served by `list_tools`.
//!
//! Schemas are generated from the typed argument structs once and cached.

pub mod args;
mod category_metadata;
mod types;

pub use category_metadata::all_tool_metadata;
pub use types::ToolMetadata;
