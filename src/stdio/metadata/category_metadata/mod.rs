//! Static metadata for the reasoning tools and their command wrappers.

use super::types::ToolMetadata;
use once_cell::sync::Lazy;

mod commands;
mod reasoning;

use commands::command_tools;
use reasoning::reasoning_tools;

/// All tools with static metadata, cached and sorted alphabetically.
static CACHED_TOOL_METADATA: Lazy<Vec<ToolMetadata>> = Lazy::new(|| {
    let mut tools = Vec::new();

    // Step-wise and single-shot strategy tools
    tools.extend(reasoning_tools());

    // Auto-iterating reason_* wrappers
    tools.extend(command_tools());

    // Sort alphabetically by tool name for consistent ordering
    tools.sort_by(|a, b| a.name.cmp(b.name));

    tools
});

/// Returns a static reference to all tool metadata (cached, sorted).
pub fn all_tool_metadata() -> &'static [ToolMetadata] {
    &CACHED_TOOL_METADATA
}
