use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Toolset configuration loaded from JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsetConfig {
    /// List of individual tool names to enable
    pub tools: Vec<String>,
}

impl ToolsetConfig {
    /// Load toolset config from JSON file
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read toolset file: {}", path.display()))?;

        let config: ToolsetConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse toolset file as JSON: {}", path.display()))?;

        Ok(config)
    }
}

/// MCP Reasoning Server - reasoning strategies as MCP tools over stdio
///
/// Step-wise tools:
/// - `mcts_reasoning`: Monte Carlo Tree Search
/// - `beam_search_reasoning`: Beam Search
/// - `hybrid_reasoning`: Transformer + MCTS
///
/// Single-shot tool:
/// - `r1_reasoning`: R1 transformer analysis
///
/// Command wrappers running a full session: `reason_mcts`, `reason_beam`,
/// `reason_r1`, `reason_hybrid`
#[derive(Parser, Debug)]
#[command(name = "mcp-reasoning")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable specific tools by name (comma-separated)
    ///
    /// Example: --tools mcts_reasoning,reason_mcts
    ///
    /// If not specified, all tools are enabled.
    #[arg(
        long,
        value_delimiter = ',',
        env = "MCP_REASONING_TOOLS",
        conflicts_with = "tool"
    )]
    pub tools: Option<Vec<String>>,

    /// Enable specific tool by name (can be specified multiple times)
    ///
    /// Example: --tool r1_reasoning --tool reason_r1
    ///
    /// If not specified, all tools are enabled.
    #[arg(long = "tool", conflicts_with = "tools")]
    pub tool: Vec<String>,

    /// Load tool names from JSON file
    ///
    /// JSON format:
    /// ```json
    /// {
    ///   "tools": [
    ///     "mcts_reasoning",
    ///     "reason_mcts"
    ///   ]
    /// }
    /// ```
    #[arg(long, value_name = "PATH", conflicts_with_all = ["tool", "tools"])]
    pub toolset: Option<std::path::PathBuf>,

    /// List available tool names and exit
    #[arg(long)]
    pub list_tools: bool,
}

impl Cli {
    /// Get the set of enabled tool names
    ///
    /// Returns None if no filter specified (enable all tools)
    /// Returns Some(HashSet) if filter specified (enable only these tools)
    pub fn enabled_tools(&self) -> anyhow::Result<Option<HashSet<String>>> {
        // Priority 1: --toolset (JSON file)
        if let Some(ref path) = self.toolset {
            let config = ToolsetConfig::from_file(path)?;
            return Ok(Some(config.tools.into_iter().collect()));
        }

        // Priority 2: --tools (comma-separated)
        if let Some(tools) = &self.tools {
            return Ok(Some(tools.iter().map(|t| t.trim().to_string()).collect()));
        }

        // Priority 3: --tool (repeated flags)
        if !self.tool.is_empty() {
            return Ok(Some(self.tool.iter().cloned().collect()));
        }

        // No filter specified - enable all tools
        Ok(None)
    }
}

/// Get all available tool names
pub fn available_tools() -> Vec<&'static str> {
    crate::stdio::metadata::all_tool_metadata()
        .iter()
        .map(|tool| tool.name)
        .collect()
}

/// Names in `enabled` that match no registered tool, sorted.
pub fn unknown_tools(enabled: &HashSet<String>) -> Vec<&str> {
    let available = available_tools();
    let mut invalid: Vec<&str> = enabled
        .iter()
        .map(String::as_str)
        .filter(|tool| !available.iter().any(|name| name == tool))
        .collect();
    invalid.sort_unstable();
    invalid
}
