//! Command wrappers: reason_mcts, reason_beam, reason_hybrid, reason_r1

use crate::stdio::dispatch::ToolName;
use crate::stdio::metadata::args::QueryArgs;
use crate::stdio::metadata::types::{build_schema, ToolMetadata};

pub fn command_tools() -> Vec<ToolMetadata> {
    vec![
        ToolMetadata {
            name: ToolName::ReasonMcts.as_str(),
            category: "command",
            description: "Reason about a query with MCTS, running all three steps automatically. Returns every thought of the session.",
            schema: build_schema::<QueryArgs>(),
        },
        ToolMetadata {
            name: ToolName::ReasonBeam.as_str(),
            category: "command",
            description: "Reason about a query with Beam Search, running all three steps automatically. Returns every thought of the session.",
            schema: build_schema::<QueryArgs>(),
        },
        ToolMetadata {
            name: ToolName::ReasonHybrid.as_str(),
            category: "command",
            description: "Reason about a query with the Hybrid transformer + MCTS strategy, running all three steps automatically. Returns every thought of the session.",
            schema: build_schema::<QueryArgs>(),
        },
        ToolMetadata {
            name: ToolName::ReasonR1.as_str(),
            category: "command",
            description: "Reason about a query with the R1 transformer. Same answer as r1_reasoning, taking a query instead of a prompt.",
            schema: build_schema::<QueryArgs>(),
        },
    ]
}
