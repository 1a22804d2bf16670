//! Strategy tools: mcts_reasoning, beam_search_reasoning, hybrid_reasoning, r1_reasoning

use crate::stdio::dispatch::ToolName;
use crate::stdio::metadata::args::{BeamStepArgs, R1Args, SimulationStepArgs};
use crate::stdio::metadata::types::{build_schema, ToolMetadata};

pub fn reasoning_tools() -> Vec<ToolMetadata> {
    vec![
        ToolMetadata {
            name: ToolName::MctsReasoning.as_str(),
            category: "reasoning",
            description: "Monte Carlo Tree Search reasoning, one step per call. Pass the current thought with its step number and total; the result carries the next thought and whether the session is complete. numSimulations (1-150, default 50) bounds the simulated search effort.",
            schema: build_schema::<SimulationStepArgs>(),
        },
        ToolMetadata {
            name: ToolName::BeamSearchReasoning.as_str(),
            category: "reasoning",
            description: "Beam Search reasoning, one step per call. Keeps the top beamWidth paths (1-10, default 3) and returns the most promising next thought. Re-invoke with the returned thought until complete is true.",
            schema: build_schema::<BeamStepArgs>(),
        },
        ToolMetadata {
            name: ToolName::HybridReasoning.as_str(),
            category: "reasoning",
            description: "Hybrid transformer + MCTS reasoning, one step per call. Combines transformer analysis with numSimulations MCTS simulations (1-150, default 50) on the current thought.",
            schema: build_schema::<SimulationStepArgs>(),
        },
        ToolMetadata {
            name: ToolName::R1Reasoning.as_str(),
            category: "reasoning",
            description: "R1 transformer reasoning. Returns a complete five-point structured analysis of the prompt in a single call.",
            schema: build_schema::<R1Args>(),
        },
    ]
}
