//! Tool registry: resolves a wire name and runs the matching handler.
//!
//! A handler decodes its typed arguments, validates them, delegates to the
//! strategy contract or the driver, and renders the result as 2-space
//! pretty-printed JSON. Handlers share no state.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Result, ToolError};
use crate::reasoning::{
    BeamSearch, Hybrid, Mcts, R1Transformer, SessionOutcome, SingleShotStrategy,
    StepwiseStrategy, run_session, run_single_shot,
};
use crate::stdio::metadata::args::{BeamStepArgs, QueryArgs, R1Args, SimulationStepArgs};

/// Every tool the server registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    MctsReasoning,
    BeamSearchReasoning,
    R1Reasoning,
    HybridReasoning,
    ReasonMcts,
    ReasonBeam,
    ReasonR1,
    ReasonHybrid,
}

impl ToolName {
    pub const ALL: [ToolName; 8] = [
        Self::MctsReasoning,
        Self::BeamSearchReasoning,
        Self::R1Reasoning,
        Self::HybridReasoning,
        Self::ReasonMcts,
        Self::ReasonBeam,
        Self::ReasonR1,
        Self::ReasonHybrid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MctsReasoning => "mcts_reasoning",
            Self::BeamSearchReasoning => "beam_search_reasoning",
            Self::R1Reasoning => "r1_reasoning",
            Self::HybridReasoning => "hybrid_reasoning",
            Self::ReasonMcts => "reason_mcts",
            Self::ReasonBeam => "reason_beam",
            Self::ReasonR1 => "reason_r1",
            Self::ReasonHybrid => "reason_hybrid",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode tool arguments; decoding failures are caller errors.
fn decode<T: DeserializeOwned>(arguments: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::validation(format!("Invalid arguments: {e}")))
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Run `tool` with its raw JSON arguments and return the text payload.
pub fn invoke(tool: ToolName, arguments: Map<String, Value>) -> Result<String> {
    match tool {
        ToolName::MctsReasoning => {
            let request = decode::<SimulationStepArgs>(arguments)?.into_request()?;
            render(&Mcts.execute(&request)?)
        }
        ToolName::BeamSearchReasoning => {
            let request = decode::<BeamStepArgs>(arguments)?.into_request()?;
            render(&BeamSearch.execute(&request)?)
        }
        ToolName::HybridReasoning => {
            let request = decode::<SimulationStepArgs>(arguments)?.into_request()?;
            render(&Hybrid.execute(&request)?)
        }
        ToolName::R1Reasoning => {
            let args = decode::<R1Args>(arguments)?;
            render(&R1Transformer.execute(&args.prompt)?)
        }
        ToolName::ReasonMcts => reason(&Mcts, arguments),
        ToolName::ReasonBeam => reason(&BeamSearch, arguments),
        ToolName::ReasonHybrid => reason(&Hybrid, arguments),
        ToolName::ReasonR1 => {
            let args = decode::<QueryArgs>(arguments)?;
            let answer = run_single_shot(&R1Transformer, &args.query)?;
            render(&SessionOutcome::Answer(answer))
        }
    }
}

fn reason(strategy: &dyn StepwiseStrategy, arguments: Map<String, Value>) -> Result<String> {
    let args = decode::<QueryArgs>(arguments)?;
    let trace = run_session(strategy, &args.query)?;
    render(&SessionOutcome::Trace(trace))
}
