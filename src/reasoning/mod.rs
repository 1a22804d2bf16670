//! Reasoning strategies and the contract every strategy implements.
//!
//! Two shapes exist:
//! - step-wise ([`StepwiseStrategy`]): the caller supplies the current thought
//!   and receives the next one, managing the step loop itself
//! - single-shot ([`SingleShotStrategy`]): the caller supplies a prompt and
//!   receives a complete answer
//!
//! Nothing here performs real search or inference. The strategies define the
//! shape of an invocation and its output through deterministic templates.

use serde::Serialize;

use crate::error::{Result, ToolError};

pub mod driver;
pub mod r1;
pub mod request;
pub mod stepwise;

pub use driver::{
    SESSION_TOTAL_THOUGHTS, SessionOutcome, SessionTrace, run_session, run_single_shot,
};
pub use r1::R1Transformer;
pub use request::{ReasoningRequest, Tunable, TunableKind};
pub use stepwise::{BeamSearch, Hybrid, Mcts};

/// Characters of the previous thought embedded in a generated step.
pub const THOUGHT_PREVIEW_CHARS: usize = 50;

/// Characters of the prompt embedded in a single-shot answer.
pub const PROMPT_PREVIEW_CHARS: usize = 100;

/// Strategy tag carried in every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Mcts,
    BeamSearch,
    HybridTransformerMcts,
    R1Transformer,
}

impl Strategy {
    /// Wire tag, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mcts => "mcts",
            Self::BeamSearch => "beam_search",
            Self::HybridTransformerMcts => "hybrid_transformer_mcts",
            Self::R1Transformer => "r1_transformer",
        }
    }

    /// Human label used in templates and failure messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mcts => "MCTS",
            Self::BeamSearch => "Beam Search",
            Self::HybridTransformerMcts => "Hybrid",
            Self::R1Transformer => "R1",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one step-wise invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningResult {
    pub strategy: Strategy,
    pub original_prompt: String,
    pub current_thought: String,
    pub thought_number: u64,
    pub total_thoughts: u64,
    /// Empty when no further step was requested.
    pub next_thought: String,
    pub complete: bool,
}

/// Output of a single-shot invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleShotResult {
    pub strategy: Strategy,
    pub original_prompt: String,
    pub reasoning: String,
    pub complete: bool,
}

/// Data a step-wise strategy needs to render the following thought.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    /// Number of the step being generated.
    pub step: u64,
    pub total: u64,
    /// Thought the new step builds on.
    pub previous: &'a str,
    pub tunable: Tunable,
}

/// A strategy that produces one reasoning step per invocation.
pub trait StepwiseStrategy: Send + Sync {
    fn strategy(&self) -> Strategy;

    /// Which tunable parameter this strategy accepts.
    fn tunable_kind(&self) -> TunableKind;

    /// Render the step described by `ctx`.
    fn propose(&self, ctx: &StepContext<'_>) -> anyhow::Result<String>;

    /// First thought of an auto-iterated session, echoing `query` verbatim.
    fn opening(&self, query: &str, total: u64) -> String;

    /// Follow-up thought of an auto-iterated session.
    fn follow_up(&self, ctx: &StepContext<'_>, query: &str) -> anyhow::Result<String>;

    /// Validate `request` and produce the next step.
    fn execute(&self, request: &ReasoningRequest) -> Result<ReasoningResult> {
        request.require_text()?;

        let next_thought = if request.next_thought_needed {
            request
                .thought_number
                .checked_add(1)
                .ok_or_else(|| {
                    anyhow::anyhow!("no step follows thoughtNumber {}", request.thought_number)
                })
                .and_then(|step| {
                    self.propose(&StepContext {
                        step,
                        total: request.total_thoughts,
                        previous: &request.thought,
                        tunable: request.tunable,
                    })
                })
                .map_err(|e| {
                    ToolError::reasoning(format!(
                        "{} reasoning failed: {e}",
                        self.strategy().label()
                    ))
                })?
        } else {
            String::new()
        };

        Ok(ReasoningResult {
            strategy: self.strategy(),
            original_prompt: request.prompt.clone(),
            current_thought: request.thought.clone(),
            thought_number: request.thought_number,
            total_thoughts: request.total_thoughts,
            next_thought,
            complete: request.is_complete(),
        })
    }
}

/// A strategy that answers in a single invocation.
pub trait SingleShotStrategy: Send + Sync {
    fn strategy(&self) -> Strategy;

    fn execute(&self, prompt: &str) -> Result<SingleShotResult>;
}

/// First `max_chars` characters of `text`.
///
/// Cuts on character count, not on words, and never appends a marker.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
