//! Auto-iteration driver behind the `reason_*` convenience tools.
//!
//! Given only a query, a step-wise strategy is driven through
//! [`SESSION_TOTAL_THOUGHTS`] steps inside one call using the strategy's
//! default tunable. The single-shot strategy is forwarded as is.

use serde::Serialize;

use super::{
    SingleShotResult, SingleShotStrategy, StepContext, StepwiseStrategy, Strategy,
};
use crate::error::{Result, ToolError};

/// Steps taken by every auto-iterated session.
pub const SESSION_TOTAL_THOUGHTS: u64 = 3;

/// Every thought produced by one auto-iterated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTrace {
    pub strategy: Strategy,
    pub original_prompt: String,
    pub all_thoughts: Vec<String>,
    /// Last step reached, equal to `all_thoughts.len()`.
    pub thought_number: u64,
    pub total_thoughts: u64,
    pub complete: bool,
}

/// What a `reason_*` tool returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SessionOutcome {
    Trace(SessionTrace),
    Answer(SingleShotResult),
}

fn command_failed(strategy: Strategy, err: impl std::fmt::Display) -> ToolError {
    ToolError::reasoning(format!("{} reasoning command failed: {err}", strategy.label()))
}

fn require_query(query: &str) -> Result<()> {
    if query.is_empty() {
        return Err(ToolError::validation("Query is required"));
    }
    Ok(())
}

/// Drive `strategy` from its opening thought to the final step.
///
/// A failing step aborts the session and the thoughts gathered so far are
/// dropped.
pub fn run_session(strategy: &dyn StepwiseStrategy, query: &str) -> Result<SessionTrace> {
    require_query(query)?;

    let total_thoughts = SESSION_TOTAL_THOUGHTS;
    let tunable = strategy.tunable_kind().default_tunable();

    let mut thought_number = 1;
    let mut current = strategy.opening(query, total_thoughts);
    let mut all_thoughts = vec![current.clone()];

    while thought_number < total_thoughts {
        thought_number += 1;
        let ctx = StepContext {
            step: thought_number,
            total: total_thoughts,
            previous: &current,
            tunable,
        };
        let next = strategy
            .follow_up(&ctx, query)
            .map_err(|e| command_failed(strategy.strategy(), e))?;
        all_thoughts.push(next.clone());
        current = next;
    }

    Ok(SessionTrace {
        strategy: strategy.strategy(),
        original_prompt: query.to_string(),
        all_thoughts,
        thought_number,
        total_thoughts,
        complete: true,
    })
}

/// Forward `query` to a single-shot strategy.
pub fn run_single_shot(strategy: &dyn SingleShotStrategy, query: &str) -> Result<SingleShotResult> {
    require_query(query)?;
    strategy.execute(query).map_err(|e| {
        if e.is_validation() {
            e
        } else {
            command_failed(strategy.strategy(), e)
        }
    })
}
