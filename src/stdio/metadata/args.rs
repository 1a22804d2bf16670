//! Typed arguments for every tool.
//!
//! The `JsonSchema` derive produces the advertised input schema. Numeric
//! bounds and defaults are enforced again in `into_request`, which is the
//! only path from decoded arguments to a strategy.

use std::fmt;

use schemars::JsonSchema;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;

use crate::error::Result;
use crate::reasoning::{ReasoningRequest, TunableKind};

/// Fields shared by the step-wise tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepArgs {
    /// The problem or query to reason about
    pub prompt: String,
    /// Current reasoning step
    pub thought: String,
    /// Current step number
    #[serde(deserialize_with = "whole_number")]
    #[schemars(range(min = 1))]
    pub thought_number: i64,
    /// Total expected steps
    #[serde(deserialize_with = "whole_number")]
    #[schemars(range(min = 1))]
    pub total_thoughts: i64,
    /// Whether another step is needed
    pub next_thought_needed: bool,
}

impl StepArgs {
    fn into_request(self, kind: TunableKind, raw: Option<i64>) -> Result<ReasoningRequest> {
        let tunable = kind.resolve(raw)?;
        ReasoningRequest::new(
            self.prompt,
            self.thought,
            self.thought_number,
            self.total_thoughts,
            self.next_thought_needed,
            tunable,
        )
    }
}

/// Arguments of `mcts_reasoning` and `hybrid_reasoning`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStepArgs {
    #[serde(flatten)]
    pub step: StepArgs,
    /// Number of MCTS simulations to run
    #[serde(default, deserialize_with = "present_whole_number")]
    #[schemars(range(min = 1, max = 150), extend("default" = 50))]
    pub num_simulations: Option<i64>,
}

impl SimulationStepArgs {
    pub fn into_request(self) -> Result<ReasoningRequest> {
        self.step
            .into_request(TunableKind::Simulations, self.num_simulations)
    }
}

/// Arguments of `beam_search_reasoning`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeamStepArgs {
    #[serde(flatten)]
    pub step: StepArgs,
    /// Number of top paths to maintain (n-sampling)
    #[serde(default, deserialize_with = "present_whole_number")]
    #[schemars(range(min = 1, max = 10), extend("default" = 3))]
    pub beam_width: Option<i64>,
}

impl BeamStepArgs {
    pub fn into_request(self) -> Result<ReasoningRequest> {
        self.step.into_request(TunableKind::BeamWidth, self.beam_width)
    }
}

/// Arguments of `r1_reasoning`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct R1Args {
    /// The problem or query to reason about
    pub prompt: String,
}

/// Arguments of the `reason_*` tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryArgs {
    /// The problem or task to reason about
    pub query: String,
}

/// Accepts a JSON integer, or a float with no fractional part (`2.0`).
fn whole_number<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(WholeNumberVisitor)
}

/// Like [`whole_number`] for optional fields. Only an absent key means
/// "use the default"; an explicit `null` is an error.
fn present_whole_number<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    whole_number(deserializer).map(Some)
}

struct WholeNumberVisitor;

impl<'de> Visitor<'de> for WholeNumberVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a whole number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<i64, E> {
        // 2^63 itself is out of range, hence the strict upper bound
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(v as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}
