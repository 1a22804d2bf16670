//! Single-shot R1 transformer analysis.

use super::{PROMPT_PREVIEW_CHARS, SingleShotResult, SingleShotStrategy, Strategy, preview};
use crate::error::{Result, ToolError};

const ANALYSIS_POINTS: [&str; 5] = [
    "Initial problem parsing",
    "Key observation",
    "Proposed solution approach",
    "Implementation details",
    "Verification and testing",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct R1Transformer;

impl R1Transformer {
    fn render(prompt: &str) -> String {
        let mut reasoning = format!(
            "R1 Reasoning Analysis:\n\nFor the prompt: \"{}...\", the analysis is:\n\n",
            preview(prompt, PROMPT_PREVIEW_CHARS)
        );
        for (i, point) in ANALYSIS_POINTS.iter().enumerate() {
            reasoning.push_str(&format!("{}. {point}: [Simulated R1 analysis]\n", i + 1));
        }
        reasoning.push_str("\n[This would be actual R1 Transformer-based reasoning content]");
        reasoning
    }
}

impl SingleShotStrategy for R1Transformer {
    fn strategy(&self) -> Strategy {
        Strategy::R1Transformer
    }

    fn execute(&self, prompt: &str) -> Result<SingleShotResult> {
        if prompt.is_empty() {
            return Err(ToolError::validation("Prompt is required"));
        }
        Ok(SingleShotResult {
            strategy: self.strategy(),
            original_prompt: prompt.to_string(),
            reasoning: Self::render(prompt),
            complete: true,
        })
    }
}
