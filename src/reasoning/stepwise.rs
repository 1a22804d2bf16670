//! Step-wise strategies: MCTS, Beam Search and the Hybrid transformer+MCTS.

use anyhow::{Result, bail};

use super::{
    StepContext, StepwiseStrategy, Strategy, THOUGHT_PREVIEW_CHARS, TunableKind, preview,
};

/// Tunable value, refusing one meant for another strategy.
fn tunable_for(strategy: &dyn StepwiseStrategy, ctx: &StepContext<'_>) -> Result<u32> {
    let expected = strategy.tunable_kind();
    if ctx.tunable.kind() != expected {
        bail!(
            "expected {} for {}, got {:?}",
            expected.field(),
            strategy.strategy(),
            ctx.tunable
        );
    }
    Ok(ctx.tunable.value())
}

/// Monte Carlo Tree Search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mcts;

impl StepwiseStrategy for Mcts {
    fn strategy(&self) -> Strategy {
        Strategy::Mcts
    }

    fn tunable_kind(&self) -> TunableKind {
        TunableKind::Simulations
    }

    fn propose(&self, ctx: &StepContext<'_>) -> Result<String> {
        let simulations = tunable_for(self, ctx)?;
        Ok(format!(
            "MCTS Reasoning (Step {}/{}): Based on previous analysis \"{}...\", \
             further exploration with {simulations} simulations suggests... \
             [This would be actual MCTS-based reasoning content]",
            ctx.step,
            ctx.total,
            preview(ctx.previous, THOUGHT_PREVIEW_CHARS),
        ))
    }

    fn opening(&self, query: &str, total: u64) -> String {
        format!(
            "MCTS Reasoning (Step 1/{total}): Initial analysis of the problem \"{query}\":\n\n\
             First, let me understand what we're trying to solve here. {query}\n\n\
             [This would be the initial MCTS-based reasoning]"
        )
    }

    fn follow_up(&self, ctx: &StepContext<'_>, query: &str) -> Result<String> {
        let simulations = tunable_for(self, ctx)?;
        Ok(format!(
            "MCTS Reasoning (Step {}/{}): Based on previous analysis \"{}...\", \
             further exploration with {simulations} simulations suggests...\n\n\
             [This would be the next step of MCTS-based reasoning for: {query}]",
            ctx.step,
            ctx.total,
            preview(ctx.previous, THOUGHT_PREVIEW_CHARS),
        ))
    }
}

/// Beam Search keeping the top `beamWidth` paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeamSearch;

impl StepwiseStrategy for BeamSearch {
    fn strategy(&self) -> Strategy {
        Strategy::BeamSearch
    }

    fn tunable_kind(&self) -> TunableKind {
        TunableKind::BeamWidth
    }

    fn propose(&self, ctx: &StepContext<'_>) -> Result<String> {
        let width = tunable_for(self, ctx)?;
        Ok(format!(
            "Beam Search Reasoning (Step {}/{}): Considering {width} alternative paths from \"{}...\", \
             the most promising direction is... \
             [This would be actual Beam Search-based reasoning content]",
            ctx.step,
            ctx.total,
            preview(ctx.previous, THOUGHT_PREVIEW_CHARS),
        ))
    }

    fn opening(&self, query: &str, total: u64) -> String {
        format!(
            "Beam Search Reasoning (Step 1/{total}): Initial analysis of the problem \"{query}\":\n\n\
             Let me explore multiple approaches to this problem. {query}\n\n\
             [This would be the initial Beam Search-based reasoning]"
        )
    }

    fn follow_up(&self, ctx: &StepContext<'_>, query: &str) -> Result<String> {
        let width = tunable_for(self, ctx)?;
        Ok(format!(
            "Beam Search Reasoning (Step {}/{}): Considering {width} alternative paths from \"{}...\", \
             the most promising direction is...\n\n\
             [This would be the next step of Beam Search reasoning for: {query}]",
            ctx.step,
            ctx.total,
            preview(ctx.previous, THOUGHT_PREVIEW_CHARS),
        ))
    }
}

/// Transformer analysis combined with MCTS simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hybrid;

impl StepwiseStrategy for Hybrid {
    fn strategy(&self) -> Strategy {
        Strategy::HybridTransformerMcts
    }

    fn tunable_kind(&self) -> TunableKind {
        TunableKind::Simulations
    }

    fn propose(&self, ctx: &StepContext<'_>) -> Result<String> {
        let simulations = tunable_for(self, ctx)?;
        Ok(format!(
            "Hybrid Reasoning (Step {}/{}): Combining transformer analysis with {simulations} \
             MCTS simulations on \"{}...\", the enhanced analysis suggests... \
             [This would be actual Hybrid Transformer+MCTS reasoning content]",
            ctx.step,
            ctx.total,
            preview(ctx.previous, THOUGHT_PREVIEW_CHARS),
        ))
    }

    fn opening(&self, query: &str, total: u64) -> String {
        format!(
            "Hybrid Reasoning (Step 1/{total}): Initial analysis of the problem \"{query}\":\n\n\
             Using a combination of transformer analysis and MCTS simulation to tackle this problem. {query}\n\n\
             [This would be the initial Hybrid Transformer+MCTS reasoning]"
        )
    }

    fn follow_up(&self, ctx: &StepContext<'_>, query: &str) -> Result<String> {
        let simulations = tunable_for(self, ctx)?;
        Ok(format!(
            "Hybrid Reasoning (Step {}/{}): Combining transformer analysis with {simulations} \
             MCTS simulations on \"{}...\", the enhanced analysis suggests...\n\n\
             [This would be the next step of Hybrid reasoning for: {query}]",
            ctx.step,
            ctx.total,
            preview(ctx.previous, THOUGHT_PREVIEW_CHARS),
        ))
    }
}
