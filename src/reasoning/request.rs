//! Typed step-wise request and its tunable parameter.

use crate::error::{Result, ToolError};

/// Strategy-specific knob bounding simulated search effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tunable {
    /// MCTS simulations per step (MCTS, Hybrid).
    Simulations(u32),
    /// Paths kept per step (Beam Search).
    BeamWidth(u32),
}

/// Which tunable a strategy accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunableKind {
    Simulations,
    BeamWidth,
}

impl TunableKind {
    /// Wire name of the argument.
    pub fn field(self) -> &'static str {
        match self {
            Self::Simulations => "numSimulations",
            Self::BeamWidth => "beamWidth",
        }
    }

    /// Inclusive bounds.
    pub fn range(self) -> (u32, u32) {
        match self {
            Self::Simulations => (1, 150),
            Self::BeamWidth => (1, 10),
        }
    }

    pub fn default_value(self) -> u32 {
        match self {
            Self::Simulations => 50,
            Self::BeamWidth => 3,
        }
    }

    fn wrap(self, value: u32) -> Tunable {
        match self {
            Self::Simulations => Tunable::Simulations(value),
            Self::BeamWidth => Tunable::BeamWidth(value),
        }
    }

    /// Default when `raw` is absent, otherwise a bounds-checked value.
    ///
    /// Out-of-range values are rejected, never clamped or defaulted.
    pub fn resolve(self, raw: Option<i64>) -> Result<Tunable> {
        let Some(raw) = raw else {
            return Ok(self.default_tunable());
        };
        let (min, max) = self.range();
        match u32::try_from(raw) {
            Ok(value) if (min..=max).contains(&value) => Ok(self.wrap(value)),
            _ => Err(ToolError::validation(format!(
                "{} must be between {min} and {max}, got {raw}",
                self.field()
            ))),
        }
    }

    pub fn default_tunable(self) -> Tunable {
        self.wrap(self.default_value())
    }
}

impl Tunable {
    pub fn kind(self) -> TunableKind {
        match self {
            Self::Simulations(_) => TunableKind::Simulations,
            Self::BeamWidth(_) => TunableKind::BeamWidth,
        }
    }

    pub fn value(self) -> u32 {
        match self {
            Self::Simulations(v) | Self::BeamWidth(v) => v,
        }
    }
}

/// One step-wise reasoning request after argument decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningRequest {
    pub prompt: String,
    pub thought: String,
    pub thought_number: u64,
    pub total_thoughts: u64,
    pub next_thought_needed: bool,
    pub tunable: Tunable,
}

impl ReasoningRequest {
    /// Build a request, checking the numeric bounds.
    ///
    /// Text fields are checked later by the strategy itself, see
    /// [`ReasoningRequest::require_text`].
    pub fn new(
        prompt: String,
        thought: String,
        thought_number: i64,
        total_thoughts: i64,
        next_thought_needed: bool,
        tunable: Tunable,
    ) -> Result<Self> {
        Ok(Self {
            prompt,
            thought,
            thought_number: positive("thoughtNumber", thought_number)?,
            total_thoughts: positive("totalThoughts", total_thoughts)?,
            next_thought_needed,
            tunable,
        })
    }

    /// Fail when `prompt` or `thought` is empty, prompt first.
    pub fn require_text(&self) -> Result<()> {
        if self.prompt.is_empty() {
            return Err(ToolError::validation("Prompt is required"));
        }
        if self.thought.is_empty() {
            return Err(ToolError::validation("Current thought is required"));
        }
        Ok(())
    }

    /// A session is complete when no further step is wanted or the last
    /// planned step has been reached.
    pub fn is_complete(&self) -> bool {
        !self.next_thought_needed || self.thought_number >= self.total_thoughts
    }
}

fn positive(field: &str, raw: i64) -> Result<u64> {
    match u64::try_from(raw) {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ToolError::validation(format!(
            "{field} must be an integer >= 1, got {raw}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(thought_number: u64, total: u64, next: bool) -> ReasoningRequest {
        ReasoningRequest {
            prompt: "p".into(),
            thought: "t".into(),
            thought_number,
            total_thoughts: total,
            next_thought_needed: next,
            tunable: TunableKind::Simulations.default_tunable(),
        }
    }

    #[test]
    fn test_defaults_only_when_absent() {
        assert_eq!(TunableKind::Simulations.resolve(None), Ok(Tunable::Simulations(50)));
        assert_eq!(TunableKind::BeamWidth.resolve(None), Ok(Tunable::BeamWidth(3)));
        assert_eq!(TunableKind::Simulations.resolve(Some(150)), Ok(Tunable::Simulations(150)));
        assert_eq!(TunableKind::BeamWidth.resolve(Some(1)), Ok(Tunable::BeamWidth(1)));
    }

    #[test]
    fn test_out_of_range_tunable_is_rejected() {
        for raw in [0, -3, 151, i64::MAX] {
            let err = TunableKind::Simulations.resolve(Some(raw));
            assert!(matches!(err, Err(ToolError::Validation(_))), "{raw} accepted");
        }
        for raw in [0, 11] {
            let err = TunableKind::BeamWidth.resolve(Some(raw));
            assert!(matches!(err, Err(ToolError::Validation(ref m)) if m.contains("beamWidth")));
        }
    }

    #[test]
    fn test_thought_numbers_must_be_positive() {
        let tunable = TunableKind::BeamWidth.default_tunable();
        assert!(ReasoningRequest::new("p".into(), "t".into(), 0, 3, true, tunable).is_err());
        assert!(ReasoningRequest::new("p".into(), "t".into(), 1, -1, true, tunable).is_err());
        assert!(ReasoningRequest::new("p".into(), "t".into(), 1, 1, true, tunable).is_ok());
    }

    #[test]
    fn test_thought_numbers_beyond_u32_accepted() {
        let tunable = TunableKind::Simulations.default_tunable();
        let req =
            ReasoningRequest::new("p".into(), "t".into(), 5_000_000_000, i64::MAX, true, tunable)
                .unwrap();
        assert_eq!(req.thought_number, 5_000_000_000);
        assert_eq!(req.total_thoughts, i64::MAX as u64);
        assert!(!req.is_complete());
    }

    #[test]
    fn test_complete_rule() {
        assert!(!request(1, 3, true).is_complete());
        assert!(request(1, 3, false).is_complete());
        assert!(request(3, 3, true).is_complete());
        assert!(request(5, 3, true).is_complete());
    }

    #[test]
    fn test_prompt_checked_before_thought() {
        let mut req = request(1, 1, false);
        req.prompt.clear();
        req.thought.clear();
        assert_eq!(req.require_text(), Err(ToolError::validation("Prompt is required")));
        req.prompt = "p".into();
        assert_eq!(
            req.require_text(),
            Err(ToolError::validation("Current thought is required"))
        );
    }
}
