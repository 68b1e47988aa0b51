//! Strategy decision and lifecycle models.
//!
//! A strategy decision is the selector's output: exactly one strategy, one
//! concrete action, and a bounded confidence. A strategy record tracks one
//! strategy's confidence, outcomes, and lifecycle state until it is archived.

use serde::{Deserialize, Serialize};

/// The four fixed strategies. Serialized verbatim (`"ResumeOptimization"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    ResumeOptimization,
    SkillGapPatch,
    RoleShift,
    HoldPosition,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResumeOptimization => "ResumeOptimization",
            Self::SkillGapPatch => "SkillGapPatch",
            Self::RoleShift => "RoleShift",
            Self::HoldPosition => "HoldPosition",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Real-world outcome of an application under the current strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Interview,
    Rejected,
    NoResponse,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interview => "interview",
            Self::Rejected => "rejected",
            Self::NoResponse => "no_response",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "interview" => Some(Self::Interview),
            "rejected" => Some(Self::Rejected),
            "no_response" => Some(Self::NoResponse),
            _ => None,
        }
    }

    /// Rejections and silence both count against the strategy.
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::Rejected | Self::NoResponse)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy lifecycle state.
///
/// EXPLORE is the initial state for every new strategy. EXECUTE is
/// forward-locked: a record in EXECUTE only leaves it through failure.
/// RECONSIDER is terminal for the record; it resolves only through
/// re-evaluation creating a brand-new record in EXPLORE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyState {
    /// Strategy just selected, insufficient evidence to validate
    #[default]
    Explore,
    /// Strategy showing positive signals (received interviews)
    Validate,
    /// Strategy validated and locked, ready for roadmap generation
    Execute,
    /// Strategy invalidated; triggers re-evaluation
    Reconsider,
}

impl StrategyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explore => "explore",
            Self::Validate => "validate",
            Self::Execute => "execute",
            Self::Reconsider => "reconsider",
        }
    }
}

impl std::fmt::Display for StrategyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the strategy selector: one strategy, one action, one confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyDecision {
    pub strategy: Strategy,
    /// One immediately executable instruction
    pub action: String,
    /// Confidence in [0.20, 0.95]; at most 0.90 when no dominant issue
    pub confidence: f64,
}

/// Record of one strategy attempt with its outcomes and lifecycle state.
///
/// Owned exclusively by the active session; retired into history exactly
/// once, by re-evaluation, and never mutated after archival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRecord {
    pub strategy: Strategy,
    pub initial_confidence: f64,
    /// Always in [0.10, 0.95], 2-decimal precision
    pub current_confidence: f64,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
    #[serde(default)]
    pub failed: bool,
    /// Legacy session documents omit this field; they default to EXPLORE.
    #[serde(default)]
    pub strategy_state: StrategyState,
}

impl StrategyRecord {
    /// Create a fresh record for a newly selected strategy.
    /// Every new strategy starts in EXPLORE.
    pub fn new(decision: &StrategyDecision) -> Self {
        Self {
            strategy: decision.strategy,
            initial_confidence: decision.confidence,
            current_confidence: decision.confidence,
            outcomes: Vec::new(),
            failed: false,
            strategy_state: StrategyState::Explore,
        }
    }

    /// Number of interview outcomes recorded against this strategy.
    pub fn interview_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| **o == Outcome::Interview)
            .count()
    }

    /// Number of negative outcomes (rejected or no_response).
    pub fn negative_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_negative()).count()
    }
}
