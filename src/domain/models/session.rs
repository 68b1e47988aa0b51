//! Agent session: the unit of persistence between requests.
//!
//! The session holds the three stage outputs, the active strategy record,
//! the append-only history, and the explanation log. Engine operations are
//! pure functions of (session, input) -> new session; the caller persists
//! the document between calls.

use serde::{Deserialize, Serialize};

use super::bottleneck::BottleneckReport;
use super::evidence::EvidenceBundle;
use super::strategy::{StrategyDecision, StrategyRecord, StrategyState};

/// Complete agent session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSession {
    /// Stage 1: normalized evidence bundle
    pub stage1_evidence: EvidenceBundle,
    /// Stage 2: bottleneck diagnosis
    pub stage2_bottleneck: BottleneckReport,
    /// Stage 3: current strategy decision
    pub stage3_strategy: StrategyDecision,
    /// The single active strategy record, if any
    #[serde(default)]
    pub current_strategy: Option<StrategyRecord>,
    /// Archived strategy records, append-only
    #[serde(default)]
    pub strategy_history: Vec<StrategyRecord>,
    /// Number of re-evaluations performed
    #[serde(default)]
    pub loop_iteration: u32,
    /// Append-only explanation log
    #[serde(default)]
    pub explanation_log: Vec<String>,
}

impl AgentSession {
    /// Initialize a new session from the three stage outputs.
    ///
    /// Creates the initial strategy record in EXPLORE and appends the first
    /// explanation entry.
    pub fn initialize(
        evidence: EvidenceBundle,
        bottleneck: BottleneckReport,
        decision: StrategyDecision,
    ) -> Self {
        let record = StrategyRecord::new(&decision);
        let dominant = bottleneck
            .dominant_issue
            .map_or_else(|| "none identified".to_string(), |c| c.to_string());
        let entry = format!(
            "Agent initialized. Selected '{}' strategy due to dominant issue: {}. \
             Initial confidence: {}. State: {}.",
            decision.strategy,
            dominant,
            decision.confidence,
            StrategyState::Explore
        );
        Self {
            stage1_evidence: evidence,
            stage2_bottleneck: bottleneck,
            stage3_strategy: decision,
            current_strategy: Some(record),
            strategy_history: Vec::new(),
            loop_iteration: 0,
            explanation_log: vec![entry],
        }
    }

    /// Current lifecycle state, if a strategy is active.
    pub fn strategy_state(&self) -> Option<StrategyState> {
        self.current_strategy.as_ref().map(|r| r.strategy_state)
    }
}

/// Result of processing one outcome through the loop.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeReport {
    pub session: AgentSession,
    /// True when re-evaluation replaced the strategy with a different one
    pub strategy_changed: bool,
    /// The active strategy decision after processing
    pub current_strategy: StrategyDecision,
    /// One-line explanation suitable for display
    pub explanation: String,
    /// Lifecycle state after processing
    pub strategy_state: Option<StrategyState>,
}
