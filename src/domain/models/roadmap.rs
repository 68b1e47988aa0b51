//! Roadmap artifact: a detailed execution plan tied to one strategy record.
//!
//! Roadmaps are earned, not automatic: generation is gated on the EXECUTE
//! lifecycle state. A roadmap is never deleted, only marked invalidated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::strategy::{Strategy, StrategyRecord};

/// Priority of a roadmap action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Critical,
    High,
    Medium,
}

/// Category of a roadmap action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Resume,
    Skill,
    Application,
    Networking,
    Preparation,
}

/// A single concrete, time-bound action in the roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapAction {
    pub action_id: String,
    pub title: String,
    pub description: String,
    /// Days from roadmap creation
    pub deadline_days: u32,
    pub priority: ActionPriority,
    pub category: ActionCategory,
    #[serde(default)]
    pub completed: bool,
}

/// A milestone that marks progress in the roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapMilestone {
    pub milestone_id: String,
    pub title: String,
    pub description: String,
    /// Days from roadmap creation
    pub target_days: u32,
    pub success_criteria: Vec<String>,
}

/// High-level goal for the roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapGoal {
    pub goal_id: String,
    pub title: String,
    pub description: String,
    /// How to measure success
    pub measurable: String,
}

/// Complete execution roadmap for a validated strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub roadmap_id: Uuid,
    pub strategy: Strategy,
    /// Always "execute" for valid roadmaps
    pub phase: String,
    pub created_at: DateTime<Utc>,
    pub strategy_confidence: f64,

    pub goals: Vec<RoadmapGoal>,
    pub milestones: Vec<RoadmapMilestone>,
    pub actions: Vec<RoadmapAction>,

    pub review_after_days: u32,
    pub estimated_completion_days: u32,
    #[serde(default = "default_version")]
    pub version: u32,

    /// Strategy name + initial confidence + creation timestamp; used to
    /// detect staleness against the live session
    pub strategy_version: String,
    #[serde(default)]
    pub invalidated: bool,
    #[serde(default)]
    pub invalidation_reason: Option<String>,
}

fn default_version() -> u32 {
    1
}

impl Roadmap {
    /// Build the staleness tag for the record this roadmap was issued for.
    pub fn version_tag(record: &StrategyRecord, created_at: DateTime<Utc>) -> String {
        format!(
            "{}-{}-{}",
            record.strategy,
            record.initial_confidence,
            created_at.to_rfc3339()
        )
    }

    /// Mark this roadmap invalidated with a reason. Idempotent: an already
    /// invalidated roadmap keeps its original reason.
    pub fn invalidate(&mut self, reason: impl Into<String>) {
        if self.invalidated {
            return;
        }
        self.invalidated = true;
        self.invalidation_reason = Some(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::strategy::StrategyDecision;

    #[test]
    fn test_invalidate_is_idempotent() {
        let decision = StrategyDecision {
            strategy: Strategy::HoldPosition,
            action: "hold".to_string(),
            confidence: 0.85,
        };
        let record = StrategyRecord::new(&decision);
        let now = Utc::now();
        let mut roadmap = Roadmap {
            roadmap_id: Uuid::new_v4(),
            strategy: Strategy::HoldPosition,
            phase: "execute".to_string(),
            created_at: now,
            strategy_confidence: 0.85,
            goals: vec![],
            milestones: vec![],
            actions: vec![],
            review_after_days: 14,
            estimated_completion_days: 14,
            version: 1,
            strategy_version: Roadmap::version_tag(&record, now),
            invalidated: false,
            invalidation_reason: None,
        };

        roadmap.invalidate("first reason");
        roadmap.invalidate("second reason");
        assert!(roadmap.invalidated);
        assert_eq!(roadmap.invalidation_reason.as_deref(), Some("first reason"));
    }

    #[test]
    fn test_version_tag_contains_strategy_and_confidence() {
        let decision = StrategyDecision {
            strategy: Strategy::RoleShift,
            action: "shift".to_string(),
            confidence: 0.45,
        };
        let record = StrategyRecord::new(&decision);
        let tag = Roadmap::version_tag(&record, Utc::now());
        assert!(tag.starts_with("RoleShift-0.45-"));
    }
}
