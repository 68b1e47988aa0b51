//! Strategy re-evaluation: the learning loop.
//!
//! When a strategy enters RECONSIDER, the failed record is archived, the
//! diagnosis and selection stages are re-run over the same evidence, and a
//! strategy that has already failed is never re-selected.

use std::collections::HashSet;

use tracing::info;

use crate::domain::models::session::AgentSession;
use crate::domain::models::strategy::{Strategy, StrategyDecision, StrategyRecord, StrategyState};
use crate::services::{diagnoser, selector};

/// Fallback priority when the fresh selection repeats a failed strategy.
pub const FALLBACK_PRIORITY: [Strategy; 4] = [
    Strategy::ResumeOptimization,
    Strategy::SkillGapPatch,
    Strategy::RoleShift,
    Strategy::HoldPosition,
];

/// Replace a failed strategy with a fresh selection.
///
/// No-op unless the active record is marked failed. The failed record moves
/// to history, the loop counter increments, and the new record starts in
/// EXPLORE regardless of what the old one had reached.
pub fn re_evaluate(session: &mut AgentSession) {
    let Some(record) = session.current_strategy.take() else {
        return;
    };
    if !record.failed {
        session.current_strategy = Some(record);
        return;
    }

    let failed_strategy = record.strategy;
    session.strategy_history.push(record);
    session.loop_iteration += 1;

    let failed_strategies: HashSet<Strategy> = session
        .strategy_history
        .iter()
        .filter(|r| r.failed)
        .map(|r| r.strategy)
        .collect();

    // Re-run the diagnosis and selection over the unchanged evidence.
    let report = diagnoser::analyze(&session.stage1_evidence);
    let mut decision = selector::select(&report, &session.stage1_evidence.section_signals);
    session.stage2_bottleneck = report;

    if failed_strategies.contains(&decision.strategy) {
        decision = fallback_decision(&failed_strategies);
    }

    info!(
        from = %failed_strategy,
        to = %decision.strategy,
        confidence = decision.confidence,
        iteration = session.loop_iteration,
        "strategy re-evaluated"
    );
    session.explanation_log.push(format!(
        "Re-evaluated strategy. Changed from '{failed_strategy}' to '{}'. \
         New confidence: {}. State: {}.",
        decision.strategy,
        decision.confidence,
        StrategyState::Explore
    ));

    session.current_strategy = Some(StrategyRecord::new(&decision));
    session.stage3_strategy = decision;
}

/// First non-failed strategy in priority order, at reduced confidence.
/// With every strategy failed, holds position at rock-bottom confidence.
fn fallback_decision(failed: &HashSet<Strategy>) -> StrategyDecision {
    for strategy in FALLBACK_PRIORITY {
        if !failed.contains(&strategy) {
            return StrategyDecision {
                strategy,
                action: fallback_action(strategy).to_string(),
                confidence: fallback_confidence(strategy),
            };
        }
    }

    StrategyDecision {
        strategy: Strategy::HoldPosition,
        action: "All strategies exhausted. Recommend manual review of career positioning."
            .to_string(),
        confidence: 0.25,
    }
}

const fn fallback_action(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::ResumeOptimization => {
            "Restructure the resume to highlight evidence of applied skills."
        }
        Strategy::SkillGapPatch => {
            "Add one in-demand skill through a verifiable project or credential."
        }
        Strategy::RoleShift => "Adjust target role to better align with current evidence profile.",
        Strategy::HoldPosition => "Maintain current positioning and continue application process.",
    }
}

const fn fallback_confidence(strategy: Strategy) -> f64 {
    match strategy {
        Strategy::ResumeOptimization => 0.55,
        Strategy::SkillGapPatch => 0.45,
        Strategy::RoleShift => 0.35,
        Strategy::HoldPosition => 0.70,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::bottleneck::{BottleneckRatings, BottleneckReport, Category};
    use crate::domain::models::evidence::EvidenceBundle;

    fn failed_session(strategy: Strategy) -> AgentSession {
        let mut session = AgentSession::initialize(
            EvidenceBundle::default(),
            BottleneckReport {
                implied_role: "Software Engineer".to_string(),
                bottlenecks: BottleneckRatings::default(),
                dominant_issue: Some(Category::ExperienceStrength),
                justification: "test".to_string(),
            },
            StrategyDecision {
                strategy,
                action: "act".to_string(),
                confidence: 0.45,
            },
        );
        let record = session.current_strategy.as_mut().unwrap();
        record.failed = true;
        record.strategy_state = StrategyState::Reconsider;
        record.current_confidence = 0.25;
        session
    }

    #[test]
    fn test_no_op_without_failure() {
        let mut session = failed_session(Strategy::RoleShift);
        session.current_strategy.as_mut().unwrap().failed = false;
        let before = session.clone();
        re_evaluate(&mut session);
        assert_eq!(session, before);
    }

    #[test]
    fn test_failed_strategy_is_archived() {
        // Empty evidence routes the fresh selection to RoleShift, which is
        // exactly the failed strategy; the fallback ladder must kick in.
        let mut session = failed_session(Strategy::RoleShift);
        re_evaluate(&mut session);

        assert_eq!(session.strategy_history.len(), 1);
        assert_eq!(session.strategy_history[0].strategy, Strategy::RoleShift);
        assert!(session.strategy_history[0].failed);
        assert_eq!(session.loop_iteration, 1);

        let record = session.current_strategy.as_ref().unwrap();
        assert_eq!(record.strategy, Strategy::ResumeOptimization);
        assert_eq!(record.strategy_state, StrategyState::Explore);
        assert_eq!(record.current_confidence, 0.55);
    }

    #[test]
    fn test_fallback_skips_all_failed_strategies() {
        let failed: HashSet<Strategy> =
            [Strategy::ResumeOptimization, Strategy::SkillGapPatch]
                .into_iter()
                .collect();
        let decision = fallback_decision(&failed);
        assert_eq!(decision.strategy, Strategy::RoleShift);
        assert_eq!(decision.confidence, 0.35);
    }

    #[test]
    fn test_exhaustion_holds_position_at_minimum() {
        let failed: HashSet<Strategy> = FALLBACK_PRIORITY.into_iter().collect();
        let decision = fallback_decision(&failed);
        assert_eq!(decision.strategy, Strategy::HoldPosition);
        assert_eq!(decision.confidence, 0.25);
        assert!(decision.action.contains("All strategies exhausted"));
    }

    #[test]
    fn test_re_evaluation_logs_the_change() {
        let mut session = failed_session(Strategy::RoleShift);
        re_evaluate(&mut session);
        let last = session.explanation_log.last().unwrap();
        assert!(last.contains("Re-evaluated strategy"));
        assert!(last.contains("'RoleShift'"));
        assert!(last.contains("State: explore"));
    }
}
