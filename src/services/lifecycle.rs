//! Strategy lifecycle: confidence updates, the failure predicate, and the
//! EXPLORE/VALIDATE/EXECUTE/RECONSIDER state machine.
//!
//! Interviews never switch the strategy directly. Positive outcomes only
//! advance the lifecycle state; strategy replacement happens exclusively
//! through the RECONSIDER path handled by re-evaluation.

use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::session::{AgentSession, OutcomeReport};
use crate::domain::models::strategy::{Outcome, StrategyRecord, StrategyState};
use crate::services::{explainer, reevaluation};

/// Confidence floor after outcome adjustment.
pub const CONFIDENCE_FLOOR: f64 = 0.10;
/// Confidence ceiling after outcome adjustment.
pub const CONFIDENCE_CEILING: f64 = 0.95;
/// A strategy whose confidence drops below this has failed.
pub const FAILURE_THRESHOLD: f64 = 0.30;
/// A strategy with this many negative outcomes has failed.
pub const NEGATIVE_OUTCOME_LIMIT: usize = 3;

/// Minimum confidence to advance EXPLORE -> VALIDATE.
const VALIDATE_CONFIDENCE: f64 = 0.55;
/// Minimum confidence to advance VALIDATE -> EXECUTE.
const EXECUTE_CONFIDENCE: f64 = 0.65;

const fn confidence_delta(outcome: Outcome) -> f64 {
    match outcome {
        Outcome::Interview => 0.15,
        Outcome::Rejected => -0.10,
        Outcome::NoResponse => -0.08,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Apply one outcome's delta to a confidence value, clamped and rounded.
pub fn update_confidence(current: f64, outcome: Outcome) -> f64 {
    round2((current + confidence_delta(outcome)).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING))
}

/// The single failure predicate: confidence below threshold or too many
/// negative outcomes. Both the outcome recorder and the state machine use
/// this, so a record can never be failed without entering RECONSIDER.
pub fn is_failing(record: &StrategyRecord) -> bool {
    record.failed
        || record.current_confidence < FAILURE_THRESHOLD
        || record.negative_count() >= NEGATIVE_OUTCOME_LIMIT
}

/// Record an outcome against the active strategy.
///
/// Appends the outcome, adjusts confidence, marks failure when the failure
/// predicate fires, and appends an explanation entry.
pub fn record_outcome(session: &mut AgentSession, outcome: Outcome) -> DomainResult<()> {
    let Some(record) = session.current_strategy.as_mut() else {
        return Err(DomainError::NoActiveStrategy);
    };

    record.outcomes.push(outcome);
    record.current_confidence = update_confidence(record.current_confidence, outcome);

    if is_failing(record) {
        record.failed = true;
        let entry = format!(
            "Strategy '{}' marked as failed after {} outcome(s). Confidence dropped to {}.",
            record.strategy,
            record.outcomes.len(),
            record.current_confidence
        );
        session.explanation_log.push(entry);
    } else {
        let entry = format!(
            "Recorded '{}' for strategy '{}'. Confidence: {}. State: {}.",
            outcome, record.strategy, record.current_confidence, record.strategy_state
        );
        session.explanation_log.push(entry);
    }

    Ok(())
}

/// Evaluate lifecycle state transitions for the active strategy.
///
/// Transition rules, in precedence order:
/// 1. any -> RECONSIDER when the failure predicate fires
/// 2. EXPLORE -> VALIDATE on >= 1 interview and confidence >= 0.55
/// 3. VALIDATE -> EXECUTE on >= 2 interviews, confidence >= 0.65, and no
///    positioning issue
/// 4. VALIDATE -> EXPLORE when a positioning issue emerges before the
///    second interview
///
/// EXECUTE and RECONSIDER have no forward transitions: EXECUTE is locked,
/// and RECONSIDER resolves only through re-evaluation.
pub fn evaluate_state(session: &mut AgentSession) {
    let has_positioning_issue = session.stage1_evidence.positioning_issue_triggered();

    let Some(record) = session.current_strategy.as_mut() else {
        return;
    };

    let current_state = record.strategy_state;
    let interview_count = record.interview_count();
    let negative_count = record.negative_count();

    let mut new_state = current_state;
    let mut reason = String::new();

    if record.current_confidence < FAILURE_THRESHOLD {
        new_state = StrategyState::Reconsider;
        reason = format!(
            "confidence dropped to {} (below threshold {FAILURE_THRESHOLD})",
            record.current_confidence
        );
    } else if negative_count >= NEGATIVE_OUTCOME_LIMIT {
        new_state = StrategyState::Reconsider;
        reason = format!("{negative_count} negative outcomes (limit: {NEGATIVE_OUTCOME_LIMIT})");
    } else if current_state == StrategyState::Explore {
        if interview_count >= 1 && record.current_confidence >= VALIDATE_CONFIDENCE {
            new_state = StrategyState::Validate;
            reason = format!(
                "{interview_count} interview(s) received, confidence {} ≥ {VALIDATE_CONFIDENCE}",
                record.current_confidence
            );
        }
    } else if current_state == StrategyState::Validate {
        if interview_count >= 2
            && record.current_confidence >= EXECUTE_CONFIDENCE
            && !has_positioning_issue
        {
            new_state = StrategyState::Execute;
            reason = format!(
                "{interview_count} interviews, confidence {} ≥ {EXECUTE_CONFIDENCE}, no positioning issues",
                record.current_confidence
            );
        } else if has_positioning_issue && interview_count < 2 {
            new_state = StrategyState::Explore;
            reason = "resume positioning issue detected".to_string();
        }
    }

    if new_state != current_state {
        record.strategy_state = new_state;
        if new_state == StrategyState::Reconsider {
            record.failed = true;
        }
        info!(from = %current_state, to = %new_state, %reason, "state transition");
        session
            .explanation_log
            .push(format!("State transition: {current_state} → {new_state}. Reason: {reason}"));
    }
}

/// Process a single outcome through the full loop: record, evaluate state,
/// re-evaluate on RECONSIDER, and summarize.
pub fn process_outcome(session: &mut AgentSession, outcome: Outcome) -> DomainResult<OutcomeReport> {
    record_outcome(session, outcome)?;
    evaluate_state(session);

    let mut strategy_changed = false;
    if session.strategy_state() == Some(StrategyState::Reconsider) {
        let old_strategy = session
            .current_strategy
            .as_ref()
            .map(|r| r.strategy)
            .ok_or(DomainError::NoActiveStrategy)?;
        reevaluation::re_evaluate(session);
        strategy_changed = session
            .current_strategy
            .as_ref()
            .is_some_and(|r| r.strategy != old_strategy);
    }

    let explanation = explainer::explain_short(session);

    Ok(OutcomeReport {
        strategy_changed,
        current_strategy: session.stage3_strategy.clone(),
        explanation,
        strategy_state: session.strategy_state(),
        session: session.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::bottleneck::{BottleneckRatings, BottleneckReport, Category, Severity};
    use crate::domain::models::evidence::EvidenceBundle;
    use crate::domain::models::strategy::{Strategy, StrategyDecision};

    fn session_with(strategy: Strategy, confidence: f64) -> AgentSession {
        AgentSession::initialize(
            EvidenceBundle::default(),
            BottleneckReport {
                implied_role: "Software Engineer".to_string(),
                bottlenecks: BottleneckRatings {
                    positioning: Severity::Strong,
                    evidence_depth: Severity::Weak,
                    experience_strength: Severity::Strong,
                    skill_alignment: Severity::Strong,
                    outcome_visibility: Severity::Strong,
                },
                dominant_issue: Some(Category::EvidenceDepth),
                justification: "test".to_string(),
            },
            StrategyDecision {
                strategy,
                action: "act".to_string(),
                confidence,
            },
        )
    }

    fn session_with_positioning_issue(strategy: Strategy, confidence: f64) -> AgentSession {
        let mut session = session_with(strategy, confidence);
        session.stage1_evidence = serde_json::from_value(serde_json::json!({
            "profile_signals": {
                "signals": {
                    "resume_positioning_issue": { "triggered": true }
                }
            }
        }))
        .unwrap();
        session
    }

    #[test]
    fn test_update_confidence_deltas_and_bounds() {
        assert_eq!(update_confidence(0.70, Outcome::Interview), 0.85);
        assert_eq!(update_confidence(0.70, Outcome::Rejected), 0.60);
        assert_eq!(update_confidence(0.70, Outcome::NoResponse), 0.62);
        // Ceiling and floor
        assert_eq!(update_confidence(0.90, Outcome::Interview), 0.95);
        assert_eq!(update_confidence(0.12, Outcome::Rejected), 0.10);
    }

    #[test]
    fn test_record_outcome_requires_active_strategy() {
        let mut session = session_with(Strategy::ResumeOptimization, 0.70);
        session.current_strategy = None;
        let err = record_outcome(&mut session, Outcome::Interview).unwrap_err();
        assert!(matches!(err, DomainError::NoActiveStrategy));
    }

    #[test]
    fn test_explore_to_validate_on_interview() {
        let mut session = session_with(Strategy::ResumeOptimization, 0.70);
        record_outcome(&mut session, Outcome::Interview).unwrap();
        evaluate_state(&mut session);
        assert_eq!(session.strategy_state(), Some(StrategyState::Validate));
        assert!(session
            .explanation_log
            .iter()
            .any(|l| l.contains("explore → validate")));
    }

    #[test]
    fn test_explore_stays_below_validate_confidence() {
        // 0.45 + 0.15 = 0.60 >= 0.55 would advance; start lower.
        let mut session = session_with(Strategy::RoleShift, 0.35);
        record_outcome(&mut session, Outcome::Interview).unwrap();
        evaluate_state(&mut session);
        // 0.50 < 0.55: stays in explore
        assert_eq!(session.strategy_state(), Some(StrategyState::Explore));
    }

    #[test]
    fn test_validate_to_execute_on_second_interview() {
        let mut session = session_with(Strategy::ResumeOptimization, 0.70);
        record_outcome(&mut session, Outcome::Interview).unwrap();
        evaluate_state(&mut session);
        record_outcome(&mut session, Outcome::Interview).unwrap();
        evaluate_state(&mut session);
        assert_eq!(session.strategy_state(), Some(StrategyState::Execute));
        let record = session.current_strategy.as_ref().unwrap();
        assert_eq!(record.current_confidence, 0.95);
    }

    #[test]
    fn test_positioning_issue_blocks_execute() {
        let mut session = session_with_positioning_issue(Strategy::ResumeOptimization, 0.70);
        record_outcome(&mut session, Outcome::Interview).unwrap();
        evaluate_state(&mut session);
        assert_eq!(session.strategy_state(), Some(StrategyState::Validate));
        record_outcome(&mut session, Outcome::Interview).unwrap();
        evaluate_state(&mut session);
        // Two interviews but the positioning issue holds it back.
        assert_ne!(session.strategy_state(), Some(StrategyState::Execute));
    }

    #[test]
    fn test_positioning_issue_returns_validate_to_explore() {
        let mut session = session_with_positioning_issue(Strategy::ResumeOptimization, 0.70);
        record_outcome(&mut session, Outcome::Interview).unwrap();
        evaluate_state(&mut session);
        assert_eq!(session.strategy_state(), Some(StrategyState::Validate));
        // One more evaluation with still < 2 interviews drops back.
        record_outcome(&mut session, Outcome::NoResponse).unwrap();
        evaluate_state(&mut session);
        assert_eq!(session.strategy_state(), Some(StrategyState::Explore));
    }

    #[test]
    fn test_confidence_collapse_triggers_reconsider() {
        let mut session = session_with(Strategy::RoleShift, 0.45);
        for _ in 0..2 {
            record_outcome(&mut session, Outcome::Rejected).unwrap();
            evaluate_state(&mut session);
        }
        // 0.45 -> 0.35 -> 0.25, below 0.30
        assert_eq!(session.strategy_state(), Some(StrategyState::Reconsider));
        assert!(session.current_strategy.as_ref().unwrap().failed);
    }

    #[test]
    fn test_negative_limit_triggers_reconsider() {
        let mut session = session_with(Strategy::HoldPosition, 0.90);
        for _ in 0..3 {
            record_outcome(&mut session, Outcome::NoResponse).unwrap();
            evaluate_state(&mut session);
        }
        // 0.90 -> 0.82 -> 0.74 -> 0.66, above threshold, but 3 negatives
        assert_eq!(session.strategy_state(), Some(StrategyState::Reconsider));
    }

    #[test]
    fn test_execute_is_locked_against_forward_transitions() {
        let mut session = session_with(Strategy::ResumeOptimization, 0.70);
        for _ in 0..2 {
            record_outcome(&mut session, Outcome::Interview).unwrap();
            evaluate_state(&mut session);
        }
        assert_eq!(session.strategy_state(), Some(StrategyState::Execute));
        // Further positive outcomes do not move it.
        record_outcome(&mut session, Outcome::Interview).unwrap();
        evaluate_state(&mut session);
        assert_eq!(session.strategy_state(), Some(StrategyState::Execute));
    }

    #[test]
    fn test_execute_still_fails_on_collapse() {
        let mut session = session_with(Strategy::ResumeOptimization, 0.70);
        for _ in 0..2 {
            record_outcome(&mut session, Outcome::Interview).unwrap();
            evaluate_state(&mut session);
        }
        assert_eq!(session.strategy_state(), Some(StrategyState::Execute));
        for _ in 0..3 {
            record_outcome(&mut session, Outcome::Rejected).unwrap();
        }
        evaluate_state(&mut session);
        assert_eq!(session.strategy_state(), Some(StrategyState::Reconsider));
    }

    #[test]
    fn test_process_outcome_reports_state() {
        let mut session = session_with(Strategy::ResumeOptimization, 0.70);
        let report = process_outcome(&mut session, Outcome::Interview).unwrap();
        assert!(!report.strategy_changed);
        assert_eq!(report.strategy_state, Some(StrategyState::Validate));
        assert!(report.explanation.contains("ResumeOptimization"));
    }

    #[test]
    fn test_process_outcome_replaces_failed_strategy() {
        let mut session = session_with(Strategy::SkillGapPatch, 0.45);
        // 0.45 -> 0.35 -> 0.25: second rejection trips the threshold.
        process_outcome(&mut session, Outcome::Rejected).unwrap();
        let report = process_outcome(&mut session, Outcome::Rejected).unwrap();
        assert!(report.strategy_changed);
        assert_eq!(report.strategy_state, Some(StrategyState::Explore));
        assert_eq!(session.strategy_history.len(), 1);
        assert!(session.strategy_history[0].failed);
        assert_eq!(session.loop_iteration, 1);
    }
}
