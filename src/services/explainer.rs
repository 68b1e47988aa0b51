//! Plain-English narration of the agent's decision history.
//!
//! Built entirely from the session document; produces no side effects and
//! never mutates the session.

use crate::domain::models::session::AgentSession;
use crate::domain::models::strategy::{StrategyRecord, StrategyState};

/// Full decision narrative: why the strategy was chosen, what outcomes
/// occurred, how the strategy changed, and where the session stands now.
pub fn explain(session: &AgentSession) -> String {
    let mut lines: Vec<String> = Vec::new();

    let implied_role = &session.stage2_bottleneck.implied_role;
    let dominant = session.stage2_bottleneck.dominant_issue;
    let justification = &session.stage2_bottleneck.justification;

    // Original selection
    if let Some(original) = session.strategy_history.first() {
        lines.push(format!(
            "The agent initially selected '{}' strategy for the implied role of {implied_role}.",
            original.strategy
        ));
        if let Some(issue) = dominant {
            lines.push(format!(
                "This was based on the dominant issue: {issue}. {justification}"
            ));
        }
    } else if let Some(current) = &session.current_strategy {
        lines.push(format!(
            "The agent selected '{}' strategy for the implied role of {implied_role}.",
            current.strategy
        ));
        if let Some(issue) = dominant {
            lines.push(format!("Dominant issue identified: {issue}."));
        }
    }

    // Outcome history across every strategy attempt
    let all_records: Vec<&StrategyRecord> = session
        .strategy_history
        .iter()
        .chain(session.current_strategy.as_ref())
        .collect();

    for record in &all_records {
        if record.outcomes.is_empty() {
            continue;
        }
        let summary = record
            .outcomes
            .iter()
            .map(|o| o.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "Strategy '{}' received outcomes: [{summary}]. \
             Confidence adjusted from {} to {}.",
            record.strategy, record.initial_confidence, record.current_confidence
        ));
        if record.failed {
            lines.push("Strategy was marked as failed.".to_string());
        }
    }

    // Strategy changes
    if session.strategy_history.is_empty() {
        if session
            .current_strategy
            .as_ref()
            .is_some_and(|r| !r.failed)
        {
            lines.push("No strategy changes were required.".to_string());
        }
    } else {
        lines.push(format!(
            "The agent performed {} strategy re-evaluation(s).",
            session.loop_iteration
        ));

        let mut changes: Vec<String> = session
            .strategy_history
            .windows(2)
            .map(|pair| format!("'{}' → '{}'", pair[0].strategy, pair[1].strategy))
            .collect();
        if let (Some(last), Some(current)) =
            (session.strategy_history.last(), &session.current_strategy)
        {
            changes.push(format!("'{}' → '{}'", last.strategy, current.strategy));
        }
        if !changes.is_empty() {
            lines.push(format!("Strategy transitions: {}.", changes.join(", ")));
        }
    }

    // Current state
    if let Some(current) = &session.current_strategy {
        if current.failed || current.strategy_state == StrategyState::Reconsider {
            lines.push(format!(
                "Current strategy '{}' has failed (state: {}). Re-evaluation recommended.",
                current.strategy, current.strategy_state
            ));
        } else {
            lines.push(format!(
                "Current strategy: '{}' with confidence {}. State: {}.",
                current.strategy, current.current_confidence, current.strategy_state
            ));
            lines.push(format!("Action: {}", session.stage3_strategy.action));
        }
    }

    lines.join(" ")
}

/// One-line summary suitable for UI display.
pub fn explain_short(session: &AgentSession) -> String {
    let Some(current) = &session.current_strategy else {
        return "No active strategy.".to_string();
    };

    let dominant = session
        .stage2_bottleneck
        .dominant_issue
        .map_or_else(|| "identified issues".to_string(), |c| c.to_string());

    if session.loop_iteration == 0 {
        format!(
            "Selected {} due to {dominant}. Confidence: {}. State: {}.",
            current.strategy, current.current_confidence, current.strategy_state
        )
    } else {
        let previous = session
            .strategy_history
            .last()
            .map_or_else(|| "previous".to_string(), |r| r.strategy.to_string());
        format!(
            "Shifted from {previous} to {} after {} re-evaluation(s). \
             Confidence: {}. State: {}.",
            current.strategy,
            session.loop_iteration,
            current.current_confidence,
            current.strategy_state
        )
    }
}
