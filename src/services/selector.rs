//! Strategy selector: maps a diagnosis to exactly one strategy, one
//! concrete action, and one conservative confidence estimate.
//!
//! No alternatives and no hedging: the output is a single actionable
//! commitment. Routing, actions, and confidence arithmetic are all fixed
//! tables, so the same report always produces the same decision.

use tracing::debug;

use crate::domain::models::bottleneck::{BottleneckReport, Category, Severity};
use crate::domain::models::evidence::SectionSignals;
use crate::domain::models::strategy::{Strategy, StrategyDecision};

/// Confidence floor and ceiling for any selected strategy.
pub const CONFIDENCE_MIN: f64 = 0.20;
pub const CONFIDENCE_MAX: f64 = 0.95;

/// Penalty per additional non-strong category beyond the dominant one.
const OTHER_ISSUE_PENALTY: f64 = 0.05;

/// Run stage-3 selection over a diagnosis.
pub fn select(report: &BottleneckReport, signals: &SectionSignals) -> StrategyDecision {
    let strategy = route(report, signals);
    let action = action_for(strategy, report);
    let confidence = calculate_confidence(strategy, report);

    debug!(
        strategy = %strategy,
        confidence,
        "strategy selected"
    );

    StrategyDecision {
        strategy,
        action,
        confidence,
    }
}

/// Route the dominant issue to a strategy.
fn route(report: &BottleneckReport, signals: &SectionSignals) -> Strategy {
    let Some(dominant) = report.dominant_issue else {
        return Strategy::HoldPosition;
    };

    match dominant {
        Category::EvidenceDepth | Category::Positioning | Category::OutcomeVisibility => {
            Strategy::ResumeOptimization
        }
        Category::SkillAlignment => Strategy::SkillGapPatch,
        Category::ExperienceStrength => {
            // No experience signals at all: a role pivot beats polishing.
            if !signals.has_internship && !signals.has_projects {
                return Strategy::RoleShift;
            }
            if report.bottlenecks.get(Category::ExperienceStrength) == Severity::Missing {
                Strategy::RoleShift
            } else {
                Strategy::ResumeOptimization
            }
        }
    }
}

/// Pick the single concrete action for a (strategy, dominant issue, severity)
/// combination. Falls back per strategy when no specific template applies.
fn action_for(strategy: Strategy, report: &BottleneckReport) -> String {
    let Some(dominant) = report.dominant_issue else {
        return "Maintain current resume positioning and proceed to application phase."
            .to_string();
    };

    let severity = report.bottlenecks.get(dominant);
    let specific = match (strategy, dominant, severity) {
        (Strategy::ResumeOptimization, Category::EvidenceDepth, Severity::Missing) => Some(
            "Add a Projects section with one completed project including problem, solution, and measurable result.",
        ),
        (Strategy::ResumeOptimization, Category::EvidenceDepth, _) => Some(
            "Rewrite the primary project description to include problem statement, approach, tools used, and quantifiable outcome.",
        ),
        (Strategy::ResumeOptimization, Category::Positioning, Severity::Missing) => Some(
            "Create skill-evidence links by adding brief descriptions of how each skill was used in projects or coursework.",
        ),
        (Strategy::ResumeOptimization, Category::Positioning, _) => Some(
            "Add context to top 3 listed skills by linking each to a specific project or experience where it was applied.",
        ),
        (Strategy::ResumeOptimization, Category::OutcomeVisibility, Severity::Missing) => Some(
            "Quantify one achievement in the experience or project section with a specific number or percentage.",
        ),
        (Strategy::ResumeOptimization, Category::OutcomeVisibility, _) => Some(
            "Add metrics to the primary project or experience entry (e.g., performance improvement %, users served, data processed).",
        ),
        (Strategy::SkillGapPatch, Category::SkillAlignment, Severity::Missing) => Some(
            "Complete one foundational skill course for the target role and add the credential to the resume.",
        ),
        (Strategy::SkillGapPatch, Category::SkillAlignment, _) => Some(
            "Identify the top missing primary skill for the target role and add it through a focused micro-project or certification.",
        ),
        (Strategy::RoleShift, Category::ExperienceStrength, Severity::Missing) => Some(
            "Pivot target role to one that values project-based evidence over formal work experience.",
        ),
        (Strategy::RoleShift, Category::ExperienceStrength, _) => Some(
            "Reframe existing project work as professional experience by emphasizing deliverables and stakeholder impact.",
        ),
        _ => None,
    };

    specific.map_or_else(|| fallback_action(strategy).to_string(), ToString::to_string)
}

fn fallback_action(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::ResumeOptimization => {
            "Restructure the resume to highlight evidence of applied skills in project and experience sections."
        }
        Strategy::SkillGapPatch => {
            "Add one in-demand skill for the target role through a verifiable project or credential."
        }
        Strategy::RoleShift => "Adjust target role to better align with current evidence profile.",
        Strategy::HoldPosition => "Proceed with current resume positioning.",
    }
}

const fn base_confidence(strategy: Strategy) -> f64 {
    match strategy {
        Strategy::ResumeOptimization => 0.70,
        Strategy::SkillGapPatch => 0.55,
        Strategy::RoleShift => 0.45,
        Strategy::HoldPosition => 0.85,
    }
}

const fn severity_adjustment(severity: Severity) -> f64 {
    match severity {
        Severity::Strong => 0.10,
        Severity::Weak => 0.00,
        Severity::Missing => -0.10,
    }
}

/// Conservative confidence estimate for the selected strategy.
///
/// base + severity adjustment − 0.05 per other non-strong category,
/// clamped to [0.20, 0.95] and rounded to two decimals. A report with no
/// dominant issue short-circuits to min(0.90, base + 0.05).
pub fn calculate_confidence(strategy: Strategy, report: &BottleneckReport) -> f64 {
    let base = base_confidence(strategy);

    let Some(dominant) = report.dominant_issue else {
        return (f64::min(0.90, base + 0.05) * 100.0).round() / 100.0;
    };

    let adjustment = severity_adjustment(report.bottlenecks.get(dominant));
    let other_penalty = report.bottlenecks.other_issue_count(dominant) as f64 * OTHER_ISSUE_PENALTY;

    let confidence = base + adjustment - other_penalty;
    (confidence.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX) * 100.0).round() / 100.0
}
