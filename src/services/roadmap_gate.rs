//! Roadmap eligibility gate and generation.
//!
//! Roadmaps are earned, not automatic: generation is allowed only when the
//! active strategy is in EXECUTE. Blocked states return a structured
//! eligibility result with a reason and a recommendation, never an error.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::roadmap::{
    ActionCategory, ActionPriority, Roadmap, RoadmapAction, RoadmapGoal, RoadmapMilestone,
};
use crate::domain::models::session::AgentSession;
use crate::domain::models::strategy::{Strategy, StrategyState};

/// Result of the eligibility check. Serialized as-is on the blocked path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    pub eligible: bool,
    pub reason: String,
    pub current_state: Option<StrategyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Check whether roadmap generation is allowed for this session.
///
/// The gate: only EXECUTE passes. Every blocked state carries a reason and
/// a concrete recommendation for unlocking it.
pub fn check_eligibility(session: &AgentSession) -> Eligibility {
    let Some(record) = &session.current_strategy else {
        return Eligibility {
            eligible: false,
            reason: "No active strategy found".to_string(),
            current_state: None,
            recommendation: None,
        };
    };

    let state = record.strategy_state;
    let strategy = record.strategy;
    let confidence = record.current_confidence;

    match state {
        StrategyState::Execute => Eligibility {
            eligible: true,
            reason: format!(
                "Strategy '{strategy}' in EXECUTE state (confidence: {confidence})"
            ),
            current_state: Some(state),
            recommendation: None,
        },
        StrategyState::Explore => Eligibility {
            eligible: false,
            reason: format!(
                "Strategy '{strategy}' is in EXPLORE state. \
                 Need at least 1 interview to validate before generating roadmap."
            ),
            current_state: Some(state),
            recommendation: Some(
                "Continue applying to roles and track outcomes. Roadmap will unlock after validation."
                    .to_string(),
            ),
        },
        StrategyState::Validate => Eligibility {
            eligible: false,
            reason: format!(
                "Strategy '{strategy}' is in VALIDATE state. \
                 Need 2+ interviews and confidence ≥ 0.65 to execute."
            ),
            current_state: Some(state),
            recommendation: Some(
                "Strategy is showing promise! Get more interviews to lock it in for execution."
                    .to_string(),
            ),
        },
        StrategyState::Reconsider => Eligibility {
            eligible: false,
            reason: format!(
                "Strategy '{strategy}' is in RECONSIDER state (failed). \
                 Cannot generate roadmap for failed strategy."
            ),
            current_state: Some(state),
            recommendation: Some(
                "System is re-evaluating strategy. Wait for new strategy selection.".to_string(),
            ),
        },
    }
}

/// Generate a roadmap for the session's active strategy.
///
/// Returns the blocked eligibility result when the gate does not pass.
/// `now` is injected so generation stays a pure function of its inputs.
pub fn generate(session: &AgentSession, now: DateTime<Utc>) -> Result<Roadmap, Eligibility> {
    let eligibility = check_eligibility(session);
    if !eligibility.eligible {
        info!(reason = %eligibility.reason, "roadmap generation blocked");
        return Err(eligibility);
    }

    // The gate only passes with an active record in place.
    let Some(record) = &session.current_strategy else {
        return Err(eligibility);
    };
    let roadmap_id = Uuid::new_v4();
    let template = template_for(record.strategy);

    let goals = template
        .goals
        .iter()
        .enumerate()
        .map(|(i, g)| RoadmapGoal {
            goal_id: format!("{roadmap_id}-goal-{}", i + 1),
            title: g.title.to_string(),
            description: g.description.to_string(),
            measurable: g.measurable.to_string(),
        })
        .collect();

    let milestones = template
        .milestones
        .iter()
        .enumerate()
        .map(|(i, m)| RoadmapMilestone {
            milestone_id: format!("{roadmap_id}-milestone-{}", i + 1),
            title: m.title.to_string(),
            description: m.description.to_string(),
            target_days: m.target_days,
            success_criteria: m.criteria.iter().map(ToString::to_string).collect(),
        })
        .collect();

    let actions = template
        .actions
        .iter()
        .enumerate()
        .map(|(i, a)| RoadmapAction {
            action_id: format!("{roadmap_id}-action-{}", i + 1),
            title: a.title.to_string(),
            description: a.description.to_string(),
            deadline_days: a.deadline_days,
            priority: a.priority,
            category: a.category,
            completed: false,
        })
        .collect();

    info!(strategy = %record.strategy, %roadmap_id, "roadmap generated");

    Ok(Roadmap {
        roadmap_id,
        strategy: record.strategy,
        phase: "execute".to_string(),
        created_at: now,
        strategy_confidence: record.current_confidence,
        goals,
        milestones,
        actions,
        review_after_days: template.review_after_days,
        estimated_completion_days: template.estimated_completion_days,
        version: 1,
        strategy_version: Roadmap::version_tag(record, now),
        invalidated: false,
        invalidation_reason: None,
    })
}

/// Invalidate a roadmap whose strategy record has moved on.
///
/// A roadmap goes stale when the strategy name changed, the strategy entered
/// RECONSIDER, or the strategy left EXECUTE. Already-invalidated roadmaps
/// are untouched.
pub fn invalidate_if_stale(roadmap: &mut Roadmap, session: &AgentSession) {
    if roadmap.invalidated {
        return;
    }

    let Some(record) = &session.current_strategy else {
        roadmap.invalidate("Strategy changed: no active strategy remains");
        return;
    };

    if roadmap.strategy != record.strategy {
        roadmap.invalidate(format!(
            "Strategy changed from {} to {}",
            roadmap.strategy, record.strategy
        ));
    } else if record.strategy_state == StrategyState::Reconsider {
        roadmap.invalidate("Strategy entered RECONSIDER state (failed)");
    } else if record.strategy_state != StrategyState::Execute {
        roadmap.invalidate(format!(
            "Strategy no longer in EXECUTE state (current: {})",
            record.strategy_state
        ));
    }
}

// Static template data. Each strategy gets a fixed plan; ids and timestamps
// are filled in at generation time.

struct GoalTemplate {
    title: &'static str,
    description: &'static str,
    measurable: &'static str,
}

struct MilestoneTemplate {
    title: &'static str,
    description: &'static str,
    target_days: u32,
    criteria: &'static [&'static str],
}

struct ActionTemplate {
    title: &'static str,
    description: &'static str,
    deadline_days: u32,
    priority: ActionPriority,
    category: ActionCategory,
}

struct RoadmapTemplate {
    goals: &'static [GoalTemplate],
    milestones: &'static [MilestoneTemplate],
    actions: &'static [ActionTemplate],
    review_after_days: u32,
    estimated_completion_days: u32,
}

const fn template_for(strategy: Strategy) -> &'static RoadmapTemplate {
    match strategy {
        Strategy::ResumeOptimization => &RESUME_OPTIMIZATION_TEMPLATE,
        Strategy::SkillGapPatch => &SKILL_GAP_PATCH_TEMPLATE,
        Strategy::RoleShift => &ROLE_SHIFT_TEMPLATE,
        Strategy::HoldPosition => &HOLD_POSITION_TEMPLATE,
    }
}

static RESUME_OPTIMIZATION_TEMPLATE: RoadmapTemplate = RoadmapTemplate {
    goals: &[
        GoalTemplate {
            title: "Strengthen Resume Evidence",
            description: "Transform resume to showcase applied skills with concrete outcomes",
            measurable: "All projects include problem, solution, and quantifiable results",
        },
        GoalTemplate {
            title: "Optimize for Target Role",
            description: "Position resume clearly for intended role",
            measurable: "Resume passes ATS screening for target roles with 80%+ match",
        },
    ],
    milestones: &[
        MilestoneTemplate {
            title: "Resume Draft Complete",
            description: "First revision with improved evidence and structure",
            target_days: 7,
            criteria: &[
                "All experience entries have quantifiable outcomes",
                "Projects section shows problem-solution-impact",
                "Skills linked to specific evidence",
            ],
        },
        MilestoneTemplate {
            title: "Resume Validated",
            description: "Resume reviewed and optimized for target roles",
            target_days: 14,
            criteria: &[
                "ATS compatibility verified",
                "Peer or professional review completed",
                "Tailored versions for top 3 target companies",
            ],
        },
    ],
    actions: &[
        ActionTemplate {
            title: "Rewrite Primary Project Description",
            description: "Add problem statement, approach, tools used, and quantifiable outcome",
            deadline_days: 3,
            priority: ActionPriority::Critical,
            category: ActionCategory::Resume,
        },
        ActionTemplate {
            title: "Add Metrics to Experience Entries",
            description: "Quantify at least 2 achievements per role with specific numbers (%, users, time saved, revenue impact)",
            deadline_days: 5,
            priority: ActionPriority::Critical,
            category: ActionCategory::Resume,
        },
        ActionTemplate {
            title: "Create Skill-Evidence Matrix",
            description: "Link each listed skill to specific project or experience where applied. Remove skills without evidence.",
            deadline_days: 4,
            priority: ActionPriority::High,
            category: ActionCategory::Resume,
        },
        ActionTemplate {
            title: "Run ATS Compatibility Check",
            description: "Verify resume passes ATS screening for target job descriptions (aim for 75%+ match)",
            deadline_days: 7,
            priority: ActionPriority::High,
            category: ActionCategory::Preparation,
        },
        ActionTemplate {
            title: "Get Resume Reviewed",
            description: "Submit to resume review service or experienced peer in target industry. Incorporate feedback.",
            deadline_days: 10,
            priority: ActionPriority::Medium,
            category: ActionCategory::Preparation,
        },
        ActionTemplate {
            title: "Create Tailored Versions",
            description: "Develop 3 targeted resume versions for top priority companies/roles",
            deadline_days: 12,
            priority: ActionPriority::High,
            category: ActionCategory::Application,
        },
        ActionTemplate {
            title: "Begin Targeted Applications",
            description: "Apply to 10 well-matched roles with optimized resume",
            deadline_days: 14,
            priority: ActionPriority::Critical,
            category: ActionCategory::Application,
        },
    ],
    review_after_days: 14,
    estimated_completion_days: 21,
};

static SKILL_GAP_PATCH_TEMPLATE: RoadmapTemplate = RoadmapTemplate {
    goals: &[
        GoalTemplate {
            title: "Acquire Target Skill",
            description: "Master one critical skill identified as gap for target role",
            measurable: "Complete structured learning + build applied project demonstrating skill",
        },
        GoalTemplate {
            title: "Create Verifiable Evidence",
            description: "Build portfolio project that proves skill application",
            measurable: "Project deployed and documented on GitHub with README",
        },
    ],
    milestones: &[
        MilestoneTemplate {
            title: "Skill Foundation Complete",
            description: "Completed structured learning for target skill",
            target_days: 14,
            criteria: &[
                "Course or certification completed",
                "Core concepts documented in notes",
                "Practice exercises completed",
            ],
        },
        MilestoneTemplate {
            title: "Applied Project Deployed",
            description: "Project demonstrating skill in real-world context",
            target_days: 28,
            criteria: &[
                "Project solves real problem",
                "Code on GitHub with documentation",
                "Project deployed and accessible",
            ],
        },
    ],
    actions: &[
        ActionTemplate {
            title: "Identify Top Missing Skill",
            description: "Based on target role analysis, confirm the #1 skill to acquire",
            deadline_days: 2,
            priority: ActionPriority::Critical,
            category: ActionCategory::Skill,
        },
        ActionTemplate {
            title: "Enroll in Focused Course",
            description: "Start structured learning for identified skill. Complete 50%.",
            deadline_days: 7,
            priority: ActionPriority::Critical,
            category: ActionCategory::Skill,
        },
        ActionTemplate {
            title: "Complete Course/Certification",
            description: "Finish structured learning and earn certificate if available. Add to resume.",
            deadline_days: 14,
            priority: ActionPriority::Critical,
            category: ActionCategory::Skill,
        },
        ActionTemplate {
            title: "Design Applied Project",
            description: "Plan a project that uses new skill to solve real problem. Define scope, tech stack, and outcome.",
            deadline_days: 16,
            priority: ActionPriority::High,
            category: ActionCategory::Skill,
        },
        ActionTemplate {
            title: "Build Project (Phase 1)",
            description: "Implement core functionality. Aim for minimum viable product.",
            deadline_days: 24,
            priority: ActionPriority::Critical,
            category: ActionCategory::Skill,
        },
        ActionTemplate {
            title: "Deploy and Document Project",
            description: "Deploy project and write comprehensive README with screenshots, tech stack, and learnings.",
            deadline_days: 28,
            priority: ActionPriority::Critical,
            category: ActionCategory::Skill,
        },
        ActionTemplate {
            title: "Update Resume with New Skill",
            description: "Add skill to skills section. Add project to projects section with impact statement.",
            deadline_days: 30,
            priority: ActionPriority::High,
            category: ActionCategory::Resume,
        },
        ActionTemplate {
            title: "Apply to Roles Requiring Skill",
            description: "Target 15 applications for roles where this skill is listed as required/preferred",
            deadline_days: 35,
            priority: ActionPriority::Critical,
            category: ActionCategory::Application,
        },
    ],
    review_after_days: 21,
    estimated_completion_days: 42,
};

static ROLE_SHIFT_TEMPLATE: RoadmapTemplate = RoadmapTemplate {
    goals: &[
        GoalTemplate {
            title: "Reframe Career Narrative",
            description: "Position existing experience for new target role type",
            measurable: "Resume and profiles consistently communicate new target role",
        },
        GoalTemplate {
            title: "Target Role-Aligned Opportunities",
            description: "Apply to roles that value project experience over formal employment",
            measurable: "50% of applications to entry-level or project-focused roles",
        },
    ],
    milestones: &[
        MilestoneTemplate {
            title: "Narrative Repositioned",
            description: "All materials reflect new target role positioning",
            target_days: 7,
            criteria: &[
                "Resume headline updated to target role",
                "Professional profile summary rewritten",
                "Project descriptions emphasize relevant skills",
            ],
        },
        MilestoneTemplate {
            title: "Application Campaign Launched",
            description: "Actively applying to role-aligned positions",
            target_days: 14,
            criteria: &[
                "20+ applications submitted",
                "All to entry-level or project-friendly roles",
                "Cover letters customized per role",
            ],
        },
    ],
    actions: &[
        ActionTemplate {
            title: "Define New Target Role",
            description: "Identify specific role titles that better match current experience profile",
            deadline_days: 2,
            priority: ActionPriority::Critical,
            category: ActionCategory::Preparation,
        },
        ActionTemplate {
            title: "Rewrite Resume Headline",
            description: "Change resume headline/summary to reflect new target role. Emphasize transferable skills.",
            deadline_days: 4,
            priority: ActionPriority::Critical,
            category: ActionCategory::Resume,
        },
        ActionTemplate {
            title: "Reframe Project Experience",
            description: "Rewrite project descriptions to emphasize deliverables, stakeholder impact, and professional-level outcomes",
            deadline_days: 5,
            priority: ActionPriority::High,
            category: ActionCategory::Resume,
        },
        ActionTemplate {
            title: "Update Professional Profiles",
            description: "Rewrite online profile headline and summary to match new positioning",
            deadline_days: 6,
            priority: ActionPriority::High,
            category: ActionCategory::Preparation,
        },
        ActionTemplate {
            title: "Research Target Companies",
            description: "Identify 30 companies known for hiring project-based candidates",
            deadline_days: 7,
            priority: ActionPriority::High,
            category: ActionCategory::Application,
        },
        ActionTemplate {
            title: "Customize Cover Letter Template",
            description: "Create cover letter addressing career transition narrative. Emphasize project work as professional experience.",
            deadline_days: 8,
            priority: ActionPriority::Medium,
            category: ActionCategory::Application,
        },
        ActionTemplate {
            title: "Launch Application Campaign",
            description: "Apply to 20 entry-level roles aligned with repositioned profile. Track responses.",
            deadline_days: 14,
            priority: ActionPriority::Critical,
            category: ActionCategory::Application,
        },
    ],
    review_after_days: 14,
    estimated_completion_days: 21,
};

static HOLD_POSITION_TEMPLATE: RoadmapTemplate = RoadmapTemplate {
    goals: &[
        GoalTemplate {
            title: "Maximize Application Quality",
            description: "Maintain strong resume positioning while increasing application volume",
            measurable: "30+ targeted applications in 2 weeks",
        },
        GoalTemplate {
            title: "Optimize Interview Preparation",
            description: "Prepare for technical and behavioral interviews",
            measurable: "Practice sessions completed for both interview types",
        },
    ],
    milestones: &[
        MilestoneTemplate {
            title: "Application Pipeline Established",
            description: "Consistent application cadence with quality targeting",
            target_days: 7,
            criteria: &[
                "15+ applications submitted",
                "Job tracker established",
                "Follow-up system in place",
            ],
        },
        MilestoneTemplate {
            title: "Interview-Ready",
            description: "Prepared for both technical and behavioral interviews",
            target_days: 14,
            criteria: &[
                "Technical practice completed",
                "Behavioral stories prepared",
                "Mock interview conducted",
            ],
        },
    ],
    actions: &[
        ActionTemplate {
            title: "Set Up Job Tracker",
            description: "Track applications, responses, and follow-ups: company, role, date applied, and status",
            deadline_days: 1,
            priority: ActionPriority::High,
            category: ActionCategory::Preparation,
        },
        ActionTemplate {
            title: "Apply to 15 Target Roles",
            description: "Week 1: Submit 15 applications to well-matched positions. Customize each application.",
            deadline_days: 7,
            priority: ActionPriority::Critical,
            category: ActionCategory::Application,
        },
        ActionTemplate {
            title: "Prepare Technical Interview",
            description: "Practice coding problems, focusing on easy/medium difficulty. Complete 10 problems.",
            deadline_days: 10,
            priority: ActionPriority::High,
            category: ActionCategory::Preparation,
        },
        ActionTemplate {
            title: "Prepare Behavioral Stories",
            description: "Document 5 STAR-format stories covering: leadership, conflict, failure, success, teamwork",
            deadline_days: 8,
            priority: ActionPriority::High,
            category: ActionCategory::Preparation,
        },
        ActionTemplate {
            title: "Apply to 15 More Roles",
            description: "Week 2: Submit 15 additional applications. Continue customization and tracking.",
            deadline_days: 14,
            priority: ActionPriority::Critical,
            category: ActionCategory::Application,
        },
        ActionTemplate {
            title: "Conduct Mock Interview",
            description: "Schedule mock interview with peer or practice platform. Cover both technical and behavioral.",
            deadline_days: 12,
            priority: ActionPriority::Medium,
            category: ActionCategory::Preparation,
        },
        ActionTemplate {
            title: "Expand Professional Network",
            description: "Engage with target companies: connect with employees and join relevant groups",
            deadline_days: 14,
            priority: ActionPriority::Medium,
            category: ActionCategory::Networking,
        },
    ],
    review_after_days: 14,
    estimated_completion_days: 14,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::bottleneck::{BottleneckRatings, BottleneckReport};
    use crate::domain::models::evidence::EvidenceBundle;
    use crate::domain::models::strategy::StrategyDecision;

    fn session_in_state(state: StrategyState) -> AgentSession {
        let mut session = AgentSession::initialize(
            EvidenceBundle::default(),
            BottleneckReport {
                implied_role: "Software Engineer".to_string(),
                bottlenecks: BottleneckRatings::default(),
                dominant_issue: None,
                justification: "test".to_string(),
            },
            StrategyDecision {
                strategy: Strategy::ResumeOptimization,
                action: "act".to_string(),
                confidence: 0.70,
            },
        );
        let record = session.current_strategy.as_mut().unwrap();
        record.strategy_state = state;
        record.current_confidence = 0.85;
        session
    }

    #[test]
    fn test_gate_blocks_explore() {
        let eligibility = check_eligibility(&session_in_state(StrategyState::Explore));
        assert!(!eligibility.eligible);
        assert!(eligibility.reason.contains("EXPLORE"));
        assert!(eligibility.recommendation.is_some());
    }

    #[test]
    fn test_gate_blocks_validate() {
        let eligibility = check_eligibility(&session_in_state(StrategyState::Validate));
        assert!(!eligibility.eligible);
        assert!(eligibility.reason.contains("2+ interviews"));
    }

    #[test]
    fn test_gate_blocks_reconsider() {
        let eligibility = check_eligibility(&session_in_state(StrategyState::Reconsider));
        assert!(!eligibility.eligible);
        assert!(eligibility.reason.contains("failed"));
    }

    #[test]
    fn test_gate_blocks_missing_strategy() {
        let mut session = session_in_state(StrategyState::Execute);
        session.current_strategy = None;
        let eligibility = check_eligibility(&session);
        assert!(!eligibility.eligible);
        assert_eq!(eligibility.current_state, None);
    }

    #[test]
    fn test_gate_allows_execute() {
        let eligibility = check_eligibility(&session_in_state(StrategyState::Execute));
        assert!(eligibility.eligible);
        assert_eq!(eligibility.current_state, Some(StrategyState::Execute));
    }

    #[test]
    fn test_generate_in_execute_state() {
        let session = session_in_state(StrategyState::Execute);
        let now = Utc::now();
        let roadmap = generate(&session, now).unwrap();
        assert_eq!(roadmap.strategy, Strategy::ResumeOptimization);
        assert_eq!(roadmap.phase, "execute");
        assert_eq!(roadmap.strategy_confidence, 0.85);
        assert_eq!(roadmap.goals.len(), 2);
        assert_eq!(roadmap.milestones.len(), 2);
        assert_eq!(roadmap.actions.len(), 7);
        assert!(!roadmap.invalidated);
        assert!(roadmap.strategy_version.starts_with("ResumeOptimization-0.7-"));
    }

    #[test]
    fn test_generate_blocked_returns_eligibility() {
        let session = session_in_state(StrategyState::Validate);
        let err = generate(&session, Utc::now()).unwrap_err();
        assert!(!err.eligible);
        assert_eq!(err.current_state, Some(StrategyState::Validate));
    }

    #[test]
    fn test_each_strategy_has_a_template() {
        for strategy in [
            Strategy::ResumeOptimization,
            Strategy::SkillGapPatch,
            Strategy::RoleShift,
            Strategy::HoldPosition,
        ] {
            let mut session = session_in_state(StrategyState::Execute);
            session.current_strategy.as_mut().unwrap().strategy = strategy;
            let roadmap = generate(&session, Utc::now()).unwrap();
            assert_eq!(roadmap.strategy, strategy);
            assert!(!roadmap.actions.is_empty());
            assert!(roadmap.actions.iter().all(|a| a.deadline_days > 0));
        }
    }

    #[test]
    fn test_action_ids_carry_roadmap_id() {
        let session = session_in_state(StrategyState::Execute);
        let roadmap = generate(&session, Utc::now()).unwrap();
        let prefix = roadmap.roadmap_id.to_string();
        assert!(roadmap.actions[0].action_id.starts_with(&prefix));
        assert!(roadmap.goals[0].goal_id.ends_with("-goal-1"));
    }

    #[test]
    fn test_invalidate_on_strategy_change() {
        let session = session_in_state(StrategyState::Execute);
        let mut roadmap = generate(&session, Utc::now()).unwrap();

        let mut changed = session.clone();
        changed.current_strategy.as_mut().unwrap().strategy = Strategy::SkillGapPatch;
        invalidate_if_stale(&mut roadmap, &changed);
        assert!(roadmap.invalidated);
        assert!(roadmap
            .invalidation_reason
            .as_deref()
            .unwrap()
            .contains("Strategy changed from ResumeOptimization to SkillGapPatch"));
    }

    #[test]
    fn test_invalidate_on_reconsider() {
        let session = session_in_state(StrategyState::Execute);
        let mut roadmap = generate(&session, Utc::now()).unwrap();

        let mut failed = session.clone();
        failed.current_strategy.as_mut().unwrap().strategy_state = StrategyState::Reconsider;
        invalidate_if_stale(&mut roadmap, &failed);
        assert!(roadmap.invalidated);
        assert!(roadmap
            .invalidation_reason
            .as_deref()
            .unwrap()
            .contains("RECONSIDER"));
    }

    #[test]
    fn test_invalidate_on_leaving_execute() {
        let session = session_in_state(StrategyState::Execute);
        let mut roadmap = generate(&session, Utc::now()).unwrap();

        let mut regressed = session.clone();
        regressed.current_strategy.as_mut().unwrap().strategy_state = StrategyState::Validate;
        invalidate_if_stale(&mut roadmap, &regressed);
        assert!(roadmap.invalidated);
        assert!(roadmap
            .invalidation_reason
            .as_deref()
            .unwrap()
            .contains("no longer in EXECUTE"));
    }

    #[test]
    fn test_valid_roadmap_stays_valid() {
        let session = session_in_state(StrategyState::Execute);
        let mut roadmap = generate(&session, Utc::now()).unwrap();
        invalidate_if_stale(&mut roadmap, &session);
        assert!(!roadmap.invalidated);
    }
}
