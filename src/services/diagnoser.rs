//! Bottleneck diagnoser: rates the five weakness categories and selects
//! exactly one dominant issue.
//!
//! All thresholds and skill tables are fixed data; the diagnosis is a
//! deterministic function of the evidence bundle. Malformed or empty input
//! degrades to the default role and missing ratings rather than erroring.

use tracing::debug;

use crate::domain::models::bottleneck::{
    BottleneckRatings, BottleneckReport, Category, Severity, CATEGORY_PRIORITY,
};
use crate::domain::models::evidence::{
    EvidenceBundle, SectionSignals, EVIDENCE_INTERNSHIP, EVIDENCE_LISTED_ONLY, EVIDENCE_PROJECT,
};

/// Default role when no skill matches any role profile.
pub const DEFAULT_ROLE: &str = "Software Engineer";

/// Primary/secondary skill lists for one candidate role.
///
/// Declaration order matters: role inference breaks score ties in favor of
/// the first-declared role.
struct RoleProfile {
    display: &'static str,
    primary: &'static [&'static str],
    secondary: &'static [&'static str],
}

static ROLE_PROFILES: &[RoleProfile] = &[
    RoleProfile {
        display: "Data Analyst",
        primary: &["sql", "excel", "python", "tableau", "power bi", "data analysis"],
        secondary: &["statistics", "pandas", "numpy", "data visualization"],
    },
    RoleProfile {
        display: "Data Scientist",
        primary: &["python", "machine learning", "deep learning", "tensorflow", "pytorch"],
        secondary: &["sql", "pandas", "numpy", "statistics", "nlp", "data science"],
    },
    RoleProfile {
        display: "Software Engineer",
        primary: &["java", "python", "javascript", "c++", "data structures", "algorithms"],
        secondary: &["git", "sql", "api", "rest", "oop", "dsa"],
    },
    RoleProfile {
        display: "Frontend Developer",
        primary: &["javascript", "react", "html", "css", "typescript"],
        secondary: &["vue.js", "angular", "node.js", "git"],
    },
    RoleProfile {
        display: "Backend Developer",
        primary: &["java", "python", "node.js", "sql", "api"],
        secondary: &["docker", "postgresql", "mongodb", "rest", "spring", "django"],
    },
    RoleProfile {
        display: "DevOps Engineer",
        primary: &["docker", "kubernetes", "aws", "linux", "ci/cd"],
        secondary: &["jenkins", "terraform", "ansible", "git", "python", "bash"],
    },
    RoleProfile {
        display: "ML Engineer",
        primary: &["python", "tensorflow", "pytorch", "machine learning", "deep learning"],
        secondary: &["docker", "aws", "mlops", "pandas", "numpy"],
    },
    RoleProfile {
        display: "Web Developer",
        primary: &["html", "css", "javascript", "react"],
        secondary: &["node.js", "sql", "git", "python"],
    },
];

/// Run the full stage-2 diagnosis over an evidence bundle.
pub fn analyze(evidence: &EvidenceBundle) -> BottleneckReport {
    let implied_role = infer_role(evidence);
    let bottlenecks = rate_categories(evidence, &implied_role);
    let (dominant_issue, justification) =
        select_dominant_issue(&bottlenecks, &evidence.section_signals, &implied_role);

    debug!(
        role = %implied_role,
        dominant = dominant_issue.map(|c| c.as_str()).unwrap_or("none"),
        "bottleneck diagnosis complete"
    );

    BottleneckReport {
        implied_role,
        bottlenecks,
        dominant_issue,
        justification,
    }
}

/// Infer the single most likely target role from the normalized skills.
///
/// Score per role: 3 points per primary skill match, 1 per secondary.
/// Ties break to the first-declared role; an all-zero score falls back to
/// the default role.
pub fn infer_role(evidence: &EvidenceBundle) -> String {
    let skills = evidence.skills_lowercase();

    let mut best: Option<(&RoleProfile, usize)> = None;
    for profile in ROLE_PROFILES {
        let primary = profile
            .primary
            .iter()
            .filter(|s| skills.contains(**s))
            .count();
        let secondary = profile
            .secondary
            .iter()
            .filter(|s| skills.contains(**s))
            .count();
        let score = primary * 3 + secondary;
        // Strict comparison keeps the first-declared role on ties.
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((profile, score));
        }
    }

    match best {
        Some((profile, score)) if score > 0 => profile.display.to_string(),
        _ => DEFAULT_ROLE.to_string(),
    }
}

fn rate_categories(evidence: &EvidenceBundle, implied_role: &str) -> BottleneckRatings {
    BottleneckRatings {
        positioning: rate_positioning(evidence),
        evidence_depth: rate_evidence_depth(&evidence.section_signals),
        experience_strength: rate_experience_strength(evidence),
        skill_alignment: rate_skill_alignment(evidence, implied_role),
        outcome_visibility: rate_outcome_visibility(evidence),
    }
}

/// Positioning: strong when skills carry diverse evidence, missing when the
/// map is empty or half the skills are listed with no backing evidence.
fn rate_positioning(evidence: &EvidenceBundle) -> Severity {
    let map = &evidence.skill_evidence_map;
    if map.is_empty() {
        return Severity::Missing;
    }

    let mut multi_source = 0usize;
    let mut listed_only = 0usize;
    for sources in map.values() {
        let distinct: std::collections::BTreeSet<&str> = sources
            .iter()
            .map(String::as_str)
            .filter(|s| *s != EVIDENCE_LISTED_ONLY)
            .collect();
        if sources.len() == 1 && sources[0] == EVIDENCE_LISTED_ONLY {
            listed_only += 1;
        } else if distinct.len() >= 2 {
            multi_source += 1;
        }
    }

    let total = map.len() as f64;
    let multi_ratio = multi_source as f64 / total;
    let listed_ratio = listed_only as f64 / total;

    if multi_ratio >= 0.4 {
        Severity::Strong
    } else if listed_ratio >= 0.5 {
        Severity::Missing
    } else {
        Severity::Weak
    }
}

/// Evidence depth: strong needs projects, internship, and metrics together.
fn rate_evidence_depth(signals: &SectionSignals) -> Severity {
    if signals.has_projects && signals.has_internship && signals.has_metrics {
        Severity::Strong
    } else if signals.has_projects || signals.has_internship {
        Severity::Weak
    } else {
        Severity::Missing
    }
}

/// Experience strength: missing without any internship evidence, strong only
/// with an internship plus deployment indicators.
fn rate_experience_strength(evidence: &EvidenceBundle) -> Severity {
    let signals = &evidence.section_signals;
    let internship_skills = evidence.skills_with_evidence(EVIDENCE_INTERNSHIP);

    if !signals.has_internship && internship_skills == 0 {
        Severity::Missing
    } else if signals.has_deployment && signals.has_internship {
        Severity::Strong
    } else {
        Severity::Weak
    }
}

/// Skill alignment: ratio of the implied role's primary skills matched.
/// Strong at >= 60%, missing below 30%. Unknown roles rate weak.
fn rate_skill_alignment(evidence: &EvidenceBundle, implied_role: &str) -> Severity {
    let Some(profile) = ROLE_PROFILES.iter().find(|p| p.display == implied_role) else {
        return Severity::Weak;
    };
    if profile.primary.is_empty() {
        return Severity::Weak;
    }

    let skills = evidence.skills_lowercase();
    let matches = profile
        .primary
        .iter()
        .filter(|s| skills.contains(**s))
        .count();
    let ratio = matches as f64 / profile.primary.len() as f64;

    if ratio >= 0.6 {
        Severity::Strong
    } else if ratio >= 0.3 {
        Severity::Weak
    } else {
        Severity::Missing
    }
}

/// Outcome visibility: strong needs metrics, projects, and at least two
/// project-evidenced skills.
fn rate_outcome_visibility(evidence: &EvidenceBundle) -> Severity {
    let signals = &evidence.section_signals;
    let project_skills = evidence.skills_with_evidence(EVIDENCE_PROJECT);

    if signals.has_metrics && signals.has_projects && project_skills >= 2 {
        Severity::Strong
    } else if signals.has_projects || project_skills > 0 {
        Severity::Weak
    } else {
        Severity::Missing
    }
}

/// Select exactly one dominant issue with a justification string.
///
/// One scan of the priority order for any missing category, then one scan
/// for the first weak. All-strong reports carry no dominant issue.
fn select_dominant_issue(
    ratings: &BottleneckRatings,
    signals: &SectionSignals,
    implied_role: &str,
) -> (Option<Category>, String) {
    let dominant = CATEGORY_PRIORITY
        .iter()
        .find(|c| ratings.get(**c) == Severity::Missing)
        .or_else(|| {
            CATEGORY_PRIORITY
                .iter()
                .find(|c| ratings.get(**c) == Severity::Weak)
        })
        .copied();

    let Some(category) = dominant else {
        return (None, "All bottleneck categories are strong.".to_string());
    };

    let severity = ratings.get(category);
    (Some(category), justification_for(category, severity, signals, implied_role))
}

fn justification_for(
    category: Category,
    severity: Severity,
    signals: &SectionSignals,
    implied_role: &str,
) -> String {
    match (category, severity) {
        (Category::ExperienceStrength, Severity::Missing) => {
            "No internship or work experience evidence found in resume signals.".to_string()
        }
        (Category::ExperienceStrength, _) => {
            "Internship exists but lacks production/deployment indicators.".to_string()
        }
        (Category::EvidenceDepth, Severity::Missing) => {
            "Resume lacks both project and internship sections.".to_string()
        }
        (Category::EvidenceDepth, _) => {
            let mut present = Vec::new();
            let mut absent = Vec::new();
            if signals.has_projects {
                present.push("projects");
            } else {
                absent.push("projects");
            }
            if signals.has_internship {
                present.push("internship");
            } else {
                absent.push("internship");
            }
            let present = if present.is_empty() {
                "neither".to_string()
            } else {
                present.join(", ")
            };
            let absent = if absent.is_empty() {
                "none".to_string()
            } else {
                absent.join(", ")
            };
            format!("Has {present} but missing {absent}; no quantifiable metrics found.")
        }
        (Category::OutcomeVisibility, Severity::Missing) => {
            "No measurable outcomes or project evidence detected.".to_string()
        }
        (Category::OutcomeVisibility, _) => {
            "Projects present but lack quantifiable metrics or results.".to_string()
        }
        (Category::Positioning, Severity::Missing) => {
            "Skills are listed without contextual evidence of application.".to_string()
        }
        (Category::Positioning, _) => {
            "Most skills lack diverse evidence sources (project, internship, coursework)."
                .to_string()
        }
        (Category::SkillAlignment, Severity::Missing) => {
            "Minimal overlap between skills and target role requirements.".to_string()
        }
        (Category::SkillAlignment, _) => {
            format!("Some primary skills for {implied_role} present, but notable gaps remain.")
        }
    }
}
