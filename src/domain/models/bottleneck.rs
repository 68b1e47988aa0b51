//! Bottleneck diagnosis model.
//!
//! A report rates five weakness categories and names at most one dominant
//! issue, selected by a fixed priority order.

use serde::{Deserialize, Serialize};

/// Severity rating for a bottleneck category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Strong,
    Weak,
    Missing,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Weak => "weak",
            Self::Missing => "missing",
        }
    }

    /// Strong categories are not bottlenecks.
    pub fn is_issue(&self) -> bool {
        !matches!(self, Self::Strong)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five fixed weakness categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Positioning,
    EvidenceDepth,
    ExperienceStrength,
    SkillAlignment,
    OutcomeVisibility,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positioning => "positioning",
            Self::EvidenceDepth => "evidence_depth",
            Self::ExperienceStrength => "experience_strength",
            Self::SkillAlignment => "skill_alignment",
            Self::OutcomeVisibility => "outcome_visibility",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority order for dominant-issue selection, most critical first.
/// Missing is checked before weak across the whole order.
pub const CATEGORY_PRIORITY: [Category; 5] = [
    Category::ExperienceStrength,
    Category::EvidenceDepth,
    Category::OutcomeVisibility,
    Category::Positioning,
    Category::SkillAlignment,
];

/// Severity rating for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottleneckRatings {
    pub positioning: Severity,
    pub evidence_depth: Severity,
    pub experience_strength: Severity,
    pub skill_alignment: Severity,
    pub outcome_visibility: Severity,
}

impl BottleneckRatings {
    pub fn get(&self, category: Category) -> Severity {
        match category {
            Category::Positioning => self.positioning,
            Category::EvidenceDepth => self.evidence_depth,
            Category::ExperienceStrength => self.experience_strength,
            Category::SkillAlignment => self.skill_alignment,
            Category::OutcomeVisibility => self.outcome_visibility,
        }
    }

    /// Count of non-strong categories other than the given one.
    pub fn other_issue_count(&self, excluding: Category) -> usize {
        CATEGORY_PRIORITY
            .iter()
            .filter(|c| **c != excluding && self.get(**c).is_issue())
            .count()
    }
}

impl Default for BottleneckRatings {
    /// Malformed or empty evidence degrades to all-missing ratings.
    fn default() -> Self {
        Self {
            positioning: Severity::Missing,
            evidence_depth: Severity::Missing,
            experience_strength: Severity::Missing,
            skill_alignment: Severity::Missing,
            outcome_visibility: Severity::Missing,
        }
    }
}

/// Output of the bottleneck diagnoser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleneckReport {
    /// Implied target role (display label, e.g. "Data Analyst")
    pub implied_role: String,
    /// Per-category severity ratings
    pub bottlenecks: BottleneckRatings,
    /// The single dominant issue, or None when all categories are strong
    pub dominant_issue: Option<Category>,
    /// Human-readable justification for the dominant issue
    pub justification: String,
}
