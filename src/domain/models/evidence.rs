//! Evidence bundle consumed from the resume extraction layer.
//!
//! The bundle is produced outside this crate (resume parsing, skill
//! normalization, profile-signal derivation) and is immutable once built.
//! Every field defaults so malformed or partial documents degrade rather
//! than fail.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Provenance tag for skills backed by project work.
pub const EVIDENCE_PROJECT: &str = "project";
/// Provenance tag for skills backed by internship or work experience.
pub const EVIDENCE_INTERNSHIP: &str = "internship";
/// Tag meaning the skill appears in the skills list with no backing evidence.
pub const EVIDENCE_LISTED_ONLY: &str = "listed_only";

/// Boolean section signals detected in the resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSignals {
    /// Resume has a projects section
    #[serde(default)]
    pub has_projects: bool,
    /// Resume has internship or work experience
    #[serde(default)]
    pub has_internship: bool,
    /// Quantified outcomes (percentages, counts) detected
    #[serde(default)]
    pub has_metrics: bool,
    /// Deployment or production indicators detected
    #[serde(default)]
    pub has_deployment: bool,
}

/// A single named signal derived by the profile layer.
///
/// The engine only reads `triggered`; the remaining fields are carried for
/// serialization fidelity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSignal {
    #[serde(default)]
    pub triggered: bool,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub derived_from: Vec<String>,
    #[serde(default)]
    pub explanation: String,
}

/// Named profile signals from the depth-aware classification layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSignals {
    #[serde(default)]
    pub signals: BTreeMap<String, ProfileSignal>,
}

impl ProfileSignals {
    /// Whether the `resume_positioning_issue` signal is currently triggered.
    ///
    /// A missing signal layer or missing signal entry reads as untriggered;
    /// absence of the optional dependency must not fail the pipeline.
    pub fn positioning_issue_triggered(&self) -> bool {
        self.signals
            .get("resume_positioning_issue")
            .is_some_and(|s| s.triggered)
    }
}

/// Normalized resume evidence: the immutable input to the decision engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceBundle {
    /// Canonicalized skill names
    #[serde(default)]
    pub normalized_skills: Vec<String>,
    /// Skill -> provenance tags mapping
    #[serde(default)]
    pub skill_evidence_map: BTreeMap<String, Vec<String>>,
    /// Boolean section signals
    #[serde(default)]
    pub section_signals: SectionSignals,
    /// Opaque enhanced snapshot from the profile layer, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_snapshot: Option<serde_json::Value>,
    /// Derived profile signals, if the profile layer ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_signals: Option<ProfileSignals>,
}

impl EvidenceBundle {
    /// Lowercased skill set for case-insensitive matching.
    pub fn skills_lowercase(&self) -> std::collections::BTreeSet<String> {
        self.normalized_skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Count of skills whose evidence contains the given provenance tag.
    pub fn skills_with_evidence(&self, tag: &str) -> usize {
        self.skill_evidence_map
            .values()
            .filter(|evidence| evidence.iter().any(|e| e == tag))
            .count()
    }

    /// Whether the positioning-issue profile signal is triggered.
    pub fn positioning_issue_triggered(&self) -> bool {
        self.profile_signals
            .as_ref()
            .is_some_and(ProfileSignals::positioning_issue_triggered)
    }
}
