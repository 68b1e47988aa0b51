//! Implementation of the `careerloop roadmap` command.
//!
//! Generation is gated on the EXECUTE lifecycle state. A blocked gate is a
//! structured negative result printed to stdout, not a process error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use crate::cli::commands::init::read_json;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AgentSession, Roadmap, Strategy, StrategyState};
use crate::services::roadmap_gate::{self, Eligibility};

#[derive(Args, Debug)]
pub struct RoadmapArgs {
    /// Session document JSON file
    pub session: PathBuf,

    /// Only report eligibility; do not generate a roadmap
    #[arg(long)]
    pub check_only: bool,

    /// Re-check a previously generated roadmap for staleness
    #[arg(long)]
    pub existing: Option<PathBuf>,

    /// Write the roadmap document to this file as well as stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RoadmapOutput {
    Generated {
        roadmap: Roadmap,
        eligible: bool,
        strategy: Strategy,
        generated_at: DateTime<Utc>,
    },
    Blocked {
        error: String,
        eligible: bool,
        reason: String,
        current_state: Option<StrategyState>,
        recommendation: String,
    },
    Eligibility(Eligibility),
    Revalidated {
        roadmap: Roadmap,
        invalidated: bool,
    },
}

impl CommandOutput for RoadmapOutput {
    fn to_human(&self) -> String {
        match self {
            Self::Generated { roadmap, .. } => {
                let mut lines = vec![format!(
                    "Roadmap generated for '{}' ({} goals, {} milestones, {} actions).",
                    roadmap.strategy,
                    roadmap.goals.len(),
                    roadmap.milestones.len(),
                    roadmap.actions.len()
                )];
                lines.push(format!(
                    "Review after {} days; estimated completion in {} days.",
                    roadmap.review_after_days, roadmap.estimated_completion_days
                ));
                for action in &roadmap.actions {
                    lines.push(format!(
                        "  [day {}] {} ({:?})",
                        action.deadline_days, action.title, action.priority
                    ));
                }
                lines.join("\n")
            }
            Self::Blocked {
                reason,
                recommendation,
                ..
            } => {
                let mut lines = vec![format!("Roadmap generation blocked: {reason}")];
                if !recommendation.is_empty() {
                    lines.push(recommendation.clone());
                }
                lines.join("\n")
            }
            Self::Eligibility(eligibility) => {
                if eligibility.eligible {
                    format!("Eligible: {}", eligibility.reason)
                } else {
                    format!("Not eligible: {}", eligibility.reason)
                }
            }
            Self::Revalidated {
                roadmap,
                invalidated,
            } => {
                if *invalidated {
                    format!(
                        "Roadmap invalidated: {}",
                        roadmap.invalidation_reason.as_deref().unwrap_or("unknown")
                    )
                } else {
                    format!("Roadmap for '{}' is still valid.", roadmap.strategy)
                }
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: RoadmapArgs, json_mode: bool) -> Result<()> {
    let session: AgentSession = read_json(&args.session, "session document")?;

    // Staleness re-check of a previously issued roadmap
    if let Some(existing) = &args.existing {
        let mut roadmap: Roadmap = read_json(existing, "roadmap document")?;
        roadmap_gate::invalidate_if_stale(&mut roadmap, &session);
        let invalidated = roadmap.invalidated;
        if let Some(out) = &args.out {
            write_roadmap(out, &roadmap)?;
        }
        output(
            &RoadmapOutput::Revalidated {
                roadmap,
                invalidated,
            },
            json_mode,
        );
        return Ok(());
    }

    if args.check_only {
        let eligibility = roadmap_gate::check_eligibility(&session);
        output(&RoadmapOutput::Eligibility(eligibility), json_mode);
        return Ok(());
    }

    let result = match roadmap_gate::generate(&session, Utc::now()) {
        Ok(roadmap) => {
            if let Some(out) = &args.out {
                write_roadmap(out, &roadmap)?;
            }
            RoadmapOutput::Generated {
                eligible: true,
                strategy: roadmap.strategy,
                generated_at: roadmap.created_at,
                roadmap,
            }
        }
        Err(eligibility) => RoadmapOutput::Blocked {
            error: "Roadmap generation not allowed".to_string(),
            eligible: false,
            reason: eligibility.reason,
            current_state: eligibility.current_state,
            recommendation: eligibility.recommendation.unwrap_or_default(),
        },
    };

    output(&result, json_mode);
    Ok(())
}

fn write_roadmap(path: &Path, roadmap: &Roadmap) -> Result<()> {
    let content = serde_json::to_string_pretty(roadmap).context("Failed to serialize roadmap")?;
    fs::write(path, format!("{content}\n"))
        .with_context(|| format!("Failed to write roadmap to {}", path.display()))
}
