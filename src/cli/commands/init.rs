//! Implementation of the `careerloop init` command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{
    AgentSession, BottleneckReport, EvidenceBundle, StrategyDecision,
};
use crate::services::explainer;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Stage 1 evidence bundle JSON file
    pub stage1: PathBuf,

    /// Stage 2 bottleneck report JSON file
    pub stage2: PathBuf,

    /// Stage 3 strategy decision JSON file
    pub stage3: PathBuf,

    /// Write the session document to this file as well as stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub session: AgentSession,
    pub explanation: String,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec!["Session initialized.".to_string(), self.explanation.clone()];
        lines.push(format!("Action: {}", self.session.stage3_strategy.action));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let evidence: EvidenceBundle = read_json(&args.stage1, "stage 1 evidence")?;
    let bottleneck: BottleneckReport = read_json(&args.stage2, "stage 2 bottleneck report")?;
    let decision: StrategyDecision = read_json(&args.stage3, "stage 3 strategy decision")?;

    let session = AgentSession::initialize(evidence, bottleneck, decision);
    info!(strategy = %session.stage3_strategy.strategy, "session initialized");

    if let Some(out) = &args.out {
        write_session(out, &session)?;
    }

    let output_data = InitOutput {
        explanation: explainer::explain_short(&session),
        session,
    };
    output(&output_data, json_mode);
    Ok(())
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {what} from {}", path.display()))
}

pub(crate) fn write_session(path: &Path, session: &AgentSession) -> Result<()> {
    let content = serde_json::to_string_pretty(session).context("Failed to serialize session")?;
    fs::write(path, format!("{content}\n"))
        .with_context(|| format!("Failed to write session to {}", path.display()))
}
