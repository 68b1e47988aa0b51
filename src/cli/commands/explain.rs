//! Implementation of the `careerloop explain` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::commands::init::read_json;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::AgentSession;
use crate::services::explainer;

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Session document JSON file
    pub session: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExplainOutput {
    pub explanation: String,
}

impl CommandOutput for ExplainOutput {
    fn to_human(&self) -> String {
        self.explanation.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: ExplainArgs, json_mode: bool) -> Result<()> {
    let session: AgentSession = read_json(&args.session, "session document")?;
    let output_data = ExplainOutput {
        explanation: explainer::explain(&session),
    };
    output(&output_data, json_mode);
    Ok(())
}
