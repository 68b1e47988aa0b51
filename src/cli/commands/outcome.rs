//! Implementation of the `careerloop outcome` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::commands::init::{read_json, write_session};
use crate::cli::output::{output, CommandOutput};
use crate::domain::errors::DomainError;
use crate::domain::models::{AgentSession, Outcome, OutcomeReport};
use crate::services::lifecycle;

#[derive(Args, Debug)]
pub struct OutcomeArgs {
    /// Session document JSON file
    pub session: PathBuf,

    /// Outcome value: interview, rejected, or no_response
    pub value: String,

    /// Write the updated session document back to this file
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl CommandOutput for OutcomeReport {
    fn to_human(&self) -> String {
        let mut lines = vec![self.explanation.clone()];
        if self.strategy_changed {
            lines.push(format!(
                "Strategy replaced. New action: {}",
                self.current_strategy.action
            ));
        }
        if let Some(state) = self.strategy_state {
            lines.push(format!("Lifecycle state: {state}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: OutcomeArgs, json_mode: bool) -> Result<()> {
    let outcome = Outcome::from_str(&args.value)
        .ok_or_else(|| DomainError::InvalidOutcome(args.value.clone()))?;
    let mut session: AgentSession = read_json(&args.session, "session document")?;

    let report = lifecycle::process_outcome(&mut session, outcome)?;

    if let Some(out) = &args.out {
        write_session(out, &session)?;
    }

    output(&report, json_mode);
    Ok(())
}
