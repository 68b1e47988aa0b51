//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::{explain, init, outcome, roadmap};

#[derive(Parser)]
#[command(name = "careerloop")]
#[command(about = "Careerloop - Strategy Decision & Lifecycle Engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a session from the three stage output files
    Init(init::InitArgs),

    /// Record an application outcome and run the lifecycle loop
    Outcome(outcome::OutcomeArgs),

    /// Narrate the decision history of a session
    Explain(explain::ExplainArgs),

    /// Generate an execution roadmap (EXECUTE state only)
    Roadmap(roadmap::RoadmapArgs),
}
