//! Careerloop CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use careerloop::cli::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => careerloop::cli::commands::init::execute(args, cli.json),
        Commands::Outcome(args) => careerloop::cli::commands::outcome::execute(args, cli.json),
        Commands::Explain(args) => careerloop::cli::commands::explain::execute(args, cli.json),
        Commands::Roadmap(args) => careerloop::cli::commands::roadmap::execute(args, cli.json),
    };

    if let Err(err) = result {
        careerloop::cli::handle_error(err, cli.json);
    }
}
