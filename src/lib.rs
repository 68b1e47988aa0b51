//! Careerloop - Strategy Decision & Lifecycle Engine
//!
//! Careerloop turns normalized resume evidence into a single strategy
//! commitment and manages that strategy through a deterministic lifecycle
//! driven by real-world application outcomes.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Pure models and errors, no I/O
//! - **Service Layer** (`services`): Diagnosis, selection, lifecycle, and
//!   roadmap gating as pure functions over the domain
//! - **CLI Layer** (`cli`): Command-line interface; all persistence is
//!   caller-owned JSON documents
//!
//! # Example
//!
//! ```
//! use careerloop::domain::models::{AgentSession, Outcome};
//! use careerloop::services::{diagnoser, lifecycle, selector};
//!
//! let evidence = careerloop::domain::models::EvidenceBundle::default();
//! let report = diagnoser::analyze(&evidence);
//! let decision = selector::select(&report, &evidence.section_signals);
//! let mut session = AgentSession::initialize(evidence, report, decision);
//! let result = lifecycle::process_outcome(&mut session, Outcome::Interview)?;
//! assert!(!result.strategy_changed);
//! # Ok::<(), careerloop::domain::DomainError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    AgentSession, BottleneckReport, Category, EvidenceBundle, Outcome, OutcomeReport, Roadmap,
    Severity, Strategy, StrategyDecision, StrategyRecord, StrategyState,
};
