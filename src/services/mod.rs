//! Service layer: pure decision logic over the domain models.

pub mod diagnoser;
pub mod explainer;
pub mod lifecycle;
pub mod reevaluation;
pub mod roadmap_gate;
pub mod selector;
