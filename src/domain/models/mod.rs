pub mod bottleneck;
pub mod evidence;
pub mod roadmap;
pub mod session;
pub mod strategy;

pub use bottleneck::{BottleneckRatings, BottleneckReport, Category, Severity, CATEGORY_PRIORITY};
pub use evidence::{EvidenceBundle, ProfileSignal, ProfileSignals, SectionSignals};
pub use roadmap::{Roadmap, RoadmapAction, RoadmapGoal, RoadmapMilestone};
pub use session::{AgentSession, OutcomeReport};
pub use strategy::{Outcome, Strategy, StrategyDecision, StrategyRecord, StrategyState};
