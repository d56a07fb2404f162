pub mod context;
pub mod engine;
pub mod events;
pub mod phase;
pub mod policy;

pub use context::SimulationContext;
pub use engine::{AttackSimulator, TrialReport};
pub use events::AttackEvent;
pub use phase::TrialPhase;
pub use policy::Policy;
