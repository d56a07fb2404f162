pub mod types;
pub mod classification;

pub use types::{SimError, TrialError};
pub use classification::{ErrorClassification, ErrorScope};
