pub mod commands;
pub mod progress;
pub mod run;
pub mod sweep;
pub mod validate;

pub use commands::{Cli, Commands};
