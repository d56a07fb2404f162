pub mod parser;
pub mod schema;
pub mod types;

pub use types::*;
pub use parser::{load_experiment, load_network_model, load_scenario, parse_main_config, parse_scenario_str};
