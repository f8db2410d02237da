pub mod scenario;

pub use scenario::{load_scenario, parse_scenario, BurnScenario, ScenarioFormat, REFERENCE_DURATION};
