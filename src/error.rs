use thiserror::Error;

/// Message shown when the poison prompt receives something that is not an integer.
pub const INVALID_POISON_INPUT: &str =
    "Invalid input. Please enter numeric values for poison count and rounds.";

/// Errors raised while reading simulation parameters from the console.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{}", INVALID_POISON_INPUT)]
    NotNumeric { field: &'static str, value: String },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading or validating a burn scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported scenario format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("duration must be a finite, non-negative number of seconds (got {0})")]
    InvalidDuration(f64),

    #[error("duration {duration}s needs {ticks} ticks, more than the limit of {max} ticks")]
    DurationTooLong { duration: f64, ticks: u64, max: u64 },

    #[error("item #{index} has an empty name")]
    EmptyItemName { index: usize },

    #[error("item '{name}' has an invalid cooldown {cooldown} (must be finite and >= 0)")]
    InvalidCooldown { name: String, cooldown: f64 },
}

/// Errors raised while parsing command-line options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' requires a value")]
    MissingValue(String),

    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: String, value: String },

    #[error("unknown output format '{0}' (expected table, json or csv)")]
    UnknownFormat(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Errors raised while serializing a report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8")]
    Utf8,
}
