//! Burn scenarios: an ordered item list plus a duration, loaded from JSON or YAML.
//! Values are validated once here so the simulator never sees a malformed scenario.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::burn::{tick_count, Item, MAX_TICKS};
use crate::error::ScenarioError;

/// Duration of the built-in reference scenario, in seconds.
pub const REFERENCE_DURATION: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnScenario {
    pub duration: f64,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Json,
    Yaml,
}

impl ScenarioFormat {
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ScenarioError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl BurnScenario {
    /// Two items: `Ray` (2 stacks every 6s) and the amplifying `Core` (6 stacks every 3.33s), 40s.
    pub fn reference() -> Self {
        Self {
            duration: REFERENCE_DURATION,
            items: vec![Item::new("Ray", 2, 6.0), Item::amplifying("Core", 6, 3.33)],
        }
    }

    pub fn with_duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    /// Reject negative, non-finite or overlong times and unnamed items.
    ///
    /// Repeated names are allowed: each listed copy is its own item with its own cooldown.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        validate_duration(self.duration)?;
        for (index, item) in self.items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(ScenarioError::EmptyItemName { index });
            }
            if !item.cooldown.is_finite() || item.cooldown < 0.0 {
                return Err(ScenarioError::InvalidCooldown {
                    name: item.name.clone(),
                    cooldown: item.cooldown,
                });
            }
        }
        Ok(())
    }
}

pub fn validate_duration(duration: f64) -> Result<(), ScenarioError> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(ScenarioError::InvalidDuration(duration));
    }
    let ticks = tick_count(duration);
    if ticks > MAX_TICKS {
        return Err(ScenarioError::DurationTooLong {
            duration,
            ticks,
            max: MAX_TICKS,
        });
    }
    Ok(())
}

/// Parse and validate scenario text in the given format.
pub fn parse_scenario(raw: &str, format: ScenarioFormat) -> Result<BurnScenario, ScenarioError> {
    let scenario: BurnScenario = match format {
        ScenarioFormat::Json => serde_json::from_str(raw)?,
        ScenarioFormat::Yaml => serde_yaml::from_str(raw)?,
    };
    scenario.validate()?;
    Ok(scenario)
}

/// Load a scenario file, choosing the parser from its extension.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<BurnScenario, ScenarioError> {
    let path = path.as_ref();
    let format = ScenarioFormat::from_path(path)?;
    let raw = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let scenario = parse_scenario(&raw, format)?;
    debug!(
        path = %path.display(),
        items = scenario.items.len(),
        duration = scenario.duration,
        "loaded burn scenario"
    );
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::burn::{simulate_scenario, TraceMode};

    #[test]
    fn reference_scenario_is_valid() {
        let scenario = BurnScenario::reference();
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.items.len(), 2);
        assert!(scenario.items[1].increases_burn);
    }

    #[test]
    fn parses_yaml_with_default_flag() {
        let raw = "duration: 5\nitems:\n  - name: Torch\n    stack_value: 3\n    cooldown: 2.5\n";
        let scenario = parse_scenario(raw, ScenarioFormat::Yaml).unwrap();
        assert_eq!(scenario.duration, 5.0);
        assert_eq!(scenario.items, vec![Item::new("Torch", 3, 2.5)]);
    }

    #[test]
    fn parses_json_with_amplifying_item() {
        let raw = r#"{"duration": 2, "items": [{"name": "Core", "stack_value": 6, "cooldown": 3.33, "increases_burn": true}]}"#;
        let scenario = parse_scenario(raw, ScenarioFormat::Json).unwrap();
        assert_eq!(scenario.items, vec![Item::amplifying("Core", 6, 3.33)]);
    }

    #[test]
    fn missing_items_means_no_items() {
        let scenario = parse_scenario(r#"{"duration": 3}"#, ScenarioFormat::Json).unwrap();
        assert!(scenario.items.is_empty());
    }

    #[test]
    fn rejects_negative_duration() {
        let err = parse_scenario(r#"{"duration": -1}"#, ScenarioFormat::Json).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidDuration(_)));
    }

    #[test]
    fn rejects_durations_past_the_tick_limit() {
        assert!(validate_duration(500_000.0).is_ok());
        assert!(matches!(
            validate_duration(500_000.5),
            Err(ScenarioError::DurationTooLong { ticks: 1_000_001, .. })
        ));
        let err = parse_scenario(r#"{"duration": 1e15}"#, ScenarioFormat::Json).unwrap_err();
        assert!(matches!(err, ScenarioError::DurationTooLong { .. }));
    }

    #[test]
    fn rejects_negative_stack_value_at_parse_time() {
        let raw = r#"{"duration": 1, "items": [{"name": "Bad", "stack_value": -2, "cooldown": 1}]}"#;
        let err = parse_scenario(raw, ScenarioFormat::Json).unwrap_err();
        assert!(matches!(err, ScenarioError::Json(_)));
    }

    #[test]
    fn repeated_item_names_each_keep_their_own_cooldown() {
        let raw = r#"{"duration": 1.0, "items": [
            {"name": "Ray", "stack_value": 2, "cooldown": 6},
            {"name": "Ray", "stack_value": 2, "cooldown": 6}
        ]}"#;
        let scenario = parse_scenario(raw, ScenarioFormat::Json).unwrap();
        assert_eq!(scenario.items.len(), 2);

        let report = simulate_scenario(&scenario, TraceMode::Events);
        assert_eq!(report.ticks[0].damage, 4);
        let opening: Vec<&str> = report
            .activations
            .iter()
            .filter(|activation| activation.tick == 0)
            .map(|activation| activation.item.as_str())
            .collect();
        assert_eq!(opening, vec!["Ray", "Ray"]);
    }

    #[test]
    fn rejects_unnamed_items() {
        let unnamed = BurnScenario {
            duration: 1.0,
            items: vec![Item::new(" ", 1, 1.0)],
        };
        assert!(matches!(
            unnamed.validate(),
            Err(ScenarioError::EmptyItemName { index: 0 })
        ));
    }

    #[test]
    fn rejects_negative_cooldown() {
        let scenario = BurnScenario {
            duration: 1.0,
            items: vec![Item::new("Ray", 1, -0.5)],
        };
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioError::InvalidCooldown { .. })
        ));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ScenarioFormat::from_path(Path::new("a/b.YML")).unwrap(),
            ScenarioFormat::Yaml
        );
        assert_eq!(
            ScenarioFormat::from_path(Path::new("scenario.json")).unwrap(),
            ScenarioFormat::Json
        );
        assert!(ScenarioFormat::from_path(Path::new("scenario.toml")).is_err());
    }
}
