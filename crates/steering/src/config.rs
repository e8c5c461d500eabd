//! Scenario files.
//!
//! A run file holds a single `[scenario]` table:
//!
//! ```toml
//! [scenario]
//! name = "steered"
//! initial_magnitude = 1.0
//! initial_phase = 2.5415926535897931
//! target_phase = 0.0
//! steering_strength = 0.4
//! softness = 0.4
//! base_friction = 0.15
//! transparency_factor = 0.8
//! time_step = 0.01
//! step_count = 2000
//! ```
//!
//! A comparison file holds `[baseline]` and `[alternative]` tables with the
//! same fields.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{ConfigError, Scenario, ScenarioConfig};

/// Errors that can occur while loading a scenario file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scenario `{name}`: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ConfigError,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RunFile {
    scenario: ScenarioConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CompareFile {
    baseline: ScenarioConfig,
    alternative: ScenarioConfig,
}

fn validate(config: ScenarioConfig) -> Result<Scenario, LoadError> {
    let name = config.name.clone();
    config
        .into_scenario()
        .map_err(|source| LoadError::Invalid { name, source })
}

/// Parses a run file from a TOML string.
///
/// # Errors
///
/// Returns an error if the text is not a valid run file or the scenario fails
/// validation.
pub fn parse_scenario(text: &str) -> Result<Scenario, LoadError> {
    let file: RunFile = toml::from_str(text)?;
    validate(file.scenario)
}

/// Parses a comparison file from a TOML string, returning
/// `(baseline, alternative)`.
///
/// # Errors
///
/// Returns an error if the text is not a valid comparison file or either
/// scenario fails validation.
pub fn parse_comparison(text: &str) -> Result<(Scenario, Scenario), LoadError> {
    let file: CompareFile = toml::from_str(text)?;
    Ok((validate(file.baseline)?, validate(file.alternative)?))
}

/// Loads a run file.
///
/// # Errors
///
/// See [`parse_scenario`]; also fails if the file cannot be read.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading scenario");
    parse_scenario(&fs::read_to_string(path)?)
}

/// Loads a comparison file.
///
/// # Errors
///
/// See [`parse_comparison`]; also fails if the file cannot be read.
pub fn load_comparison(path: impl AsRef<Path>) -> Result<(Scenario, Scenario), LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading comparison");
    parse_comparison(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Preset;

    fn table(header: &str, config: &ScenarioConfig) -> String {
        format!("[{header}]\n{}", toml::to_string(config).unwrap())
    }

    #[test]
    fn preset_round_trips_through_a_run_file() {
        let text = table("scenario", &Preset::Transparent.config());
        let scenario = parse_scenario(&text).unwrap();

        assert_eq!(scenario, Preset::Transparent.scenario());
    }

    #[test]
    fn name_defaults_to_custom() {
        let text = table("scenario", &Preset::Opaque.config()).replace("name = \"opaque\"\n", "");
        assert_eq!(parse_scenario(&text).unwrap().name, "custom");
    }

    #[test]
    fn comparison_file_holds_two_scenarios() {
        let text = format!(
            "{}\n{}",
            table("baseline", &Preset::Transparent.config()),
            table("alternative", &Preset::Opaque.config())
        );
        let (baseline, alternative) = parse_comparison(&text).unwrap();

        assert_eq!(baseline.name, "transparent");
        assert_eq!(alternative.name, "opaque");
    }

    #[test]
    fn invalid_values_name_the_scenario() {
        let config = ScenarioConfig {
            name: "broken".into(),
            time_step: 0.0,
            ..Preset::Transparent.config()
        };
        let error = parse_scenario(&table("scenario", &config)).unwrap_err();

        assert!(matches!(
            error,
            LoadError::Invalid {
                ref name,
                source: ConfigError::NonPositiveTimeStep
            } if name == "broken"
        ));
        assert_eq!(
            error.to_string(),
            "invalid scenario `broken`: time_step must be positive"
        );
    }

    #[test]
    fn negative_step_count_parses_then_fails_validation() {
        let config = ScenarioConfig {
            step_count: -1,
            ..Preset::Transparent.config()
        };
        let error = parse_scenario(&table("scenario", &config)).unwrap_err();

        assert!(matches!(
            error,
            LoadError::Invalid {
                source: ConfigError::NegativeStepCount(-1),
                ..
            }
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = format!("{}friction = 1.0\n", table("scenario", &Preset::Opaque.config()));
        assert!(matches!(parse_scenario(&text), Err(LoadError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = load_scenario("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(error, LoadError::Io(_)));
    }
}
