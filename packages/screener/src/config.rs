//! Score weight configuration.
//!
//! Weights are read from a TOML file with a `[weights]` table:
//!
//! ```toml
//! [weights]
//! gross_yield = 0.4
//! population_growth = 0.2
//! job_growth = 0.2
//! rent_growth = 0.2
//! ```
//!
//! A metric left out of the table has no weight and is not scored. A file
//! without a `[weights]` table uses the built-in defaults.

use std::path::Path;

use metro_screener_metro_models::ScoreWeights;
use serde::{Deserialize, Serialize};

use crate::PipelineError;

/// Contents of a screener configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenerConfig {
    /// Composite score weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<ScoreWeights>,
}

impl ScreenerConfig {
    /// The configured weights, or the defaults if none were given.
    #[must_use]
    pub fn weights_or_default(self) -> ScoreWeights {
        self.weights.unwrap_or_default()
    }
}

/// Parses a configuration document.
///
/// # Errors
///
/// Returns [`PipelineError::Config`] if the document is not valid TOML,
/// names an unknown metric, or has a negative weight.
pub fn parse_config(toml_str: &str) -> Result<ScreenerConfig, PipelineError> {
    Ok(toml::de::from_str(toml_str)?)
}

/// Loads score weights from `path`, or the defaults when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_weights(path: Option<&Path>) -> Result<ScoreWeights, PipelineError> {
    let Some(path) = path else {
        return Ok(ScoreWeights::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|e| PipelineError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let weights = parse_config(&contents)?.weights_or_default();
    log::info!("Loaded score weights from {}", path.display());
    Ok(weights)
}

/// Renders `weights` as a configuration document.
///
/// # Errors
///
/// Returns [`PipelineError::ConfigOutput`] if serialization fails.
pub fn render_config(weights: &ScoreWeights) -> Result<String, PipelineError> {
    let config = ScreenerConfig {
        weights: Some(weights.clone()),
    };
    Ok(toml::to_string(&config)?)
}

#[cfg(test)]
mod tests {
    use metro_screener_metro_models::Metric;

    use super::*;

    #[test]
    fn parses_weights_table() {
        let config = parse_config("[weights]\ngross_yield = 0.5\njob_growth = 0.5\n").unwrap();
        let weights = config.weights_or_default();
        assert_eq!(weights.get(Metric::GrossYield), Some(0.5));
        assert_eq!(weights.get(Metric::JobGrowth), Some(0.5));
        assert_eq!(weights.get(Metric::VacancyRate), None);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let weights = parse_config("").unwrap().weights_or_default();
        assert_eq!(weights, ScoreWeights::default());
    }

    #[test]
    fn rejects_negative_weight() {
        assert!(matches!(
            parse_config("[weights]\ngross_yield = -1.0\n"),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn rejects_unknown_metric() {
        assert!(parse_config("[weights]\ncap_rate = 0.5\n").is_err());
    }

    #[test]
    fn rejects_unknown_table() {
        assert!(parse_config("[scoring]\ngross_yield = 0.5\n").is_err());
    }

    #[test]
    fn rendered_config_parses_back() {
        let rendered = render_config(&ScoreWeights::default()).unwrap();
        assert!(rendered.starts_with("[weights]"));
        let parsed = parse_config(&rendered).unwrap();
        assert_eq!(parsed.weights_or_default(), ScoreWeights::default());
    }

    #[test]
    fn missing_path_means_defaults() {
        assert_eq!(load_weights(None).unwrap(), ScoreWeights::default());
    }
}
