use crate::domain::chart::{ChartAssembler, ChartOptions, Palette};
use crate::domain::errors::AppError;
use crate::domain::logging::LogLevel;
use serde::{Deserialize, Serialize};

/// Engine-wide settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub log_level: LogLevel,
    pub currency_prefix: String,
    /// SMA windows overlaid on line charts.
    pub default_indicators: Vec<usize>,
    /// Maximum samples requested per series.
    pub history_limit: usize,
    pub palette: Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            currency_prefix: "$".to_string(),
            default_indicators: vec![20, 50],
            history_limit: 1000,
            palette: Palette::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::Configuration(format!("invalid engine config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.history_limit == 0 {
            return Err(AppError::Configuration("historyLimit must be positive".to_string()));
        }
        if self.default_indicators.contains(&0) {
            return Err(AppError::Configuration(
                "defaultIndicators cannot contain a zero window".to_string(),
            ));
        }
        Ok(())
    }

    pub fn assembler(&self) -> ChartAssembler {
        ChartAssembler::new(self.palette.clone(), self.currency_prefix.clone())
    }

    /// Default toggles with the configured overlay windows.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions::default().with_indicators(self.default_indicators.iter().copied())
    }
}
