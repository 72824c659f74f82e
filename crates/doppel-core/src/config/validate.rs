//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.loader.hash_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "loader.hash_timeout_ms must be > 0".into(),
            ));
        }
        if self.loader.color_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "loader.color_timeout_ms must be > 0".into(),
            ));
        }
        if self.hash.grid_side == 0 {
            return Err(ConfigError::ValidationError(
                "hash.grid_side must be > 0".into(),
            ));
        }
        if self.palette.grid_side == 0 {
            return Err(ConfigError::ValidationError(
                "palette.grid_side must be > 0".into(),
            ));
        }
        if self.palette.max_colors == 0 {
            return Err(ConfigError::ValidationError(
                "palette.max_colors must be > 0".into(),
            ));
        }
        if self.palette.quantize_step == 0 {
            return Err(ConfigError::ValidationError(
                "palette.quantize_step must be > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.scoring.hash_weight)
            || !(0.0..=1.0).contains(&self.scoring.color_weight)
        {
            return Err(ConfigError::ValidationError(
                "scoring weights must be between 0.0 and 1.0".into(),
            ));
        }
        if (self.scoring.hash_weight + self.scoring.color_weight - 1.0).abs() > 1e-9 {
            return Err(ConfigError::ValidationError(
                "scoring.hash_weight and scoring.color_weight must sum to 1.0".into(),
            ));
        }
        let t = &self.thresholds;
        if t.match_threshold < 0.0 || t.high_confidence > 100.0 {
            return Err(ConfigError::ValidationError(
                "thresholds must be between 0 and 100".into(),
            ));
        }
        if t.match_threshold > t.medium_confidence || t.medium_confidence > t.high_confidence {
            return Err(ConfigError::ValidationError(
                "thresholds must be ordered: match_threshold <= medium_confidence <= high_confidence"
                    .into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_grid() {
        let mut config = Config::default();
        config.hash.grid_side = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("hash.grid_side"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.loader.color_timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("color_timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_unbalanced_weights() {
        let mut config = Config::default();
        config.scoring.hash_weight = 0.7;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_validate_rejects_unordered_thresholds() {
        let mut config = Config::default();
        config.thresholds.medium_confidence = 90.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ordered"));
    }

    #[test]
    fn test_validate_rejects_zero_quantize_step() {
        let mut config = Config::default();
        config.palette.quantize_step = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("quantize_step"));
    }
}
