use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{DEADZONE, ORBIT_DAMPING};
use crate::math::DEFAULT_SEGMENTS;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for the controllers and the path recorder.
///
/// Every field has a default, so a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RigConfig {
    /// Subject movement per tick
    pub subject_speed: f32,
    /// Camera movement per tick in free-fly mode
    pub free_fly_speed: f32,
    /// Radians of orbit per tick at full stick deflection
    pub rotation_speed: f32,
    pub deadzone: f32,
    /// Guard band keeping the camera off the poles
    pub polar_epsilon: f32,
    pub curve_segments: usize,
    /// Status line refresh rate
    pub status_hz: f32,
    pub gamepad_index: usize,
    /// Fraction of pending mouse-drag rotation applied per tick
    pub orbit_damping: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            subject_speed: 0.05,
            free_fly_speed: 0.1,
            rotation_speed: 0.02,
            deadzone: DEADZONE,
            polar_epsilon: 0.1,
            curve_segments: DEFAULT_SEGMENTS,
            status_hz: 2.0,
            gamepad_index: 0,
            orbit_damping: ORBIT_DAMPING,
        }
    }
}

impl RigConfig {
    pub fn from_json(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: RigConfig =
            serde_json::from_str(text).map_err(|source| ConfigError::Parse {
                path: origin.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text, &path.display().to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("subject_speed", self.subject_speed),
            ("free_fly_speed", self.free_fly_speed),
            ("rotation_speed", self.rotation_speed),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        if !(0.0..1.0).contains(&self.deadzone) {
            return Err(ConfigError::Invalid {
                field: "deadzone",
                reason: format!("must be in [0, 1), got {}", self.deadzone),
            });
        }
        if !(self.polar_epsilon > 0.0 && self.polar_epsilon < std::f32::consts::FRAC_PI_2) {
            return Err(ConfigError::Invalid {
                field: "polar_epsilon",
                reason: format!("must be in (0, pi/2), got {}", self.polar_epsilon),
            });
        }
        if !(self.orbit_damping > 0.0 && self.orbit_damping <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "orbit_damping",
                reason: format!("must be in (0, 1], got {}", self.orbit_damping),
            });
        }
        if self.curve_segments == 0 {
            return Err(ConfigError::Invalid {
                field: "curve_segments",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RigConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.curve_segments, 100);
        assert_eq!(config.deadzone, 0.1);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RigConfig::from_json(r#"{ "subject_speed": 0.2 }"#, "inline").unwrap();
        assert_eq!(config.subject_speed, 0.2);
        assert_eq!(config.rotation_speed, RigConfig::default().rotation_speed);
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = RigConfig::from_json(r#"{ "speed": 1.0 }"#, "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_values_rejected() {
        let cases = [
            r#"{ "rotation_speed": 0.0 }"#,
            r#"{ "deadzone": -0.5 }"#,
            r#"{ "polar_epsilon": 2.0 }"#,
            r#"{ "curve_segments": 0 }"#,
            r#"{ "orbit_damping": 0.0 }"#,
            r#"{ "orbit_damping": 1.5 }"#,
        ];
        for json in cases {
            let err = RigConfig::from_json(json, "inline").unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { .. }), "{}", json);
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RigConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
