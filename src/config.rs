//! Runtime configuration
//!
//! Read once from environment variables at startup.

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

use crate::models::GoalCategory;

pub const ENV_LOG: &str = "DIETCALC_LOG";
pub const ENV_FALLBACK_GOAL: &str = "DIETCALC_FALLBACK_GOAL";
pub const ENV_WEEK_ANCHOR: &str = "DIETCALC_WEEK_ANCHOR";

const DEFAULT_LOG_DIRECTIVE: &str = "dietcalc=info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// How weekly reports pick the first day of their window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekAnchor {
    /// Snap the requested date to the Monday of its week
    Monday,
    /// Use the requested date as the first day
    AsGiven,
}

impl FromStr for WeekAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Ok(WeekAnchor::Monday),
            "as_given" => Ok(WeekAnchor::AsGiven),
            _ => Err("expected 'monday' or 'as_given'".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_directive: String,
    /// Category used when a goal display name matches nothing
    pub fallback_goal: GoalCategory,
    pub week_anchor: WeekAnchor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            fallback_goal: GoalCategory::Maintenance,
            week_anchor: WeekAnchor::Monday,
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Load from an explicit variable map; unset variables keep their defaults
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(directive) = non_empty(vars, ENV_LOG) {
            config.log_directive = directive.to_string();
        }

        if let Some(value) = non_empty(vars, ENV_FALLBACK_GOAL) {
            config.fallback_goal = value.parse().map_err(|e: crate::nutrition::NutritionError| {
                ConfigError::InvalidValue {
                    var: ENV_FALLBACK_GOAL,
                    value: value.to_string(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = non_empty(vars, ENV_WEEK_ANCHOR) {
            config.week_anchor = value.parse().map_err(|reason: String| ConfigError::InvalidValue {
                var: ENV_WEEK_ANCHOR,
                value: value.to_string(),
                reason,
            })?;
        }

        Ok(config)
    }
}

fn non_empty<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_directive, "dietcalc=info");
        assert_eq!(config.fallback_goal, GoalCategory::Maintenance);
        assert_eq!(config.week_anchor, WeekAnchor::Monday);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(&vars(&[
            (ENV_LOG, "dietcalc=debug"),
            (ENV_FALLBACK_GOAL, "weight_loss"),
            (ENV_WEEK_ANCHOR, "as_given"),
        ]))
        .unwrap();
        assert_eq!(config.log_directive, "dietcalc=debug");
        assert_eq!(config.fallback_goal, GoalCategory::WeightLoss);
        assert_eq!(config.week_anchor, WeekAnchor::AsGiven);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = Config::from_vars(&vars(&[(ENV_LOG, "  "), (ENV_FALLBACK_GOAL, "")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_vars(&vars(&[(ENV_FALLBACK_GOAL, "bulk")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: ENV_FALLBACK_GOAL, .. }));

        let err = Config::from_vars(&vars(&[(ENV_WEEK_ANCHOR, "sunday")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: ENV_WEEK_ANCHOR, .. }));
    }
}
