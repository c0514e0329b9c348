/*!
 * Simulator Configuration
 * Defaults, environment overrides, and JSON configuration documents
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::Tick;
use crate::scheduler::{Policy, DEFAULT_QUANTUM};
use serde::{Deserialize, Serialize};

/// Round-robin quantum override
pub const ENV_QUANTUM: &str = "SCHED_SIM_QUANTUM";
/// Comma-separated list of policies to run
pub const ENV_POLICIES: &str = "SCHED_SIM_POLICIES";
/// Print each result as JSON after its report
pub const ENV_EXPORT_JSON: &str = "SCHED_SIM_EXPORT_JSON";

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimulatorConfig {
    /// Round-robin time quantum (default: 3)
    pub quantum: Tick,

    /// Policies to run, in order (default: all four)
    pub policies: Vec<Policy>,

    /// Dump results as JSON (default: false)
    pub export_json: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            policies: Policy::ALL.to_vec(),
            export_json: false,
        }
    }
}

impl SimulatorConfig {
    /// Defaults overlaid with `SCHED_SIM_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a JSON configuration document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SimulationError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup` (an environment, or a map in tests)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_QUANTUM) {
            self.quantum = raw.trim().parse().map_err(|_| {
                SimulationError::Configuration(format!(
                    "{} is not an integer: '{}'",
                    ENV_QUANTUM, raw
                ))
            })?;
        }

        if let Some(raw) = lookup(ENV_POLICIES) {
            self.policies = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::parse)
                .collect::<std::result::Result<Vec<Policy>, _>>()
                .map_err(|e| {
                    SimulationError::Configuration(format!("{}: {}", ENV_POLICIES, e))
                })?;
        }

        if let Some(raw) = lookup(ENV_EXPORT_JSON) {
            self.export_json = raw == "1" || raw.eq_ignore_ascii_case("true");
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.quantum <= 0 {
            return Err(SimulationError::Configuration(format!(
                "quantum must be positive, got {}",
                self.quantum
            )));
        }
        if self.policies.is_empty() {
            return Err(SimulationError::Configuration(
                "at least one policy must be selected".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.quantum, 3);
        assert_eq!(config.policies, Policy::ALL.to_vec());
        assert!(!config.export_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = SimulatorConfig::default()
            .with_overrides(lookup(&[
                (ENV_QUANTUM, "2"),
                (ENV_POLICIES, "rr, stcf"),
                (ENV_EXPORT_JSON, "true"),
            ]))
            .unwrap();

        assert_eq!(config.quantum, 2);
        assert_eq!(config.policies, vec![Policy::RoundRobin, Policy::Stcf]);
        assert!(config.export_json);
    }

    #[test]
    fn test_bad_overrides() {
        assert!(matches!(
            SimulatorConfig::default().with_overrides(lookup(&[(ENV_QUANTUM, "three")])),
            Err(SimulationError::Configuration(_))
        ));
        assert!(matches!(
            SimulatorConfig::default().with_overrides(lookup(&[(ENV_QUANTUM, "0")])),
            Err(SimulationError::Configuration(_))
        ));
        match SimulatorConfig::default().with_overrides(lookup(&[(ENV_POLICIES, "fifo,lottery")])) {
            Err(SimulationError::Configuration(message)) => {
                assert!(message.contains(ENV_POLICIES));
                assert!(message.contains("lottery"));
            }
            other => panic!("expected a configuration error, got {:?}", other),
        }
        assert!(SimulatorConfig::default()
            .with_overrides(lookup(&[(ENV_POLICIES, " , ")]))
            .is_err());
    }

    #[test]
    fn test_from_json() {
        let config = SimulatorConfig::from_json(r#"{"quantum": 5, "policies": ["sjf"]}"#).unwrap();
        assert_eq!(config.quantum, 5);
        assert_eq!(config.policies, vec![Policy::Sjf]);
        assert!(!config.export_json);

        assert!(SimulatorConfig::from_json(r#"{"quantum": -1}"#).is_err());
        assert!(SimulatorConfig::from_json("{").is_err());
    }
}
