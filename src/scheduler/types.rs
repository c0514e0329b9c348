/*!
 * Scheduler Types
 * Policy selection and round-robin time quantum
 */

use crate::core::errors::ValidationError;
use crate::core::types::Tick;
use crate::process::validate_quantum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Quantum used when the caller does not supply one
pub const DEFAULT_QUANTUM: Tick = 3;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-in-first-out by arrival, non-preemptive
    Fifo,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Shortest time to completion first, preemptive at unit granularity
    Stcf,
    /// Round-robin with a fixed quantum
    RoundRobin,
}

impl Policy {
    /// Every policy, in the order the demo runs them
    pub const ALL: [Policy; 4] = [Self::Fifo, Self::Sjf, Self::Stcf, Self::RoundRobin];

    /// Canonical lowercase name
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Sjf => "sjf",
            Self::Stcf => "stcf",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Short uppercase name used in reports
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Sjf => "SJF",
            Self::Stcf => "STCF",
            Self::RoundRobin => "RR",
        }
    }

    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Stcf | Self::RoundRobin)
    }

    #[inline]
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fifo" | "fcfs" => Ok(Self::Fifo),
            "sjf" => Ok(Self::Sjf),
            "stcf" | "srtf" => Ok(Self::Stcf),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(ValidationError::UnknownPolicy(s.to_string())),
        }
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time slice, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: Tick) -> Result<Self, ValidationError> {
        validate_quantum(ticks).map(Self)
    }

    #[inline(always)]
    pub const fn get(&self) -> Tick {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}
