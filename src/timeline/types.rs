/*!
 * Timeline Types
 * Labels and intervals on the logical time axis
 */

use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const IDLE_LABEL: &str = "IDLE";

/// What occupied the CPU during an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// A process was executing
    Process(Pid),
    /// No process was eligible to run
    Idle,
}

impl Label {
    #[inline]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    pub const fn pid(&self) -> Option<Pid> {
        match self {
            Self::Process(pid) => Some(*pid),
            Self::Idle => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(pid) => write!(f, "P{}", pid),
            Self::Idle => f.write_str(IDLE_LABEL),
        }
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == IDLE_LABEL {
            return Ok(Self::Idle);
        }
        s.strip_prefix('P')
            .and_then(|pid| pid.parse().ok())
            .map(Self::Process)
            .ok_or_else(|| format!("invalid timeline label '{}'", s))
    }
}

impl Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Label>().map_err(serde::de::Error::custom)
    }
}

/// Half-open interval `[start, end)` occupied by one label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub label: Label,
    pub start: Tick,
    pub end: Tick,
}

impl TimelineEntry {
    #[inline]
    #[must_use]
    pub const fn new(label: Label, start: Tick, end: Tick) -> Self {
        Self { label, start, end }
    }

    #[inline]
    pub const fn duration(&self) -> Tick {
        self.end - self.start
    }
}
