//! Time-of-day bucketing for greeting prompts

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Part of the day, derived from the local hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    /// Bucket an hour (0-23) into a day part.
    ///
    /// 5-11 is morning, 12-17 is afternoon, everything else evening.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => DayPart::Morning,
            12..=17 => DayPart::Afternoon,
            _ => DayPart::Evening,
        }
    }

    /// Day part for the current local time
    pub fn now() -> Self {
        Self::from_hour(Local::now().hour())
    }

    /// Lowercase label for prompt interpolation
    pub fn label(&self) -> &'static str {
        match self {
            DayPart::Morning => "morning",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
