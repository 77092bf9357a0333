//! Wall-clock times for schedule slots.
//!
//! Slot times are naive `HH:MM` strings with no timezone or date attached;
//! all overlap and duration math runs on minute offsets from midnight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A naive wall-clock time (hour 0-23, minute 0-59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time, validating component ranges.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidTime` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime(format!(
                "{:02}:{:02} is out of range",
                hour, minute
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, the unit all comparisons run in.
    pub fn minutes(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// Parse an `HH:MM` string (an unpadded hour like `9:30` is accepted).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScheduleError::InvalidTime(s.to_string());
        let (hour_part, minute_part) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour_part.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_part.parse().map_err(|_| invalid())?;
        TimeOfDay::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalize a raw form-field value to minutes since midnight.
///
/// Empty, missing, or unparsable input normalizes to `0`. Callers that can
/// observe an unset field must not read `0` back as midnight; the submission
/// checks count complete slots separately for exactly that reason.
pub fn minutes_since_midnight(raw: Option<&str>) -> u32 {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.parse::<TimeOfDay>().map(|t| t.minutes()).unwrap_or(0),
        _ => 0,
    }
}

/// Serde adapter for optional slot times: an unset time round-trips as `""`,
/// matching the draft JSON a scheduling form produces. `null` and a missing
/// field also read back as unset.
pub(crate) mod opt_hhmm {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TimeOfDay;

    pub fn serialize<S: Serializer>(
        value: &Option<TimeOfDay>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&time.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TimeOfDay>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
