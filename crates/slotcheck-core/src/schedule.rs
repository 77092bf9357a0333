//! The schedule draft model a scheduling form edits in place.
//!
//! A draft is an ordered list of days, each pairing a calendar date with
//! ordered time slots and a weekly-repeat flag. The validators read the
//! draft as an immutable snapshot; all mutation stays with the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::{opt_hhmm, TimeOfDay};

/// Longest span a single slot may cover, in minutes.
pub const MAX_SLOT_MINUTES: u32 = 60;

/// One contiguous interval inside a single day.
///
/// Either end may be unset while the user is still filling the form; only
/// complete slots participate in conflict and duration checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "opt_hhmm", default)]
    pub start: Option<TimeOfDay>,
    #[serde(with = "opt_hhmm", default)]
    pub end: Option<TimeOfDay>,
}

impl TimeSlot {
    pub fn new(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Self {
        Self { start, end }
    }

    /// Both ends are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Span in minutes, when both ends are set and the range is ascending.
    pub fn duration_minutes(&self) -> Option<u32> {
        let start = self.start?.minutes();
        let end = self.end?.minutes();
        (end > start).then(|| end - start)
    }

    /// The slot spans more than [`MAX_SLOT_MINUTES`].
    ///
    /// Inverted or incomplete ranges are not duration issues; the conflict
    /// check owns those cases.
    pub fn exceeds_max_duration(&self) -> bool {
        self.duration_minutes()
            .is_some_and(|minutes| minutes > MAX_SLOT_MINUTES)
    }
}

/// A calendar date paired with its time slots and a weekly-repeat flag.
///
/// `weekly` is carried through for the caller; the validators never consult
/// it. A day without a date is skipped by every check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
    #[serde(default)]
    pub weekly: bool,
}

impl DaySchedule {
    pub fn new(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            slots: Vec::new(),
            weekly: false,
        }
    }
}

/// The full draft for one scheduling-form session.
///
/// Created empty (or from an existing record) when the form opens, mutated
/// in place as the user edits, and discarded on close or submit. Nothing in
/// this crate persists it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCollection {
    #[serde(default)]
    pub days: Vec<DaySchedule>,
}

impl ScheduleCollection {
    pub fn new() -> Self {
        Self::default()
    }
}
