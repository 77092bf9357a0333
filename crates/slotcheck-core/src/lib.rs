//! # slotcheck-core
//!
//! Pure validation for class-scheduling drafts: detect time-slot conflicts
//! within a calendar day, flag slots over the one-hour cap, and gate
//! submission of the whole draft.
//!
//! The caller (a scheduling form) owns a mutable [`ScheduleCollection`] and
//! probes it on every edit; every function here reads a snapshot and returns
//! immediately. No I/O, no shared state, nothing async.
//!
//! ## Modules
//!
//! - [`time`] — `HH:MM` wall-clock times and minute normalization
//! - [`schedule`] — the draft model (slots, days, collection)
//! - [`conflict`] — per-slot conflict and duration checks
//! - [`submission`] — the aggregate save-gate verdict
//! - [`dates`] — taken-date set for a date picker
//! - [`error`] — error types

pub mod conflict;
pub mod dates;
pub mod error;
pub mod schedule;
pub mod submission;
pub mod time;

pub use conflict::{has_conflict, has_excessive_duration, has_issue};
pub use dates::excluded_dates;
pub use error::ScheduleError;
pub use schedule::{DaySchedule, ScheduleCollection, TimeSlot, MAX_SLOT_MINUTES};
pub use submission::{validate_for_submission, RejectReason, SubmissionVerdict};
pub use time::{minutes_since_midnight, TimeOfDay};
