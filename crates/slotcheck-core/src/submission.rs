//! Save-gate: the aggregate verdict computed before a draft may be submitted.
//!
//! Scans the entire draft and reduces it to a single accept/reject decision.
//! Pure decision logic; surfacing the message to the user and performing the
//! actual submission belong to the caller.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::conflict::has_conflict;
use crate::schedule::ScheduleCollection;

/// Why a draft was rejected. Conflicts always win over duration issues,
/// which win over an effectively empty draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectReason {
    Conflict,
    Duration,
    Empty,
}

impl RejectReason {
    /// The message a form should surface for this rejection.
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::Conflict => "resolve time conflicts before saving",
            RejectReason::Duration => "fix slots exceeding 1 hour",
            RejectReason::Empty => "add at least one complete time slot",
        }
    }
}

/// Outcome of [`validate_for_submission`].
///
/// Serializes as `{"ok": true}` or `{"ok": false, "reason": "..."}` so a
/// thin transport layer can forward it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionVerdict {
    Accepted,
    Rejected(RejectReason),
}

impl SubmissionVerdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, SubmissionVerdict::Accepted)
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            SubmissionVerdict::Accepted => None,
            SubmissionVerdict::Rejected(reason) => Some(*reason),
        }
    }
}

impl Serialize for SubmissionVerdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SubmissionVerdict::Accepted => {
                let mut state = serializer.serialize_struct("SubmissionVerdict", 1)?;
                state.serialize_field("ok", &true)?;
                state.end()
            }
            SubmissionVerdict::Rejected(reason) => {
                let mut state = serializer.serialize_struct("SubmissionVerdict", 2)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("reason", reason)?;
                state.end()
            }
        }
    }
}

/// Scan the whole draft and decide whether it may be submitted.
///
/// Every complete slot on a dated day is counted and probed for conflicts
/// and duration issues, then the priority policy applies: any conflict
/// rejects first, then any over-long slot, then a draft with zero complete
/// slots. Incomplete slots and undated days are ignored, so a draft of only
/// half-filled rows rejects as empty rather than slipping through.
pub fn validate_for_submission(collection: &ScheduleCollection) -> SubmissionVerdict {
    let mut complete_slots = 0usize;
    let mut any_conflict = false;
    let mut any_duration = false;

    for (d, day) in collection.days.iter().enumerate() {
        if day.date.is_none() {
            continue;
        }
        for (s, slot) in day.slots.iter().enumerate() {
            if !slot.is_complete() {
                continue;
            }
            complete_slots += 1;
            any_conflict = any_conflict || has_conflict(collection, d, s);
            any_duration = any_duration || slot.exceeds_max_duration();
        }
    }

    if any_conflict {
        SubmissionVerdict::Rejected(RejectReason::Conflict)
    } else if any_duration {
        SubmissionVerdict::Rejected(RejectReason::Duration)
    } else if complete_slots == 0 {
        SubmissionVerdict::Rejected(RejectReason::Empty)
    } else {
        SubmissionVerdict::Accepted
    }
}
