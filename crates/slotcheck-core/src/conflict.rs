//! Per-slot conflict and duration checks.
//!
//! Two slots conflict when their days carry equal calendar dates (value
//! equality, not index identity) and their half-open minute ranges overlap.
//! Adjacent slots, where one ends exactly when the other starts, are NOT
//! conflicts.

use crate::schedule::ScheduleCollection;

/// Whether the slot at `(day_idx, slot_idx)` overlaps any other slot on the
/// same calendar date.
///
/// Two ranges overlap iff `a.start < b.end && a.end > b.start`, which
/// excludes the adjacent case. An inverted or zero-length range
/// (`end <= start`) is itself reported as a conflict rather than a separate
/// error kind. Days without a date and slots missing either time never
/// conflict.
///
/// # Panics
/// Panics if `day_idx`/`slot_idx` do not address an existing slot; passing
/// stale indexes is a caller bug, not a "no conflict" answer.
pub fn has_conflict(collection: &ScheduleCollection, day_idx: usize, slot_idx: usize) -> bool {
    let day = &collection.days[day_idx];
    let slot = &day.slots[slot_idx];

    let Some(date) = day.date else {
        return false;
    };
    let (Some(start), Some(end)) = (slot.start, slot.end) else {
        return false;
    };

    let target_start = start.minutes();
    let target_end = end.minutes();
    if target_end <= target_start {
        return true;
    }

    for (d, other_day) in collection.days.iter().enumerate() {
        if other_day.date != Some(date) {
            continue;
        }
        for (s, other) in other_day.slots.iter().enumerate() {
            // A slot never conflicts with itself.
            if d == day_idx && s == slot_idx {
                continue;
            }
            let (Some(other_start), Some(other_end)) = (other.start, other.end) else {
                continue;
            };
            if target_start < other_end.minutes() && target_end > other_start.minutes() {
                return true;
            }
        }
    }

    false
}

/// Whether the slot at `(day_idx, slot_idx)` spans more than
/// [`MAX_SLOT_MINUTES`](crate::schedule::MAX_SLOT_MINUTES).
///
/// # Panics
/// Panics if the indexes do not address an existing slot.
pub fn has_excessive_duration(
    collection: &ScheduleCollection,
    day_idx: usize,
    slot_idx: usize,
) -> bool {
    collection.days[day_idx].slots[slot_idx].exceeds_max_duration()
}

/// Combined per-slot flag the form uses to paint a warning next to a slot.
///
/// # Panics
/// Panics if the indexes do not address an existing slot.
pub fn has_issue(collection: &ScheduleCollection, day_idx: usize, slot_idx: usize) -> bool {
    has_conflict(collection, day_idx, slot_idx)
        || has_excessive_duration(collection, day_idx, slot_idx)
}
