//! Date-picker support: which dates are already taken by other days.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::schedule::ScheduleCollection;

/// Dates assigned to days other than `current_day_idx`, for a date picker to
/// disable while that day is being edited.
///
/// The current day's own date is never included, even when another day
/// coincidentally shares it, so the user can keep the date already selected.
///
/// # Panics
/// Panics if `current_day_idx` is out of range.
pub fn excluded_dates(
    collection: &ScheduleCollection,
    current_day_idx: usize,
) -> BTreeSet<NaiveDate> {
    let own_date = collection.days[current_day_idx].date;

    let mut taken: BTreeSet<NaiveDate> = collection
        .days
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != current_day_idx)
        .filter_map(|(_, day)| day.date)
        .collect();

    if let Some(own) = own_date {
        taken.remove(&own);
    }

    taken
}
