//! Month/year grouping of the poster collection for the list view.

use chrono::NaiveDate;

use crate::poster::Poster;

/// A run of posters sharing the same "Month YYYY" label.
#[derive(Debug)]
pub struct MonthGroup {
    /// Display label, e.g. `March 2024`.
    pub label: String,
    pub posters: Vec<Poster>,
}

/// The "Month YYYY" group label for a date.
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Partition posters into month groups.
///
/// Groups appear in the order their label is first encountered, so a
/// date-sorted input yields chronologically ordered groups as a side effect
/// of the input order. Poster order within a group is preserved.
#[must_use]
pub fn group_by_month(posters: Vec<Poster>) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for poster in posters {
        let label = month_label(poster.date);
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.posters.push(poster),
            None => groups.push(MonthGroup {
                label,
                posters: vec![poster],
            }),
        }
    }
    groups
}
