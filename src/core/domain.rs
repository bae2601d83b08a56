//! Domain models for shift categories, roles, and calendar periods.
//!
//! This module provides the core vocabulary of the rota engine: the shift
//! label assigned to each event, the staffing role a roster is processed
//! for, the wall-clock window a shift occupies, and closed date intervals
//! used for seasonal rule variants.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Work-shift category assigned to a calendar event.
///
/// Every classification resolves to exactly one label. `Unrecognized` is a
/// first-class outcome rather than an error: it marks an event whose title
/// matched no rule family, or matched a family whose sub-rules had no entry
/// for it.
///
/// # Examples
///
/// ```
/// use rota_rust::core::domain::ShiftLabel;
///
/// let window = ShiftLabel::Early.time_range().unwrap();
/// assert_eq!(window.start.to_string(), "06:45:00");
///
/// assert!(ShiftLabel::Unrecognized.time_range().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftLabel {
    Early,
    Middle,
    Late,
    Fixed,
    Unrecognized,
}

impl ShiftLabel {
    /// Returns the wall-clock window for this shift, or `None` for
    /// `Unrecognized`.
    ///
    /// The mapping is a fixed constant table with no date dependency:
    /// Early 06:45-17:00, Middle 08:00-17:00, Late 08:00-18:45,
    /// Fixed 08:00-17:00.
    pub fn time_range(self) -> Option<ShiftWindow> {
        match self {
            ShiftLabel::Early => Some(ShiftWindow::new(hm(6, 45), hm(17, 0))),
            ShiftLabel::Middle => Some(ShiftWindow::new(hm(8, 0), hm(17, 0))),
            ShiftLabel::Late => Some(ShiftWindow::new(hm(8, 0), hm(18, 45))),
            ShiftLabel::Fixed => Some(ShiftWindow::new(hm(8, 0), hm(17, 0))),
            ShiftLabel::Unrecognized => None,
        }
    }

    /// Returns `true` for every label except `Unrecognized`.
    pub fn is_recognized(self) -> bool {
        !matches!(self, ShiftLabel::Unrecognized)
    }
}

impl fmt::Display for ShiftLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftLabel::Early => "Early",
            ShiftLabel::Middle => "Middle",
            ShiftLabel::Late => "Late",
            ShiftLabel::Fixed => "Fixed",
            ShiftLabel::Unrecognized => "Unrecognized",
        };
        f.write_str(name)
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("shift window times are valid wall-clock times")
}

/// Staffing role a roster is processed for.
///
/// The same event title can classify differently per role: some color
/// families resolve to a fixed shift for MD, and a handful of duty names
/// are spelled differently in source data depending on who is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    App,
    Md,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::App => f.write_str("APP"),
            Role::Md => f.write_str("MD"),
        }
    }
}

/// Start and end wall-clock times of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ShiftWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// A closed calendar-date interval, inclusive on both ends.
///
/// Used to describe seasonal rule variants: a date belongs to the period
/// when `start <= date <= end`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rota_rust::core::domain::DatePeriod;
///
/// let period = DatePeriod::new(
///     NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
/// );
///
/// assert!(period.contains(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap()));
/// assert!(period.contains(NaiveDate::from_ymd_opt(2025, 8, 3).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DatePeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `date` falls inside this period, boundaries included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Reason a roster row was rejected instead of producing an assignment.
///
/// Both variants are per-record and non-fatal: one row's rejection never
/// affects the processing of any other row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    /// The raw date string did not parse into a real calendar date; the
    /// row never reached classification.
    #[error("invalid date")]
    InvalidDate,
    /// Classification returned `Unrecognized` for the row's title.
    #[error("unrecognized title format")]
    UnrecognizedFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ranges_match_rota_card() {
        let early = ShiftLabel::Early.time_range().unwrap();
        assert_eq!(early.start, hm(6, 45));
        assert_eq!(early.end, hm(17, 0));

        let middle = ShiftLabel::Middle.time_range().unwrap();
        assert_eq!(middle.start, hm(8, 0));
        assert_eq!(middle.end, hm(17, 0));

        let late = ShiftLabel::Late.time_range().unwrap();
        assert_eq!(late.start, hm(8, 0));
        assert_eq!(late.end, hm(18, 45));

        let fixed = ShiftLabel::Fixed.time_range().unwrap();
        assert_eq!(fixed.start, hm(8, 0));
        assert_eq!(fixed.end, hm(17, 0));

        assert!(ShiftLabel::Unrecognized.time_range().is_none());
    }

    #[test]
    fn recognized_covers_all_but_unrecognized() {
        assert!(ShiftLabel::Early.is_recognized());
        assert!(ShiftLabel::Middle.is_recognized());
        assert!(ShiftLabel::Late.is_recognized());
        assert!(ShiftLabel::Fixed.is_recognized());
        assert!(!ShiftLabel::Unrecognized.is_recognized());
    }

    #[test]
    fn date_period_boundaries_are_inclusive() {
        let period = DatePeriod::new(
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        );

        assert!(period.contains(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
        assert!(period.contains(NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()));
        assert!(period.contains(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()));
    }

    #[test]
    fn role_serde_uses_uppercase_tags() {
        assert_eq!(serde_json::to_string(&Role::App).unwrap(), "\"APP\"");
        assert_eq!(serde_json::to_string(&Role::Md).unwrap(), "\"MD\"");
        assert_eq!(serde_json::from_str::<Role>("\"MD\"").unwrap(), Role::Md);
    }

    #[test]
    fn shift_label_display_matches_serde_tag() {
        assert_eq!(ShiftLabel::Early.to_string(), "Early");
        assert_eq!(
            serde_json::to_string(&ShiftLabel::Early).unwrap(),
            "\"Early\""
        );
    }
}
