//! Rotation-cycle phase computation.
//!
//! The rota repeats on a fixed 4-day cycle. A single anchor date with a
//! known phase number pins the cycle to the calendar; every other date's
//! phase follows from its signed day offset against that anchor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Length of the rotation cycle in days.
pub const CYCLE_LEN: i64 = 4;

/// Position of a date within the 4-day rotation cycle.
///
/// The wrapped number is always in `1..=4`; values are produced by
/// [`phase_of`] or by checked construction via [`Phase::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phase(u8);

impl Phase {
    /// Checked constructor; `None` unless `number` is in `1..=4`.
    pub fn new(number: u8) -> Option<Self> {
        (1..=CYCLE_LEN as u8).contains(&number).then_some(Self(number))
    }

    /// The phase number, in `1..=4`.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index into a per-phase row, in `0..=3`.
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Phases 1 and 3 — the pair of cycle days on which several alternating
    /// rules flip the other way.
    pub fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }
}

/// Anchor pinning the rotation cycle to the calendar.
///
/// `date` is defined to fall on phase `phase`; the cycle extends
/// periodically in both directions from there, with no expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleAnchor {
    pub date: NaiveDate,
    pub phase: u8,
}

impl CycleAnchor {
    pub fn new(date: NaiveDate, phase: u8) -> Self {
        Self { date, phase }
    }
}

/// Computes the cycle phase of `date` relative to `anchor`.
///
/// The signed day delta is reduced with floor-modulo semantics
/// (`rem_euclid`), so dates before the anchor wrap into `1..=4` exactly
/// like dates after it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rota_rust::engine::cycle::{phase_of, CycleAnchor};
///
/// let anchor = CycleAnchor::new(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(), 2);
/// assert_eq!(phase_of(anchor.date, &anchor).number(), 2);
///
/// let day_before = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
/// assert_eq!(phase_of(day_before, &anchor).number(), 1);
/// ```
pub fn phase_of(date: NaiveDate, anchor: &CycleAnchor) -> Phase {
    let delta = date.signed_duration_since(anchor.date).num_days();
    let number = (delta + i64::from(anchor.phase) - 1).rem_euclid(CYCLE_LEN) + 1;
    Phase(number as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    fn standard_anchor() -> CycleAnchor {
        CycleAnchor::new(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(), 2)
    }

    #[test]
    fn anchor_date_maps_to_anchor_phase() {
        let anchor = standard_anchor();
        assert_eq!(phase_of(anchor.date, &anchor).number(), 2);
    }

    #[test]
    fn phases_advance_daily_and_wrap() {
        let anchor = standard_anchor();
        let base = anchor.date;

        let numbers: Vec<u8> = (0..8)
            .map(|offset| {
                let date = base.checked_add_days(Days::new(offset)).unwrap();
                phase_of(date, &anchor).number()
            })
            .collect();

        assert_eq!(numbers, vec![2, 3, 4, 1, 2, 3, 4, 1]);
    }

    #[test]
    fn dates_before_anchor_wrap_with_floor_modulo() {
        let anchor = standard_anchor();

        // One day before the anchor must still land in 1..=4.
        let prev = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(phase_of(prev, &anchor).number(), 1);

        let week_before = NaiveDate::from_ymd_opt(2025, 6, 24).unwrap();
        assert_eq!(phase_of(week_before, &anchor).number(), 3);

        let year_before = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let n = phase_of(year_before, &anchor).number();
        assert!((1..=4).contains(&n));
    }

    #[test]
    fn checked_phase_constructor_rejects_out_of_range() {
        assert!(Phase::new(0).is_none());
        assert_eq!(Phase::new(1).unwrap().number(), 1);
        assert_eq!(Phase::new(4).unwrap().number(), 4);
        assert!(Phase::new(5).is_none());
    }

    #[test]
    fn odd_phases_are_one_and_three() {
        assert!(Phase::new(1).unwrap().is_odd());
        assert!(!Phase::new(2).unwrap().is_odd());
        assert!(Phase::new(3).unwrap().is_odd());
        assert!(!Phase::new(4).unwrap().is_odd());
    }

    proptest! {
        #[test]
        fn prop_phase_always_in_range(offset in -20_000i64..20_000i64) {
            let anchor = standard_anchor();
            let date = anchor.date + chrono::Duration::days(offset);
            let n = phase_of(date, &anchor).number();
            prop_assert!((1..=4).contains(&n));
        }

        #[test]
        fn prop_phase_is_four_day_periodic(offset in -20_000i64..20_000i64) {
            let anchor = standard_anchor();
            let date = anchor.date + chrono::Duration::days(offset);
            let shifted = date + chrono::Duration::days(CYCLE_LEN);
            prop_assert_eq!(phase_of(date, &anchor), phase_of(shifted, &anchor));
        }

        #[test]
        fn prop_consecutive_days_advance_by_one(offset in -20_000i64..20_000i64) {
            let anchor = standard_anchor();
            let date = anchor.date + chrono::Duration::days(offset);
            let next = date + chrono::Duration::days(1);
            let expected = phase_of(date, &anchor).number() % 4 + 1;
            prop_assert_eq!(phase_of(next, &anchor).number(), expected);
        }
    }
}
