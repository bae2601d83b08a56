//! Immutable rule configuration for the rota engine.
//!
//! All lookup tables and cycle constants live in a single [`RotaConfig`]
//! value: the cycle anchor, the seasonal blue-period calendar, the
//! fixed-shift color list for MD rosters, and the per-family rotation
//! tables. A config is constructed once at process start — either the
//! built-in [`RotaConfig::standard`] rule set or a TOML file — and shared
//! by read-only reference; nothing in it is ever mutated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::domain::{DatePeriod, ShiftLabel};
use crate::engine::cycle::{phase_of, CycleAnchor, Phase, CYCLE_LEN};

/// Shift labels for one rotation-table row, one label per cycle phase.
///
/// Total over all four phases by construction: a row cannot exist with a
/// phase missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseRow([ShiftLabel; 4]);

impl PhaseRow {
    pub fn new(labels: [ShiftLabel; 4]) -> Self {
        Self(labels)
    }

    /// The label this row assigns on `phase`.
    pub fn for_phase(&self, phase: Phase) -> ShiftLabel {
        self.0[phase.index()]
    }
}

/// Rotation table mapping a group-suffix key to its per-phase labels.
///
/// # Examples
///
/// ```
/// use rota_rust::config::RotaConfig;
/// use rota_rust::engine::cycle::Phase;
/// use rota_rust::core::domain::ShiftLabel;
///
/// let table = &RotaConfig::standard().rotations.ypbb;
/// let phase1 = Phase::new(1).unwrap();
/// assert_eq!(table.lookup("1-1", phase1), Some(ShiftLabel::Early));
/// assert_eq!(table.lookup("9-9", phase1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationTable(HashMap<String, PhaseRow>);

impl RotationTable {
    /// Builds a table from `(suffix, labels)` rows.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, [ShiftLabel; 4])>,
    {
        Self(
            rows.into_iter()
                .map(|(suffix, labels)| (suffix.to_string(), PhaseRow::new(labels)))
                .collect(),
        )
    }

    /// Looks up the label for `suffix` on `phase`; `None` for an unknown
    /// suffix.
    pub fn lookup(&self, suffix: &str, phase: Phase) -> Option<ShiftLabel> {
        self.0.get(suffix).map(|row| row.for_phase(phase))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The three rotation tables of the rule set.
///
/// `ypbb` serves the yellow/purple/blue/bronze/orange families, `green`
/// the green family, and `mist_scu` is a single row keyed directly by
/// phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSet {
    pub ypbb: RotationTable,
    pub green: RotationTable,
    pub mist_scu: PhaseRow,
}

/// Complete rule configuration for the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaConfig {
    pub anchor: CycleAnchor,
    #[serde(default)]
    pub special_blue_periods: Vec<DatePeriod>,
    pub fixed_md_colors: Vec<String>,
    pub rotations: RotationSet,
}

impl RotaConfig {
    /// The built-in standard rule set.
    ///
    /// Constructed once behind a lazy static and handed out as a shared
    /// reference; every classifier built without an explicit config uses
    /// this instance.
    pub fn standard() -> &'static RotaConfig {
        static STANDARD: Lazy<RotaConfig> = Lazy::new(build_standard);
        &STANDARD
    }

    /// Parses a config from TOML and validates it.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: RotaConfig =
            toml::from_str(raw).context("Failed to parse rota config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read rota config {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&raw)
    }

    /// Checks structural invariants of the rule set.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=CYCLE_LEN as u8).contains(&self.anchor.phase),
            "anchor phase {} is outside 1..={}",
            self.anchor.phase,
            CYCLE_LEN
        );
        for period in &self.special_blue_periods {
            ensure!(
                period.start <= period.end,
                "special blue period ends ({}) before it starts ({})",
                period.end,
                period.start
            );
        }
        ensure!(!self.rotations.ypbb.is_empty(), "ypbb rotation table is empty");
        ensure!(!self.rotations.green.is_empty(), "green rotation table is empty");
        Ok(())
    }

    /// Cycle phase of `date` under this config's anchor.
    pub fn phase_of(&self, date: NaiveDate) -> Phase {
        phase_of(date, &self.anchor)
    }

    /// Whether `date` falls inside any special blue period, boundaries
    /// included.
    pub fn in_special_blue_period(&self, date: NaiveDate) -> bool {
        self.special_blue_periods.iter().any(|p| p.contains(date))
    }

    /// Whether a normalized-lowercased title starts with one of the colors
    /// that resolve to a fixed shift for MD rosters.
    pub fn is_fixed_md_color(&self, title: &str) -> bool {
        self.fixed_md_colors.iter().any(|c| title.starts_with(c.as_str()))
    }
}

fn build_standard() -> RotaConfig {
    use ShiftLabel::{Early as E, Late as L, Middle as M};

    RotaConfig {
        anchor: CycleAnchor::new(ymd(2025, 7, 1), 2),
        special_blue_periods: vec![
            DatePeriod::new(ymd(2025, 7, 7), ymd(2025, 8, 3)),
            DatePeriod::new(ymd(2025, 9, 29), ymd(2025, 10, 26)),
            DatePeriod::new(ymd(2026, 1, 5), ymd(2026, 2, 1)),
            DatePeriod::new(ymd(2026, 4, 6), ymd(2026, 5, 3)),
        ],
        fixed_md_colors: ["yellow", "purple", "blue", "bronze", "green", "orange"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        rotations: RotationSet {
            ypbb: RotationTable::from_rows([
                ("1-1", [E, M, L, M]),
                ("1-2", [M, L, M, E]),
                ("2-1", [L, M, E, M]),
                ("2-2", [M, E, M, L]),
                ("3", [M, E, M, L]),
            ]),
            green: RotationTable::from_rows([
                ("1", [E, M, L, M]),
                ("2", [M, L, M, E]),
                ("3", [L, M, E, M]),
            ]),
            mist_scu: PhaseRow::new([M, E, M, L]),
        },
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("rule-set dates are valid calendar dates")
}
