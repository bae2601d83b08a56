//! # Rota Rust
//!
//! Shift rota classification engine.
//!
//! This crate assigns a work-shift category (Early, Middle, Late, Fixed,
//! or Unrecognized) to calendar events based on a rotating 4-day cycle
//! and a set of naming-convention rules encoded in lookup tables. Event
//! titles name a color group and a rotation suffix ("Gold 3",
//! "Blue 3-1", "Mist SCU"); the engine resolves the title, the event
//! date's cycle phase, and the staffing role into a shift label and its
//! wall-clock window.
//!
//! ## Features
//!
//! - **Classification**: deterministic title + date + role -> shift label
//! - **Rotation cycle**: 4-day phase computation against a fixed anchor,
//!   correct for dates before and after it
//! - **Rule configuration**: immutable tables, built-in standard rule set
//!   or TOML-loaded, constructed once and shared read-only
//! - **Batch processing**: per-record classification with independent
//!   rejection reasons and summary statistics
//!
//! ## Architecture
//!
//! - [`core`]: domain vocabulary (shift labels, roles, periods,
//!   rejection reasons)
//! - [`config`]: the immutable rule configuration
//! - [`engine`]: phase computation, normalization, and rule dispatch
//! - [`pipeline`]: batch classification of raw roster rows
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rota_rust::{classify, time_range, Role, ShiftLabel};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
//! let shift = classify("Gold 3", date, Role::App);
//! assert_eq!(shift, ShiftLabel::Early);
//!
//! let window = time_range(shift).unwrap();
//! assert_eq!(window.start.to_string(), "06:45:00");
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod pipeline;

pub use crate::config::RotaConfig;
pub use crate::core::domain::{RejectReason, Role, ShiftLabel, ShiftWindow};
pub use crate::engine::ShiftClassifier;
pub use crate::pipeline::ClassifyPipeline;

use chrono::NaiveDate;

/// Classifies a single event against the built-in standard rule set.
///
/// Convenience wrapper over [`ShiftClassifier::standard`]; see
/// [`ShiftClassifier::classify`] for the evaluation order.
pub fn classify(title: &str, date: NaiveDate, role: Role) -> ShiftLabel {
    ShiftClassifier::standard().classify(title, date, role)
}

/// Returns the wall-clock window for a shift label, or `None` for
/// `Unrecognized`.
pub fn time_range(shift: ShiftLabel) -> Option<ShiftWindow> {
    shift.time_range()
}
