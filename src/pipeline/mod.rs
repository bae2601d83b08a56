//! Batch classification of raw roster records.
//!
//! Upstream collaborators (file parsers, calendar fetchers) hand over
//! rows of raw title + raw date string; the pipeline parses each date,
//! classifies each title, and splits the batch into assignments and
//! per-record rejections. Rows are independent: one malformed row never
//! affects any other, and the pipeline itself never fails on record
//! content.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::RotaConfig;
use crate::core::domain::{RejectReason, Role, ShiftLabel};
use crate::engine::classifier::ShiftClassifier;

/// A raw roster row as produced by an upstream source.
///
/// `title` is optional because source data sometimes carries blank event
/// cells; a missing title classifies like an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub title: Option<String>,
    pub date: String,
}

/// A classified roster row with its derived shift window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub event: String,
    pub date: NaiveDate,
    pub shift: ShiftLabel,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// A rejected roster row with the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedEvent {
    pub event: String,
    pub reason: RejectReason,
}

/// Tallies computed while processing a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    pub total_events: usize,
    pub classified: usize,
    pub rejected_invalid_date: usize,
    pub rejected_unrecognized: usize,
    pub early: usize,
    pub middle: usize,
    pub late: usize,
    pub fixed: usize,
}

/// Result of processing one batch of raw events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessResult {
    pub assignments: Vec<ShiftAssignment>,
    pub rejected: Vec<RejectedEvent>,
    pub stats: ProcessStats,
}

/// Batch classifier over a rule configuration and a fixed role.
///
/// # Examples
///
/// ```
/// use rota_rust::core::domain::Role;
/// use rota_rust::pipeline::{ClassifyPipeline, RawEvent};
///
/// let pipeline = ClassifyPipeline::new(Role::App);
/// let events = vec![
///     RawEvent { title: Some("Gold 1".into()), date: "2025-07-04".into() },
///     RawEvent { title: Some("Mystery".into()), date: "2025-07-04".into() },
///     RawEvent { title: Some("Gold 1".into()), date: "not a date".into() },
/// ];
///
/// let result = pipeline.process(&events);
/// assert_eq!(result.assignments.len(), 1);
/// assert_eq!(result.rejected.len(), 2);
/// ```
pub struct ClassifyPipeline<'c> {
    rules: &'c RotaConfig,
    role: Role,
}

impl ClassifyPipeline<'static> {
    /// Pipeline over the built-in standard rule set.
    pub fn new(role: Role) -> Self {
        Self {
            rules: RotaConfig::standard(),
            role,
        }
    }
}

impl<'c> ClassifyPipeline<'c> {
    pub fn with_rules(rules: &'c RotaConfig, role: Role) -> Self {
        Self { rules, role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Classifies every row of the batch independently.
    pub fn process(&self, events: &[RawEvent]) -> ProcessResult {
        let classifier = ShiftClassifier::new(self.rules);
        let mut result = ProcessResult::default();
        result.stats.total_events = events.len();

        for event in events {
            let name = event.title.clone().unwrap_or_default();

            let Some(date) = parse_event_date(&event.date) else {
                log::debug!("rejecting {:?}: unparseable date {:?}", name, event.date);
                result.stats.rejected_invalid_date += 1;
                result.rejected.push(RejectedEvent {
                    event: name,
                    reason: RejectReason::InvalidDate,
                });
                continue;
            };

            let shift = classifier.classify(event.title.as_deref().unwrap_or(""), date, self.role);
            let Some(window) = shift.time_range() else {
                log::debug!("rejecting {:?}: no rule matched", name);
                result.stats.rejected_unrecognized += 1;
                result.rejected.push(RejectedEvent {
                    event: name,
                    reason: RejectReason::UnrecognizedFormat,
                });
                continue;
            };

            result.stats.classified += 1;
            match shift {
                ShiftLabel::Early => result.stats.early += 1,
                ShiftLabel::Middle => result.stats.middle += 1,
                ShiftLabel::Late => result.stats.late += 1,
                ShiftLabel::Fixed => result.stats.fixed += 1,
                ShiftLabel::Unrecognized => unreachable!("unrecognized shifts have no window"),
            }
            result.assignments.push(ShiftAssignment {
                event: name,
                date,
                shift,
                start: window.start,
                end: window.end,
            });
        }

        log::info!(
            "classified {} of {} events for {} ({} rejected)",
            result.stats.classified,
            result.stats.total_events,
            self.role,
            result.rejected.len()
        );
        result
    }

    /// Deserializes a JSON array of raw events and processes it.
    pub fn process_json_str(&self, json: &str) -> Result<ProcessResult> {
        let events: Vec<RawEvent> =
            serde_json::from_str(json).context("Failed to deserialize events JSON")?;
        Ok(self.process(&events))
    }
}

/// Accepted raw date layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m/%d/%y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a raw date cell into a calendar date.
///
/// Returns `None` when no accepted layout matches or the string names an
/// impossible date; the caller rejects the row rather than guessing.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    None
}
