//! Ordered rule families for title dispatch.
//!
//! Dispatch is an explicit first-match-wins walk over the family order
//! below. A title that structurally matches a family (by prefix) is
//! settled by that family alone: a sub-rule miss — missing numeric
//! suffix, unknown rotation suffix, too few tokens — yields
//! `Unrecognized` and never falls through to a later family. The
//! gray/mist-transplant containment rule and the mist-SCU rule only see
//! titles that matched no prefix family.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RotaConfig;
use crate::core::domain::ShiftLabel;
use crate::engine::cycle::Phase;

/// Prefix-matched rule family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Gold,
    Silver,
    Blue,
    /// yellow / purple / bronze / orange — share the ypbb rotation table.
    Ypbo,
    Green,
}

/// Family priority order. First structural match wins.
const FAMILY_ORDER: &[(&str, Family)] = &[
    ("gold", Family::Gold),
    ("silver", Family::Silver),
    ("blue", Family::Blue),
    ("yellow", Family::Ypbo),
    ("purple", Family::Ypbo),
    ("bronze", Family::Ypbo),
    ("orange", Family::Ypbo),
    ("green", Family::Green),
];

/// Resolves the rule family of a normalized-lowercased title, if any.
pub(crate) fn family_of_title(title: &str) -> Option<Family> {
    FAMILY_ORDER
        .iter()
        .find(|(prefix, _)| title.starts_with(prefix))
        .map(|(_, family)| *family)
}

/// Applies the matched family's rules. Always settles the title: a
/// sub-rule miss is `Unrecognized`, not a signal to try another family.
pub(crate) fn apply_family(
    family: Family,
    title: &str,
    date: NaiveDate,
    phase: Phase,
    rules: &RotaConfig,
) -> ShiftLabel {
    match family {
        Family::Gold => gold_rule(title, phase),
        Family::Silver => silver_rule(title),
        Family::Blue => blue_rule(title, date, phase, rules),
        Family::Ypbo => ypbo_rule(title, phase, rules),
        Family::Green => green_rule(title, phase, rules),
    }
}

fn gold_rule(title: &str, phase: Phase) -> ShiftLabel {
    let Some(n) = first_integer(title) else {
        return ShiftLabel::Unrecognized;
    };
    match n {
        1 => ShiftLabel::Early,
        3 | 5 => early_on_odd(phase),
        2 | 4 => middle_on_odd(phase),
        n if n >= 6 => ShiftLabel::Middle,
        _ => ShiftLabel::Unrecognized,
    }
}

fn silver_rule(title: &str) -> ShiftLabel {
    // Missing number defaults to the first silver slot.
    match first_integer(title).unwrap_or(1) {
        1 => ShiftLabel::Early,
        _ => ShiftLabel::Middle,
    }
}

fn blue_rule(title: &str, date: NaiveDate, phase: Phase, rules: &RotaConfig) -> ShiftLabel {
    let Some(suffix) = suffix_token(title) else {
        return ShiftLabel::Unrecognized;
    };
    if rules.in_special_blue_period(date) {
        match suffix {
            "1" => early_on_odd(phase),
            "3-1" | "3-2" => middle_on_odd(phase),
            _ => ShiftLabel::Unrecognized,
        }
    } else {
        rules
            .rotations
            .ypbb
            .lookup(suffix, phase)
            .unwrap_or(ShiftLabel::Unrecognized)
    }
}

fn ypbo_rule(title: &str, phase: Phase, rules: &RotaConfig) -> ShiftLabel {
    suffix_token(title)
        .and_then(|suffix| rules.rotations.ypbb.lookup(suffix, phase))
        .unwrap_or(ShiftLabel::Unrecognized)
}

fn green_rule(title: &str, phase: Phase, rules: &RotaConfig) -> ShiftLabel {
    suffix_token(title)
        .and_then(|suffix| rules.rotations.green.lookup(suffix, phase))
        .unwrap_or(ShiftLabel::Unrecognized)
}

/// Substring-containment rule for gray duties and mist transplant.
///
/// Checked only after every prefix family has declined the title.
pub(crate) fn gray_mist_rule(title: &str, phase: Phase) -> Option<ShiftLabel> {
    if title.contains("gray 1 md") || title.contains("mist transplant") {
        return Some(early_on_odd(phase));
    }
    if title.contains("gray 2 md") || title.contains("gray 3 app") {
        return Some(middle_on_odd(phase));
    }
    None
}

/// Mist-SCU prefix rule: the single-row table keyed directly by phase.
pub(crate) fn mist_scu_rule(title: &str, phase: Phase, rules: &RotaConfig) -> Option<ShiftLabel> {
    title
        .starts_with("mist scu")
        .then(|| rules.rotations.mist_scu.for_phase(phase))
}

/// Early on phases 1 and 3, Middle otherwise.
fn early_on_odd(phase: Phase) -> ShiftLabel {
    if phase.is_odd() {
        ShiftLabel::Early
    } else {
        ShiftLabel::Middle
    }
}

/// Middle on phases 1 and 3, Early otherwise.
fn middle_on_odd(phase: Phase) -> ShiftLabel {
    if phase.is_odd() {
        ShiftLabel::Middle
    } else {
        ShiftLabel::Early
    }
}

static FIRST_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit pattern compiles"));

/// First embedded run of digits in the title, as an integer.
///
/// Digit runs too long for u64 saturate to `u64::MAX`, which every
/// numbered rule treats the same as any other large slot number.
fn first_integer(title: &str) -> Option<u64> {
    FIRST_INT
        .find(title)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
}

/// Second whitespace-separated token of the title, the rotation-suffix
/// position for the color families.
fn suffix_token(title: &str) -> Option<&str> {
    title.split_whitespace().nth(1)
}
