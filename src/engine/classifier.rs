//! The shift classifier: normalization, overrides, and family dispatch.

use chrono::NaiveDate;

use crate::config::RotaConfig;
use crate::core::domain::{Role, ShiftLabel};
use crate::engine::dispatch::{
    apply_family, family_of_title, gray_mist_rule, mist_scu_rule,
};
use crate::engine::normalize::{apply_role_synonyms, normalize_title};

/// Stateless classifier over an immutable rule configuration.
///
/// Each call to [`classify`](Self::classify) is independent; the only
/// shared data is the borrowed [`RotaConfig`], which is never mutated, so
/// a single classifier may be used from any number of threads.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rota_rust::engine::classifier::ShiftClassifier;
/// use rota_rust::core::domain::{Role, ShiftLabel};
///
/// let classifier = ShiftClassifier::standard();
/// let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
///
/// assert_eq!(
///     classifier.classify("Gold 3", date, Role::App),
///     ShiftLabel::Early
/// );
/// assert_eq!(
///     classifier.classify("Unknown Event XYZ", date, Role::App),
///     ShiftLabel::Unrecognized
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShiftClassifier<'c> {
    rules: &'c RotaConfig,
}

impl ShiftClassifier<'static> {
    /// Classifier over the built-in standard rule set.
    pub fn standard() -> Self {
        Self::new(RotaConfig::standard())
    }
}

impl<'c> ShiftClassifier<'c> {
    pub fn new(rules: &'c RotaConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'c RotaConfig {
        self.rules
    }

    /// Assigns a shift label to an event title on a date, for a role.
    ///
    /// Total over its inputs: any title — empty, decorated, or
    /// unknown — resolves to a label, with `Unrecognized` for everything
    /// the rule families decline. Evaluation order:
    ///
    /// 1. normalize the title, lower-case it, rewrite role synonyms;
    /// 2. MD-only fixed-color override;
    /// 3. prefix families (gold, silver, blue, yellow/purple/bronze/
    ///    orange, green) — first structural match settles the title;
    /// 4. gray / mist-transplant containment rule;
    /// 5. mist-SCU prefix rule.
    pub fn classify(&self, title: &str, date: NaiveDate, role: Role) -> ShiftLabel {
        let normalized = normalize_title(Some(title)).to_lowercase();
        let title = apply_role_synonyms(&normalized, role);
        let phase = self.rules.phase_of(date);

        if role == Role::Md && self.rules.is_fixed_md_color(&title) {
            return ShiftLabel::Fixed;
        }

        if let Some(family) = family_of_title(&title) {
            return apply_family(family, &title, date, phase, self.rules);
        }

        if let Some(label) = gray_mist_rule(&title, phase) {
            return label;
        }

        if let Some(label) = mist_scu_rule(&title, phase, self.rules) {
            return label;
        }

        ShiftLabel::Unrecognized
    }
}
