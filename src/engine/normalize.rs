//! Title normalization and role-dependent synonym correction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::domain::Role;

static SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9\s\-]").expect("symbol pattern compiles"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Normalizes a raw event title for rule matching.
///
/// Strips every character that is not a letter, digit, whitespace, or
/// hyphen (source data decorates titles with markers like `($)`),
/// collapses whitespace runs to a single space, and trims. A missing
/// title yields the empty string; this function never fails.
///
/// Normalization is idempotent. Lower-casing is the caller's job: the
/// canonical matching key is the lower-cased normalized title.
///
/// # Examples
///
/// ```
/// use rota_rust::engine::normalize::normalize_title;
///
/// assert_eq!(normalize_title(Some("  Gold 3 ($)  ")), "Gold 3");
/// assert_eq!(normalize_title(Some("Blue\t3-1")), "Blue 3-1");
/// assert_eq!(normalize_title(None), "");
/// ```
pub fn normalize_title(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let stripped = SYMBOLS.replace_all(raw, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Rewrites role-dependent duty synonyms to the canonical vocabulary.
///
/// The same underlying duty is labeled differently in source data
/// depending on who is assigned: for MD rosters, the "gray N collaborator"
/// spellings are rewritten to "gray N md" before dispatch. A no-op for
/// APP. Expects the lower-cased normalized title.
pub fn apply_role_synonyms(title: &str, role: Role) -> String {
    match role {
        Role::Md => title
            .replace("gray 1 collaborator", "gray 1 md")
            .replace("gray 2 collaborator", "gray 2 md"),
        Role::App => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_symbols_and_collapses_whitespace() {
        assert_eq!(normalize_title(Some("Gold 1 ($)")), "Gold 1");
        assert_eq!(normalize_title(Some("Blue   3-1!!")), "Blue 3-1");
        assert_eq!(normalize_title(Some("\tSilver \n 2 ")), "Silver 2");
    }

    #[test]
    fn keeps_letters_digits_and_hyphens() {
        assert_eq!(normalize_title(Some("blue 3-2")), "blue 3-2");
        assert_eq!(normalize_title(Some("Gray 1 Collaborator")), "Gray 1 Collaborator");
    }

    #[test]
    fn missing_title_yields_empty_string() {
        assert_eq!(normalize_title(None), "");
        assert_eq!(normalize_title(Some("")), "");
        assert_eq!(normalize_title(Some("   ")), "");
    }

    #[test]
    fn md_synonyms_rewrite_gray_collaborators() {
        assert_eq!(
            apply_role_synonyms("gray 1 collaborator", Role::Md),
            "gray 1 md"
        );
        assert_eq!(
            apply_role_synonyms("gray 2 collaborator", Role::Md),
            "gray 2 md"
        );
        // Unrelated titles pass through untouched.
        assert_eq!(apply_role_synonyms("gold 3", Role::Md), "gold 3");
    }

    #[test]
    fn app_synonyms_are_a_no_op() {
        assert_eq!(
            apply_role_synonyms("gray 1 collaborator", Role::App),
            "gray 1 collaborator"
        );
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in ".{0,64}") {
            let once = normalize_title(Some(&raw));
            let twice = normalize_title(Some(&once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_normalized_titles_carry_no_symbols(raw in ".{0,64}") {
            let normalized = normalize_title(Some(&raw));
            prop_assert!(normalized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-'));
            prop_assert!(!normalized.starts_with(' '));
            prop_assert!(!normalized.ends_with(' '));
        }
    }
}
