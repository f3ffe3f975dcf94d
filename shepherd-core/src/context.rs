//! Contextual overrides and severity scoring.
//!
//! A flagged term inside clearly scriptural framing is downgraded rather than
//! blocked outright. Violence is scored on a 0–3 scale and compared against
//! the tier's gate; severities are tier-specific.

use crate::policy::ContextVocabulary;
use crate::types::{AgeRating, Severity};

/// Highest value on the violence scale.
pub const MAX_VIOLENCE_LEVEL: u8 = 3;

/// Whether lower-cased content contains any of `phrases`.
#[must_use]
pub fn contains_any(lowered: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| lowered.contains(p.as_str()))
}

/// Phrases from `phrases` that occur in lower-cased content, in table order.
pub fn matches<'a>(lowered: &'a str, phrases: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
    phrases
        .iter()
        .map(String::as_str)
        .filter(move |p| lowered.contains(p))
}

/// Whether the content is framed biblically.
#[must_use]
pub fn has_biblical_context(lowered: &str, vocabulary: &ContextVocabulary) -> bool {
    contains_any(lowered, &vocabulary.biblical_indicators)
}

/// Score how graphic a violent term is in this content.
///
/// - `die` / `death`: 1 when a hope phrase is present, else 2.
/// - `battle` / `war`: 2 in biblical framing, else 3.
/// - `kill` / `murder`: 3.
/// - anything else: 1.
#[must_use]
pub fn violence_level(term: &str, lowered: &str, vocabulary: &ContextVocabulary) -> u8 {
    match term {
        "die" | "death" => {
            if contains_any(lowered, &vocabulary.hope_phrases) {
                1
            } else {
                2
            }
        }
        "battle" | "war" => {
            if has_biblical_context(lowered, vocabulary) {
                2
            } else {
                3
            }
        }
        "kill" | "murder" => MAX_VIOLENCE_LEVEL,
        _ => 1,
    }
}

/// Severity of a violence level that exceeds the tier's gate.
#[must_use]
pub fn violence_severity(age_rating: AgeRating, level: u8) -> Severity {
    match age_rating {
        AgeRating::All if level > 1 => Severity::Critical,
        AgeRating::All => Severity::High,
        AgeRating::Children if level > 2 => Severity::Critical,
        AgeRating::Children => Severity::Medium,
        AgeRating::Youth if level > 3 => Severity::High,
        AgeRating::Youth | AgeRating::Adult => Severity::Low,
    }
}

/// Suggested action for a violence level exceeding `max`.
#[must_use]
pub fn violence_action(level: u8, max: u8) -> &'static str {
    if level.saturating_sub(max) == 1 {
        "Add context and age warning"
    } else {
        "Remove or significantly modify violent content"
    }
}

/// Severity of profanity for a tier.
#[must_use]
pub const fn language_severity(age_rating: AgeRating) -> Severity {
    match age_rating {
        AgeRating::All => Severity::Critical,
        _ => Severity::High,
    }
}

/// Severity of a scary term in biblical framing. Outside it, always critical.
#[must_use]
pub const fn framed_scary_severity(age_rating: AgeRating) -> Severity {
    match age_rating {
        AgeRating::All => Severity::High,
        _ => Severity::Medium,
    }
}

/// Severity of a restricted concept for a tier.
#[must_use]
pub const fn restricted_concept_severity(age_rating: AgeRating) -> Severity {
    match age_rating {
        AgeRating::All => Severity::High,
        _ => Severity::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> ContextVocabulary {
        ContextVocabulary::default()
    }

    #[test]
    fn death_softened_by_resurrection() {
        let v = vocab();
        assert_eq!(violence_level("death", "jesus rose after death in the resurrection", &v), 1);
        assert_eq!(violence_level("death", "the death of the king", &v), 2);
        assert_eq!(violence_level("die", "all flesh shall die but have eternal life", &v), 1);
    }

    #[test]
    fn battle_softened_by_biblical_framing() {
        let v = vocab();
        assert_eq!(violence_level("battle", "the lord fought the battle", &v), 2);
        assert_eq!(violence_level("war", "the war was long", &v), 3);
    }

    #[test]
    fn kill_is_always_maximal() {
        let v = vocab();
        assert_eq!(violence_level("kill", "god said do not kill", &v), 3);
        assert_eq!(violence_level("murder", "murder", &v), 3);
    }

    #[test]
    fn other_terms_default_to_one() {
        assert_eq!(violence_level("sword", "a sword", &vocab()), 1);
    }

    #[test]
    fn violence_severity_by_tier() {
        assert_eq!(violence_severity(AgeRating::All, 1), Severity::High);
        assert_eq!(violence_severity(AgeRating::All, 2), Severity::Critical);
        assert_eq!(violence_severity(AgeRating::Children, 2), Severity::Medium);
        assert_eq!(violence_severity(AgeRating::Children, 3), Severity::Critical);
        assert_eq!(violence_severity(AgeRating::Youth, 3), Severity::Low);
        assert_eq!(violence_severity(AgeRating::Adult, 3), Severity::Low);
    }

    #[test]
    fn action_depends_on_excess() {
        assert_eq!(violence_action(2, 1), "Add context and age warning");
        assert_eq!(violence_action(3, 1), "Remove or significantly modify violent content");
    }

    #[test]
    fn matches_keeps_table_order() {
        let phrases = vec!["b".to_string(), "a".to_string(), "z".to_string()];
        let found: Vec<&str> = matches("abc", &phrases).collect();
        assert_eq!(found, vec!["b", "a"]);
    }
}
