//! Restricted concepts per audience tier.

use super::Scan;
use crate::context;
use crate::error::Result;
use crate::types::{SafetyViolation, ViolationType};

/// Flag every restricted concept of the context's tier.
///
/// # Errors
/// Returns `ShepherdError::MissingAgeTier` when the tables have no guideline
/// for the context's tier.
pub fn check(scan: &Scan<'_>) -> Result<Vec<SafetyViolation>> {
    let rating = scan.context.age_rating;
    let guideline = scan.policy.guideline(rating)?;
    let severity = context::restricted_concept_severity(rating);

    Ok(scan
        .hits(&guideline.restricted_concepts)
        .map(|concept| {
            SafetyViolation::new(
                ViolationType::AgeInappropriate,
                severity,
                format!("Concept '{concept}' is restricted for '{rating}' audience"),
                "Simplify or remove concept for target age group",
            )
            .at(concept)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyTables;
    use crate::types::{AgeRating, ContentContext, ContentType, ModerationLevel, Severity};

    fn run(content: &str, rating: AgeRating) -> Vec<SafetyViolation> {
        let policy = PolicyTables::default();
        let ctx = ContentContext::new(rating, ContentType::Quiz, ModerationLevel::Strict);
        check(&Scan::new(content, &ctx, &policy)).unwrap()
    }

    #[test]
    fn restricted_for_all_is_high() {
        let v = run("The wages of sin", AgeRating::All);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].severity, Severity::High);
    }

    #[test]
    fn words_containing_sin_are_not_restricted() {
        assert!(run("Noah was singing to the animals.", AgeRating::All).is_empty());
        assert!(run("Jesus spoke about hell", AgeRating::All).is_empty());
    }

    #[test]
    fn restricted_for_youth_is_medium() {
        let v = run("a scene of graphic violence", AgeRating::Youth);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].severity, Severity::Medium);
    }

    #[test]
    fn adult_has_no_restrictions() {
        assert!(run("graphic violence, sin and death", AgeRating::Adult).is_empty());
    }
}
