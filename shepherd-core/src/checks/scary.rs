//! Frightening content, checked for the `all` and `children` tiers only.

use super::Scan;
use crate::context;
use crate::types::{SafetyViolation, Severity, ViolationType};

/// Flag scary terms for young audiences.
///
/// Inside biblical framing the term is downgraded and the editor is asked to
/// reframe it; outside it the term is critical.
#[must_use]
pub fn check(scan: &Scan<'_>) -> Vec<SafetyViolation> {
    let rating = scan.context.age_rating;
    if !rating.is_young_audience() {
        return Vec::new();
    }

    scan.hits(&scan.policy.blocklist.scary)
        .map(|term| {
            let violation = if scan.biblical {
                SafetyViolation::new(
                    ViolationType::ScaryContent,
                    context::framed_scary_severity(rating),
                    format!("Potentially frightening content in biblical context: '{term}'"),
                    "Reframe to emphasize God's protection and victory over evil",
                )
            } else {
                SafetyViolation::new(
                    ViolationType::ScaryContent,
                    Severity::Critical,
                    format!("Scary content inappropriate for '{rating}' audience: '{term}'"),
                    "Remove or replace with age-appropriate content",
                )
            };
            violation.at(term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyTables;
    use crate::types::{AgeRating, ContentContext, ContentType, ModerationLevel};

    fn run(content: &str, rating: AgeRating) -> Vec<SafetyViolation> {
        let policy = PolicyTables::default();
        let ctx = ContentContext::new(rating, ContentType::Story, ModerationLevel::Strict);
        check(&Scan::new(content, &ctx, &policy))
    }

    #[test]
    fn skipped_for_older_tiers() {
        assert!(run("a ghost story", AgeRating::Youth).is_empty());
        assert!(run("a ghost story", AgeRating::Adult).is_empty());
    }

    #[test]
    fn critical_without_framing() {
        let v = run("a ghost story", AgeRating::Children);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].severity, Severity::Critical);
    }

    #[test]
    fn downgraded_with_framing() {
        let content = "Jesus cast out the demon";
        assert_eq!(run(content, AgeRating::All)[0].severity, Severity::High);
        assert_eq!(run(content, AgeRating::Children)[0].severity, Severity::Medium);
    }
}
