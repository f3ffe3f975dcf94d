//! Sexual / inappropriate content. No contextual override, no tier relief.

use super::Scan;
use crate::types::{SafetyViolation, Severity, ViolationType};

/// Flag every sexual-content phrase as critical.
#[must_use]
pub fn check(scan: &Scan<'_>) -> Vec<SafetyViolation> {
    scan.hits(&scan.policy.blocklist.sexual)
        .map(|phrase| {
            SafetyViolation::new(
                ViolationType::SexualContent,
                Severity::Critical,
                format!("Inappropriate sexual content detected: '{phrase}'"),
                "Remove inappropriate content immediately",
            )
            .at(phrase)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyTables;
    use crate::types::{AgeRating, ContentContext, ContentType, ModerationLevel};

    #[test]
    fn critical_for_every_tier() {
        let policy = PolicyTables::default();
        for rating in AgeRating::ALL {
            let ctx = ContentContext::new(rating, ContentType::Story, ModerationLevel::Relaxed);
            let v = check(&Scan::new("Adam and Eve were naked in the garden, says the Bible", &ctx, &policy));
            assert_eq!(v.len(), 1, "tier {rating}");
            assert_eq!(v[0].severity, Severity::Critical);
        }
    }
}
