//! Profanity check.

use super::Scan;
use crate::context;
use crate::types::{SafetyViolation, ViolationType};

/// The one profanity entry that scriptural framing excuses.
const SCRIPTURAL_EXCEPTION: &str = "hell";

/// Flag every profanity phrase in the content.
///
/// "hell" inside biblical framing is skipped silently.
#[must_use]
pub fn check(scan: &Scan<'_>) -> Vec<SafetyViolation> {
    let severity = context::language_severity(scan.context.age_rating);
    scan.hits(&scan.policy.blocklist.profanity)
        .filter(|phrase| !(*phrase == SCRIPTURAL_EXCEPTION && scan.biblical))
        .map(|phrase| {
            SafetyViolation::new(
                ViolationType::InappropriateLanguage,
                severity,
                format!("Inappropriate language detected: '{phrase}'"),
                "Replace with age-appropriate language",
            )
            .at(phrase)
        })
        .collect()
}
