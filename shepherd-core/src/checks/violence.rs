//! Violence gating.
//!
//! Each violent term is scored 0–3 and compared against the tier's gate.

use super::Scan;
use crate::context;
use crate::error::Result;
use crate::types::{SafetyViolation, ViolationType};

/// Flag every violent term whose level exceeds the tier's gate.
///
/// # Errors
/// Returns `ShepherdError::MissingAgeTier` when the tables have no gate for
/// the context's tier.
pub fn check(scan: &Scan<'_>) -> Result<Vec<SafetyViolation>> {
    let rating = scan.context.age_rating;
    let max = scan.policy.violence_gate(rating)?.max_violence_level;

    let violations = scan
        .hits(&scan.policy.blocklist.violence)
        .filter_map(|term| {
            let level = context::violence_level(term, &scan.lowered, &scan.policy.context);
            (level > max).then(|| {
                SafetyViolation::new(
                    ViolationType::ViolentContent,
                    context::violence_severity(rating, level),
                    format!(
                        "Violence level {level} exceeds maximum {max} for '{rating}' audience: '{term}'"
                    ),
                    context::violence_action(level, max),
                )
                .at(term)
            })
        })
        .collect();

    Ok(violations)
}
