//! Advisory warnings. These never affect validity.

use super::Scan;
use crate::types::{SafetyWarning, WarningType};

/// Complex-concept warnings (young audiences), then emotional-impact
/// warnings (every tier).
#[must_use]
pub fn check(scan: &Scan<'_>) -> Vec<SafetyWarning> {
    let vocab = &scan.policy.warnings;
    let mut warnings = Vec::new();

    if scan.context.age_rating.is_young_audience() {
        warnings.extend(scan.hits(&vocab.complex_concepts).map(|term| SafetyWarning {
            warning_type: WarningType::ComplexConcept,
            description: format!("Complex theological concept: '{term}'"),
            recommendation: "Provide a simple explanation or discussion guide".to_string(),
        }));
    }

    warnings.extend(scan.hits(&vocab.emotional_terms).map(|term| SafetyWarning {
        warning_type: WarningType::EmotionalImpact,
        description: format!("Emotional content: '{term}'"),
        recommendation: "Include comfort and reassurance for young readers".to_string(),
    }));

    warnings
}
