//! Core type definitions for the Shepherd moderation engine.
//!
//! Inputs ([`ContentContext`]) and outputs ([`SafetyValidationResult`]) are
//! plain serializable data. JSON field names are camelCase to match the
//! platform's content API; enum values are `snake_case`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ModerationConfig;

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Coarse audience classification driving every policy threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRating {
    /// Suitable for every audience, including the youngest readers.
    All,
    /// Primary-school children.
    Children,
    /// Teenagers.
    Youth,
    /// Adults.
    Adult,
}

impl AgeRating {
    /// Every tier, youngest audience first.
    pub const ALL: [Self; 4] = [Self::All, Self::Children, Self::Youth, Self::Adult];

    /// The `snake_case` name used in configuration and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Children => "children",
            Self::Youth => "youth",
            Self::Adult => "adult",
        }
    }

    /// Whether scary-content and complex-concept checks apply to this tier.
    #[must_use]
    pub const fn is_young_audience(self) -> bool {
        matches!(self, Self::All | Self::Children)
    }
}

impl fmt::Display for AgeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of content being moderated. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// A narrative Bible story.
    Story,
    /// A quiz question or answer.
    Quiz,
    /// A written prayer.
    Prayer,
    /// Image alt-text.
    Image,
    /// Audio transcript.
    Audio,
    /// Video transcript or description.
    Video,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Story => "story",
            Self::Quiz => "quiz",
            Self::Prayer => "prayer",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
        };
        f.write_str(s)
    }
}

/// How strictly `high`-severity violations are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationLevel {
    /// High and critical violations both fail validation.
    Strict,
    /// Same pass/fail behaviour as `Strict`.
    #[default]
    Moderate,
    /// Only critical violations fail validation.
    Relaxed,
}

impl fmt::Display for ModerationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Strict => "strict",
            Self::Moderate => "moderate",
            Self::Relaxed => "relaxed",
        };
        f.write_str(s)
    }
}

/// Everything the validator needs to know about where content will be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentContext {
    /// Audience tier.
    pub age_rating: AgeRating,
    /// Kind of content.
    pub content_type: ContentType,
    /// Strictness applied to `high` violations.
    pub moderation_level: ModerationLevel,
    /// Age of the viewing user, when known. Not consumed by the checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_age: Option<u8>,
    /// Whether parental controls are active. Not consumed by the checks.
    #[serde(default)]
    pub parental_controls: bool,
}

impl ContentContext {
    /// Build a context with the auxiliary fields unset.
    #[must_use]
    pub fn new(
        age_rating: AgeRating,
        content_type: ContentType,
        moderation_level: ModerationLevel,
    ) -> Self {
        Self {
            age_rating,
            content_type,
            moderation_level,
            user_age: None,
            parental_controls: false,
        }
    }

    /// Build a context using the configured default moderation level.
    #[must_use]
    pub fn from_defaults(
        age_rating: AgeRating,
        content_type: ContentType,
        config: &ModerationConfig,
    ) -> Self {
        Self::new(age_rating, content_type, config.default_moderation_level)
    }

    /// Set the viewing user's age.
    #[must_use]
    pub fn with_user_age(mut self, age: u8) -> Self {
        self.user_age = Some(age);
        self
    }

    /// Set whether parental controls are active.
    #[must_use]
    pub fn with_parental_controls(mut self, enabled: bool) -> Self {
        self.parental_controls = enabled;
        self
    }

    /// Copy of this context with a different content type.
    #[must_use]
    pub fn retyped(&self, content_type: ContentType) -> Self {
        Self {
            content_type,
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Violations
// ---------------------------------------------------------------------------

/// Category of a safety violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Profanity or rude language.
    InappropriateLanguage,
    /// Violence above the tier's gate.
    ViolentContent,
    /// Sexual or otherwise inappropriate material.
    SexualContent,
    /// Frightening material for young audiences.
    ScaryContent,
    /// Requests for or disclosure of personal information.
    PersonalInformation,
    /// An email address or phone number.
    ContactInformation,
    /// Links leaving the platform.
    ExternalLinks,
    /// A concept restricted for the audience tier.
    AgeInappropriate,
    /// Discriminatory language.
    Discrimination,
    /// Bullying.
    Bullying,
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InappropriateLanguage => "inappropriate_language",
            Self::ViolentContent => "violent_content",
            Self::SexualContent => "sexual_content",
            Self::ScaryContent => "scary_content",
            Self::PersonalInformation => "personal_information",
            Self::ContactInformation => "contact_information",
            Self::ExternalLinks => "external_links",
            Self::AgeInappropriate => "age_inappropriate",
            Self::Discrimination => "discrimination",
            Self::Bullying => "bullying",
        };
        f.write_str(s)
    }
}

/// Ordered severity scale. `Critical` always fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational.
    Low,
    /// Needs parental guidance.
    Medium,
    /// Fails validation unless moderation is relaxed.
    High,
    /// Always fails validation.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// A single finding that may fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyViolation {
    /// Violation category.
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    /// How serious the finding is.
    pub severity: Severity,
    /// Human-readable explanation.
    pub description: String,
    /// The phrase or text that triggered the finding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// What an editor should do about it.
    pub suggested_action: String,
}

impl SafetyViolation {
    /// Create a violation without a location.
    pub fn new(
        violation_type: ViolationType,
        severity: Severity,
        description: impl Into<String>,
        suggested_action: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            severity,
            description: description.into(),
            location: None,
            suggested_action: suggested_action.into(),
        }
    }

    /// Attach the matched text.
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// Category of an advisory warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Theological vocabulary young readers may not follow.
    ComplexConcept,
    /// Suggest a parent reads along.
    ParentalGuidanceRecommended,
    /// Culturally sensitive material.
    CulturalSensitivity,
    /// Emotionally heavy wording.
    EmotionalImpact,
    /// Good material for a follow-up conversation.
    DiscussionStarter,
}

/// An annotation that never affects `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyWarning {
    /// Warning category.
    #[serde(rename = "type")]
    pub warning_type: WarningType,
    /// Human-readable explanation.
    pub description: String,
    /// Suggested editorial follow-up.
    pub recommendation: String,
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Description carried by the synthetic manual-review violation.
pub const VALIDATION_ERROR_DESCRIPTION: &str = "Validation error occurred";

/// Suggested action carried by the synthetic manual-review violation.
pub const MANUAL_REVIEW_ACTION: &str = "Manual review required";

/// The structured verdict returned by every validator entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyValidationResult {
    /// Whether the content may be published.
    pub is_valid: bool,
    /// Findings, in check order.
    pub violations: Vec<SafetyViolation>,
    /// Advisory annotations.
    pub warnings: Vec<SafetyWarning>,
    /// False when any violation is `age_inappropriate`.
    pub age_appropriate: bool,
    /// True when any violation is `medium` or `high`.
    pub requires_parental_guidance: bool,
    /// Reserved for redacted spans. Currently always empty.
    pub blocked_content: Vec<String>,
}

impl SafetyValidationResult {
    /// Derive the verdict flags from the collected findings.
    #[must_use]
    pub fn from_findings(
        violations: Vec<SafetyViolation>,
        warnings: Vec<SafetyWarning>,
        moderation_level: ModerationLevel,
    ) -> Self {
        let has_critical = violations.iter().any(|v| v.severity == Severity::Critical);
        let has_high = violations.iter().any(|v| v.severity == Severity::High);
        let is_valid =
            !has_critical && (moderation_level == ModerationLevel::Relaxed || !has_high);

        let age_appropriate = !violations
            .iter()
            .any(|v| v.violation_type == ViolationType::AgeInappropriate);

        // Critical alone deliberately does not set this flag.
        let requires_parental_guidance = violations
            .iter()
            .any(|v| matches!(v.severity, Severity::Medium | Severity::High));

        Self {
            is_valid,
            violations,
            warnings,
            age_appropriate,
            requires_parental_guidance,
            blocked_content: Vec::new(),
        }
    }

    /// The result returned when validation itself could not complete.
    #[must_use]
    pub fn manual_review() -> Self {
        Self {
            is_valid: false,
            violations: vec![SafetyViolation::new(
                ViolationType::InappropriateLanguage,
                Severity::Critical,
                VALIDATION_ERROR_DESCRIPTION,
                MANUAL_REVIEW_ACTION,
            )],
            warnings: Vec::new(),
            age_appropriate: false,
            requires_parental_guidance: true,
            blocked_content: Vec::new(),
        }
    }

    /// Whether this is the synthetic manual-review result rather than a
    /// genuine content finding.
    #[must_use]
    pub fn is_manual_review(&self) -> bool {
        matches!(
            self.violations.as_slice(),
            [v] if v.description == VALIDATION_ERROR_DESCRIPTION
                && v.suggested_action == MANUAL_REVIEW_ACTION
        )
    }

    /// Most serious severity among the violations.
    #[must_use]
    pub fn highest_severity(&self) -> Option<Severity> {
        self.violations.iter().map(|v| v.severity).max()
    }

    /// Violations of one category.
    pub fn violations_of(
        &self,
        violation_type: ViolationType,
    ) -> impl Iterator<Item = &SafetyViolation> {
        self.violations
            .iter()
            .filter(move |v| v.violation_type == violation_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(severity: Severity) -> SafetyViolation {
        SafetyViolation::new(ViolationType::ViolentContent, severity, "test", "fix it")
    }

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn critical_fails_even_when_relaxed() {
        let result = SafetyValidationResult::from_findings(
            vec![violation(Severity::Critical)],
            vec![],
            ModerationLevel::Relaxed,
        );
        assert!(!result.is_valid);
        assert!(!result.requires_parental_guidance);
    }

    #[test]
    fn high_passes_only_when_relaxed() {
        for (level, expected) in [
            (ModerationLevel::Strict, false),
            (ModerationLevel::Moderate, false),
            (ModerationLevel::Relaxed, true),
        ] {
            let result =
                SafetyValidationResult::from_findings(vec![violation(Severity::High)], vec![], level);
            assert_eq!(result.is_valid, expected, "level {level}");
            assert!(result.requires_parental_guidance);
        }
    }

    #[test]
    fn low_does_not_require_guidance() {
        let result = SafetyValidationResult::from_findings(
            vec![violation(Severity::Low)],
            vec![],
            ModerationLevel::Strict,
        );
        assert!(result.is_valid);
        assert!(!result.requires_parental_guidance);
        assert!(result.age_appropriate);
    }

    #[test]
    fn manual_review_shape() {
        let result = SafetyValidationResult::manual_review();
        assert!(!result.is_valid);
        assert!(!result.age_appropriate);
        assert!(result.requires_parental_guidance);
        assert!(result.warnings.is_empty());
        assert!(result.blocked_content.is_empty());
        assert!(result.is_manual_review());
        assert_eq!(result.highest_severity(), Some(Severity::Critical));
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let result = SafetyValidationResult::manual_review();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["violations"][0]["type"], "inappropriate_language");
        assert_eq!(json["violations"][0]["suggestedAction"], MANUAL_REVIEW_ACTION);
        assert!(json["violations"][0].get("location").is_none());
    }

    #[test]
    fn retyped_preserves_auxiliary_fields() {
        let ctx = ContentContext::new(AgeRating::Children, ContentType::Story, ModerationLevel::Strict)
            .with_user_age(7)
            .with_parental_controls(true);
        let image = ctx.retyped(ContentType::Image);
        assert_eq!(image.content_type, ContentType::Image);
        assert_eq!(image.user_age, Some(7));
        assert!(image.parental_controls);
        assert_eq!(image.age_rating, AgeRating::Children);
    }
}
