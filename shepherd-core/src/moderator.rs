//! The safety moderator: public entry points for text, image and audio.
//!
//! ## Pipeline
//!
//! 1. **Language** — profanity, with the scriptural "hell" exception
//! 2. **Violence** — scored 0–3 and gated per tier
//! 3. **Sexual** — always critical
//! 4. **Scary** — young audiences only, downgraded in biblical framing
//! 5. **Personal information** — keywords plus email / phone regexes
//! 6. **Age appropriateness** — restricted concepts per tier
//!
//! Warnings are generated alongside. Violations are concatenated in check
//! order, so output ordering is stable for a given input.
//!
//! Validation is total: any internal error becomes the manual-review verdict
//! ([`SafetyValidationResult::manual_review`]) and is logged, never returned.

use tracing::{debug, info, warn};

use crate::checks::{self, ContactDetector, Scan};
use crate::config::ShepherdConfig;
use crate::error::{Result, ShepherdError};
use crate::policy::PolicyTables;
use crate::types::{ContentContext, ContentType, SafetyValidationResult};

/// Stateless content validator over a fixed set of policy tables.
///
/// Holds only read-only data, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct SafetyModerator {
    policy: PolicyTables,
    contacts: ContactDetector,
    log_moderation_events: bool,
}

impl SafetyModerator {
    /// Build a moderator over the given tables.
    ///
    /// # Errors
    /// Returns `ShepherdError::InvalidPattern` if a contact pattern does not
    /// compile.
    pub fn new(policy: PolicyTables) -> Result<Self> {
        let policy = policy.normalized();
        let contacts = ContactDetector::new(&policy.contact_patterns)?;
        Ok(Self {
            policy,
            contacts,
            log_moderation_events: true,
        })
    }

    /// Build a moderator over the built-in tables.
    ///
    /// # Errors
    /// Only fails if the built-in patterns are broken.
    pub fn with_defaults() -> Result<Self> {
        Self::new(PolicyTables::default())
    }

    /// Build a moderator from a loaded configuration.
    ///
    /// # Errors
    /// Returns `ShepherdError::InvalidPattern` if a contact pattern does not
    /// compile.
    pub fn from_config(config: &ShepherdConfig) -> Result<Self> {
        let mut moderator = Self::new(config.policy.clone())?;
        moderator.log_moderation_events = config.moderation.log_moderation_events;
        Ok(moderator)
    }

    /// The (normalized) tables in force.
    #[must_use]
    pub fn policy(&self) -> &PolicyTables {
        &self.policy
    }

    /// Validate free text.
    #[must_use]
    pub fn validate_content(
        &self,
        content: &str,
        context: &ContentContext,
    ) -> SafetyValidationResult {
        self.validate_optional_content(Some(content), context)
    }

    /// Validate text that may be absent. `None` yields the manual-review
    /// verdict.
    #[must_use]
    pub fn validate_optional_content(
        &self,
        content: Option<&str>,
        context: &ContentContext,
    ) -> SafetyValidationResult {
        let outcome = content
            .ok_or(ShepherdError::MissingContent)
            .and_then(|content| self.try_validate_content(content, context));

        match outcome {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    error = %e,
                    age_rating = %context.age_rating,
                    content_type = %context.content_type,
                    "Validation failed, escalating to manual review"
                );
                SafetyValidationResult::manual_review()
            }
        }
    }

    /// Validate image alt-text. The URL is not inspected.
    #[must_use]
    pub fn validate_image(
        &self,
        image_url: &str,
        alt_text: &str,
        context: &ContentContext,
    ) -> SafetyValidationResult {
        debug!(image_url, "Validating image alt-text");
        self.validate_content(alt_text, &context.retyped(ContentType::Image))
    }

    /// Validate an audio transcript.
    #[must_use]
    pub fn validate_audio(
        &self,
        transcript: &str,
        context: &ContentContext,
    ) -> SafetyValidationResult {
        self.validate_content(transcript, &context.retyped(ContentType::Audio))
    }

    /// Run the check pipeline, surfacing internal errors instead of
    /// converting them.
    ///
    /// # Errors
    /// Returns `ShepherdError::MissingAgeTier` if the tables lack an entry
    /// for the context's tier.
    pub fn try_validate_content(
        &self,
        content: &str,
        context: &ContentContext,
    ) -> Result<SafetyValidationResult> {
        let scan = Scan::new(content, context, &self.policy);

        let mut violations = checks::language::check(&scan);
        violations.extend(checks::violence::check(&scan)?);
        violations.extend(checks::inappropriate::check(&scan));
        violations.extend(checks::scary::check(&scan));
        violations.extend(checks::personal::check(&scan, &self.contacts));
        violations.extend(checks::age::check(&scan)?);

        let warnings = checks::warnings::check(&scan);

        let result =
            SafetyValidationResult::from_findings(violations, warnings, context.moderation_level);

        debug!(
            age_rating = %context.age_rating,
            content_type = %context.content_type,
            moderation_level = %context.moderation_level,
            violations = result.violations.len(),
            warnings = result.warnings.len(),
            is_valid = result.is_valid,
            "Content validated"
        );

        if self.log_moderation_events && !result.is_valid {
            info!(
                age_rating = %context.age_rating,
                content_type = %context.content_type,
                highest_severity = ?result.highest_severity(),
                violations = result.violations.len(),
                "Content rejected"
            );
        }

        Ok(result)
    }
}
