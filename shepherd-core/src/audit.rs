//! Moderation records for callers that persist verdicts.
//!
//! The engine itself stores nothing. These helpers turn a verdict into the
//! moderation-status field a content record carries, an audit entry for a
//! moderation log, and a batch summary for review dashboards. All of them
//! are caller-owned values; no global counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::{Result, ShepherdError};
use crate::types::{
    AgeRating, ContentContext, ContentType, ModerationLevel, SafetyValidationResult, Severity,
    ViolationType,
};

/// Publication status derived from a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    /// Valid and needs no guidance.
    Approved,
    /// Valid, but a parent or class leader should accompany it.
    NeedsReview,
    /// Failed validation.
    Rejected,
    /// Validation could not complete; a human must decide.
    Escalated,
}

impl ModerationStatus {
    /// Map a verdict to a status.
    #[must_use]
    pub fn from_result(result: &SafetyValidationResult) -> Self {
        if result.is_manual_review() {
            Self::Escalated
        } else if !result.is_valid {
            Self::Rejected
        } else if result.requires_parental_guidance {
            Self::NeedsReview
        } else {
            Self::Approved
        }
    }
}

/// One moderation decision, ready for a moderation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationRecord {
    /// Unique record ID.
    pub id: Uuid,
    /// When the decision was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Audience tier.
    pub age_rating: AgeRating,
    /// Kind of content.
    pub content_type: ContentType,
    /// Strictness applied.
    pub moderation_level: ModerationLevel,
    /// Derived status.
    pub status: ModerationStatus,
    /// Number of violations.
    pub violation_count: usize,
    /// Number of warnings.
    pub warning_count: usize,
    /// Most serious violation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_severity: Option<Severity>,
}

impl ModerationRecord {
    /// Record a verdict now.
    #[must_use]
    pub fn new(context: &ContentContext, result: &SafetyValidationResult) -> Self {
        Self::at(context, result, Utc::now())
    }

    /// Record a verdict at a given time.
    #[must_use]
    pub fn at(
        context: &ContentContext,
        result: &SafetyValidationResult,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            age_rating: context.age_rating,
            content_type: context.content_type,
            moderation_level: context.moderation_level,
            status: ModerationStatus::from_result(result),
            violation_count: result.violations.len(),
            warning_count: result.warnings.len(),
            highest_severity: result.highest_severity(),
        }
    }

    /// Serialize to a JSON line.
    ///
    /// # Errors
    /// Returns `ShepherdError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ShepherdError::Serialization(e.to_string()))
    }
}

/// Aggregate counts over many verdicts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationSummary {
    /// Verdicts seen.
    pub total: u64,
    /// Verdicts per status.
    pub by_status: BTreeMap<ModerationStatus, u64>,
    /// Violations per category.
    pub by_violation_type: BTreeMap<ViolationType, u64>,
    /// Violations per severity.
    pub by_severity: BTreeMap<Severity, u64>,
    /// Warnings seen.
    pub warnings: u64,
}

impl ModerationSummary {
    /// Empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one verdict into the summary.
    pub fn record(&mut self, result: &SafetyValidationResult) {
        self.total += 1;
        *self
            .by_status
            .entry(ModerationStatus::from_result(result))
            .or_default() += 1;
        for violation in &result.violations {
            *self.by_violation_type.entry(violation.violation_type).or_default() += 1;
            *self.by_severity.entry(violation.severity).or_default() += 1;
        }
        self.warnings += result.warnings.len() as u64;
    }

    /// Count for one status.
    #[must_use]
    pub fn count(&self, status: ModerationStatus) -> u64 {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Share of verdicts that were approved outright (0.0 when empty).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn approval_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(ModerationStatus::Approved) as f64 / self.total as f64
    }
}

impl<'a> FromIterator<&'a SafetyValidationResult> for ModerationSummary {
    fn from_iter<I: IntoIterator<Item = &'a SafetyValidationResult>>(iter: I) -> Self {
        let mut summary = Self::new();
        for result in iter {
            summary.record(result);
        }
        summary
    }
}
