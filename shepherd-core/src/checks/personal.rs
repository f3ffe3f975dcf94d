//! Personal-information and contact-information detection.

use regex::Regex;

use super::Scan;
use crate::error::Result;
use crate::policy::ContactPatterns;
use crate::types::{SafetyViolation, Severity, ViolationType};

/// Compiled contact-information patterns.
#[derive(Debug, Clone)]
pub struct ContactDetector {
    /// Email-address pattern.
    email: Regex,
    /// Phone-number pattern (US formats by default).
    phone: Regex,
}

impl ContactDetector {
    /// Compile the patterns from the policy tables.
    ///
    /// # Errors
    /// Returns `ShepherdError::InvalidPattern` if either pattern is invalid.
    pub fn new(patterns: &ContactPatterns) -> Result<Self> {
        Ok(Self {
            email: Regex::new(&patterns.email)?,
            phone: Regex::new(&patterns.phone)?,
        })
    }

    /// One critical violation per pattern kind that matches.
    #[must_use]
    pub fn scan(&self, content: &str) -> Vec<SafetyViolation> {
        let mut violations = Vec::new();

        if let Some(m) = self.email.find(content) {
            violations.push(
                SafetyViolation::new(
                    ViolationType::ContactInformation,
                    Severity::Critical,
                    "Email address detected",
                    "Remove email address",
                )
                .at(m.as_str()),
            );
        }

        if let Some(m) = self.phone.find(content) {
            violations.push(
                SafetyViolation::new(
                    ViolationType::ContactInformation,
                    Severity::Critical,
                    "Phone number detected",
                    "Remove phone number",
                )
                .at(m.as_str()),
            );
        }

        violations
    }
}

/// Flag personal-information phrases, then append regex contact matches.
///
/// The two are additive: "email me at a@b.com" yields both a
/// `personal_information` and a `contact_information` violation.
#[must_use]
pub fn check(scan: &Scan<'_>, detector: &ContactDetector) -> Vec<SafetyViolation> {
    let mut violations: Vec<SafetyViolation> = scan
        .hits(&scan.policy.blocklist.personal_information)
        .map(|phrase| {
            SafetyViolation::new(
                ViolationType::PersonalInformation,
                Severity::Critical,
                format!("Personal information request detected: '{phrase}'"),
                "Remove personal information requests",
            )
            .at(phrase)
        })
        .collect();

    violations.extend(detector.scan(scan.content));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyTables;
    use crate::types::{AgeRating, ContentContext, ContentType, ModerationLevel};

    fn run(content: &str) -> Vec<SafetyViolation> {
        let policy = PolicyTables::default();
        let detector = ContactDetector::new(&policy.contact_patterns).unwrap();
        let ctx = ContentContext::new(AgeRating::Adult, ContentType::Story, ModerationLevel::Relaxed);
        check(&Scan::new(content, &ctx, &policy), &detector)
    }

    #[test]
    fn email_regex() {
        let v = run("contact me at test@example.com");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].violation_type, ViolationType::ContactInformation);
        assert_eq!(v[0].location.as_deref(), Some("test@example.com"));
    }

    #[test]
    fn phone_regex_us_formats() {
        for number in ["(555) 123-4567", "555-123-4567", "555.123.4567", "5551234567"] {
            let v = run(&format!("call {number}"));
            assert_eq!(v.len(), 1, "{number}");
            assert_eq!(v[0].location.as_deref(), Some(number));
        }
    }

    #[test]
    fn keyword_and_regex_are_additive() {
        let v = run("my email is kid@example.org");
        let types: Vec<_> = v.iter().map(|x| x.violation_type).collect();
        assert_eq!(
            types,
            vec![ViolationType::PersonalInformation, ViolationType::ContactInformation]
        );
    }

    #[test]
    fn invalid_pattern_rejected() {
        let patterns = ContactPatterns {
            email: "(".to_string(),
            ..ContactPatterns::default()
        };
        assert!(ContactDetector::new(&patterns).is_err());
    }
}
