//! Policy tables: blocklists, age guidelines, violence gates, vocabularies.
//!
//! The built-in tables below are what the platform ships with. Any part can
//! be replaced from the `[policy]` section of `shepherd.toml`; a replaced
//! table replaces the whole table, so a custom `age_guidelines` map that
//! omits a tier makes contexts for that tier fall through to manual review.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, ShepherdError};
use crate::types::AgeRating;

// ---------------------------------------------------------------------------
// Built-in vocabulary
// ---------------------------------------------------------------------------

const PROFANITY: &[&str] = &["damn", "hell", "crap", "stupid", "idiot", "shut up", "loser"];

const VIOLENCE: &[&str] = &[
    "kill", "murder", "death", "die", "battle", "war", "blood", "sword", "fight", "weapon",
    "attack", "violence",
];

const SEXUAL: &[&str] = &["sexual", "sexy", "naked", "nude", "porn", "seduce", "erotic"];

const SCARY: &[&str] = &[
    "ghost", "monster", "demon", "devil", "nightmare", "evil spirit", "haunted", "zombie",
    "terrifying",
];

const PERSONAL_INFORMATION: &[&str] = &[
    "phone number",
    "address",
    "email",
    "social security",
    "ssn",
    "credit card",
    "password",
    "meet me",
    "my location",
];

const BIBLICAL_INDICATORS: &[&str] = &[
    "bible", "scripture", "jesus", "god", "lord", "christ", "testament", "psalm", "proverb",
    "gospel", "apostle",
];

const HOPE_PHRASES: &[&str] = &["eternal life", "resurrection"];

const COMPLEX_CONCEPTS: &[&str] = &["salvation", "redemption", "sanctification", "trinity"];

const EMOTIONAL_TERMS: &[&str] = &["sad", "crying", "afraid", "worried", "angry"];

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

const PHONE_PATTERN: &str = r"\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}";

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn lowercase_all(words: &mut [String]) {
    for word in words {
        *word = word.to_lowercase();
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Categorized trigger phrases. Matching is case-insensitive substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocklist {
    /// Rude or profane language.
    #[serde(default = "default_profanity")]
    pub profanity: Vec<String>,
    /// Violent terms, scored by the violence heuristic.
    #[serde(default = "default_violence")]
    pub violence: Vec<String>,
    /// Sexual terms. Always critical.
    #[serde(default = "default_sexual")]
    pub sexual: Vec<String>,
    /// Frightening terms, checked for young audiences only.
    #[serde(default = "default_scary")]
    pub scary: Vec<String>,
    /// Personal-information requests or disclosures.
    #[serde(default = "default_personal_information")]
    pub personal_information: Vec<String>,
}

impl Default for Blocklist {
    fn default() -> Self {
        Self {
            profanity: default_profanity(),
            violence: default_violence(),
            sexual: default_sexual(),
            scary: default_scary(),
            personal_information: default_personal_information(),
        }
    }
}

/// Editorial guideline for one audience tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGuideline {
    /// Highest reading complexity level for the tier.
    pub max_complexity_level: u8,
    /// Topics editors may freely cover.
    #[serde(default)]
    pub allowed_topics: Vec<String>,
    /// Concepts that produce an `age_inappropriate` violation.
    #[serde(default)]
    pub restricted_concepts: Vec<String>,
}

/// Violence gate for one audience tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolenceGate {
    /// Highest violence level (0–3) allowed without a violation.
    pub max_violence_level: u8,
    /// Kinds of conflict editors may depict.
    #[serde(default)]
    pub allowed_conflict_types: Vec<String>,
}

/// Words that signal scriptural framing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextVocabulary {
    /// Presence of any of these marks the content as biblical.
    #[serde(default = "default_biblical_indicators")]
    pub biblical_indicators: Vec<String>,
    /// Phrases that soften references to death.
    #[serde(default = "default_hope_phrases")]
    pub hope_phrases: Vec<String>,
}

impl Default for ContextVocabulary {
    fn default() -> Self {
        Self {
            biblical_indicators: default_biblical_indicators(),
            hope_phrases: default_hope_phrases(),
        }
    }
}

/// Words that produce advisory warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningVocabulary {
    /// Theological terms young readers may need explained.
    #[serde(default = "default_complex_concepts")]
    pub complex_concepts: Vec<String>,
    /// Emotionally heavy words.
    #[serde(default = "default_emotional_terms")]
    pub emotional_terms: Vec<String>,
}

impl Default for WarningVocabulary {
    fn default() -> Self {
        Self {
            complex_concepts: default_complex_concepts(),
            emotional_terms: default_emotional_terms(),
        }
    }
}

/// Regex sources for contact-information detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatterns {
    /// Email-address pattern.
    #[serde(default = "default_email_pattern")]
    pub email: String,
    /// Phone-number pattern. The default only recognises US formats.
    #[serde(default = "default_phone_pattern")]
    pub phone: String,
}

impl Default for ContactPatterns {
    fn default() -> Self {
        Self {
            email: default_email_pattern(),
            phone: default_phone_pattern(),
        }
    }
}

/// Every table the validator consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTables {
    /// Categorized blocklist.
    #[serde(default)]
    pub blocklist: Blocklist,
    /// Per-tier editorial guidelines.
    #[serde(default = "default_age_guidelines")]
    pub age_guidelines: BTreeMap<AgeRating, AgeGuideline>,
    /// Per-tier violence gates.
    #[serde(default = "default_violence_gates")]
    pub violence_gates: BTreeMap<AgeRating, ViolenceGate>,
    /// Contextual-override vocabulary.
    #[serde(default)]
    pub context: ContextVocabulary,
    /// Warning vocabulary.
    #[serde(default)]
    pub warnings: WarningVocabulary,
    /// Contact-detection regexes.
    #[serde(default)]
    pub contact_patterns: ContactPatterns,
}

impl Default for PolicyTables {
    fn default() -> Self {
        Self {
            blocklist: Blocklist::default(),
            age_guidelines: default_age_guidelines(),
            violence_gates: default_violence_gates(),
            context: ContextVocabulary::default(),
            warnings: WarningVocabulary::default(),
            contact_patterns: ContactPatterns::default(),
        }
    }
}

impl PolicyTables {
    /// Guideline for a tier.
    ///
    /// # Errors
    /// Returns `ShepherdError::MissingAgeTier` if the table has no entry.
    pub fn guideline(&self, age_rating: AgeRating) -> Result<&AgeGuideline> {
        self.age_guidelines
            .get(&age_rating)
            .ok_or(ShepherdError::MissingAgeTier {
                table: "age_guidelines",
                age_rating,
            })
    }

    /// Violence gate for a tier.
    ///
    /// # Errors
    /// Returns `ShepherdError::MissingAgeTier` if the table has no entry.
    pub fn violence_gate(&self, age_rating: AgeRating) -> Result<&ViolenceGate> {
        self.violence_gates
            .get(&age_rating)
            .ok_or(ShepherdError::MissingAgeTier {
                table: "violence_gates",
                age_rating,
            })
    }

    /// Lower-case every phrase so matching against lower-cased content works
    /// regardless of how a custom table was written.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let b = &mut self.blocklist;
        for list in [
            &mut b.profanity,
            &mut b.violence,
            &mut b.sexual,
            &mut b.scary,
            &mut b.personal_information,
        ] {
            lowercase_all(list);
        }
        for guideline in self.age_guidelines.values_mut() {
            lowercase_all(&mut guideline.restricted_concepts);
        }
        lowercase_all(&mut self.context.biblical_indicators);
        lowercase_all(&mut self.context.hope_phrases);
        lowercase_all(&mut self.warnings.complex_concepts);
        lowercase_all(&mut self.warnings.emotional_terms);
        self
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_profanity() -> Vec<String> { owned(PROFANITY) }
fn default_violence() -> Vec<String> { owned(VIOLENCE) }
fn default_sexual() -> Vec<String> { owned(SEXUAL) }
fn default_scary() -> Vec<String> { owned(SCARY) }
fn default_personal_information() -> Vec<String> { owned(PERSONAL_INFORMATION) }
fn default_biblical_indicators() -> Vec<String> { owned(BIBLICAL_INDICATORS) }
fn default_hope_phrases() -> Vec<String> { owned(HOPE_PHRASES) }
fn default_complex_concepts() -> Vec<String> { owned(COMPLEX_CONCEPTS) }
fn default_emotional_terms() -> Vec<String> { owned(EMOTIONAL_TERMS) }
fn default_email_pattern() -> String { EMAIL_PATTERN.to_string() }
fn default_phone_pattern() -> String { PHONE_PATTERN.to_string() }

fn default_age_guidelines() -> BTreeMap<AgeRating, AgeGuideline> {
    BTreeMap::from([
        (
            AgeRating::All,
            AgeGuideline {
                max_complexity_level: 1,
                allowed_topics: owned(&[
                    "creation", "animals", "love", "kindness", "family", "prayer", "sharing",
                    "thankfulness",
                ]),
                restricted_concepts: owned(&[
                    "wages of sin", "eternal punishment", "crucifixion", "blood sacrifice",
                    "lake of fire",
                ]),
            },
        ),
        (
            AgeRating::Children,
            AgeGuideline {
                max_complexity_level: 2,
                allowed_topics: owned(&[
                    "creation", "animals", "love", "kindness", "family", "prayer", "obedience",
                    "courage", "forgiveness", "miracles",
                ]),
                restricted_concepts: owned(&[
                    "crucifixion details", "graphic violence", "demon possession", "eternal punishment",
                ]),
            },
        ),
        (
            AgeRating::Youth,
            AgeGuideline {
                max_complexity_level: 3,
                allowed_topics: owned(&[
                    "faith", "doubt", "identity", "forgiveness", "justice", "sacrifice",
                    "spiritual growth",
                ]),
                restricted_concepts: owned(&["graphic violence", "explicit content"]),
            },
        ),
        (
            AgeRating::Adult,
            AgeGuideline {
                max_complexity_level: 4,
                allowed_topics: owned(&["theology", "history", "ethics", "apologetics"]),
                restricted_concepts: Vec::new(),
            },
        ),
    ])
}

fn default_violence_gates() -> BTreeMap<AgeRating, ViolenceGate> {
    BTreeMap::from([
        (
            AgeRating::All,
            ViolenceGate {
                max_violence_level: 0,
                allowed_conflict_types: Vec::new(),
            },
        ),
        (
            AgeRating::Children,
            ViolenceGate {
                max_violence_level: 1,
                allowed_conflict_types: owned(&["disagreement", "overcoming fear"]),
            },
        ),
        (
            AgeRating::Youth,
            ViolenceGate {
                max_violence_level: 2,
                allowed_conflict_types: owned(&[
                    "disagreement", "overcoming fear", "biblical battles", "spiritual warfare",
                ]),
            },
        ),
        (
            AgeRating::Adult,
            ViolenceGate {
                max_violence_level: 3,
                allowed_conflict_types: owned(&[
                    "disagreement", "overcoming fear", "biblical battles", "spiritual warfare",
                    "martyrdom", "war",
                ]),
            },
        ),
    ])
}
