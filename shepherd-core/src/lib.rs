//! # Shepherd Core Library
//!
//! Deterministic content safety and age-appropriateness moderation for
//! children's Bible-education content.
//!
//! A [`SafetyModerator`] holds read-only [`PolicyTables`] and checks free text
//! against them:
//!
//! - **Language** — profanity, with scriptural framing excusing "hell"
//! - **Violence** — terms scored 0–3 and gated per [`AgeRating`]
//! - **Sexual** — always critical
//! - **Scary** — young audiences only, downgraded inside biblical framing
//! - **Personal information** — keywords plus email / US phone patterns
//! - **Age appropriateness** — restricted concepts per tier
//!
//! The result is a [`SafetyValidationResult`]. Validation never fails: an
//! internal error becomes a critical "manual review required" verdict.
//!
//! ```no_run
//! use shepherd_core::{AgeRating, ContentContext, ContentType, ModerationLevel, SafetyModerator};
//!
//! # fn main() -> shepherd_core::error::Result<()> {
//! let moderator = SafetyModerator::with_defaults()?;
//! let context = ContentContext::new(AgeRating::Children, ContentType::Story, ModerationLevel::Moderate);
//! let result = moderator.validate_content("Noah welcomed the animals onto the ark.", &context);
//! assert!(result.is_valid);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Matching is pure substring and regex work over immutable data; a single
//! moderator can be shared by any number of threads without locking.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod audit;
pub mod checks;
pub mod config;
pub mod context;
pub mod error;
pub mod moderator;
pub mod policy;
pub mod types;

pub use audit::{ModerationRecord, ModerationStatus, ModerationSummary};
pub use config::ShepherdConfig;
pub use error::ShepherdError;
pub use moderator::SafetyModerator;
pub use policy::PolicyTables;
pub use types::*;
