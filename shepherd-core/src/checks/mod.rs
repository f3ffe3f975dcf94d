//! The six content checks plus warning generation.
//!
//! Every check is independent and reads from the same [`Scan`]. The
//! moderator runs them in a fixed order and concatenates their output:
//!
//! 1. [`language`] — profanity
//! 2. [`violence`] — violence gating
//! 3. [`inappropriate`] — sexual content
//! 4. [`scary`] — frightening content (young audiences only)
//! 5. [`personal`] — personal and contact information
//! 6. [`age`] — restricted concepts per tier
//!
//! [`warnings`] runs alongside and never affects validity.

pub mod age;
pub mod inappropriate;
pub mod language;
pub mod personal;
pub mod scary;
pub mod violence;
pub mod warnings;

pub use personal::ContactDetector;

use crate::context;
use crate::policy::PolicyTables;
use crate::types::ContentContext;

/// One piece of content prepared for checking.
#[derive(Debug)]
pub struct Scan<'a> {
    /// The content as submitted.
    pub content: &'a str,
    /// Lower-cased content used for phrase matching.
    pub lowered: String,
    /// Where the content will be shown.
    pub context: &'a ContentContext,
    /// Tables in force.
    pub policy: &'a PolicyTables,
    /// Whether any biblical indicator occurs in the content.
    pub biblical: bool,
}

impl<'a> Scan<'a> {
    /// Prepare content for checking.
    #[must_use]
    pub fn new(content: &'a str, context: &'a ContentContext, policy: &'a PolicyTables) -> Self {
        let lowered = content.to_lowercase();
        let biblical = context::has_biblical_context(&lowered, &policy.context);
        Self {
            content,
            lowered,
            context,
            policy,
            biblical,
        }
    }

    /// Phrases from `phrases` found in the content, in table order.
    pub fn hits<'s>(&'s self, phrases: &'s [String]) -> impl Iterator<Item = &'s str> + 's {
        context::matches(&self.lowered, phrases)
    }
}
