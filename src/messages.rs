//! User-facing denial messages.
//!
//! The built-in table covers every [`Requirement`]. Deployments can override
//! individual entries from a JSON document keyed by requirement name:
//!
//! ```json
//! { "premium-required": "Go Premium to download this track." }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::decision::{Decision, Requirement};
use crate::error::{Error, Violation};

const GENERIC_DENIAL: &str = "Access denied.";

fn default_message(requirement: Requirement) -> &'static str {
    match requirement {
        Requirement::Public => "This content is available to everyone.",
        Requirement::TournamentOnly => "Sign in to listen beyond tournament tracks.",
        Requirement::LoginRequired => "Please sign in to continue.",
        Requirement::PremiumRequired => "Upgrade to Premium to unlock this feature.",
        Requirement::RoleRequired => "Your account role does not allow this action.",
        Requirement::AdminOnly => "This action is restricted to administrators.",
        Requirement::VerificationRequired => "Verify your identity to continue.",
    }
}

const ALL_REQUIREMENTS: [Requirement; 7] = [
    Requirement::Public,
    Requirement::TournamentOnly,
    Requirement::LoginRequired,
    Requirement::PremiumRequired,
    Requirement::RoleRequired,
    Requirement::AdminOnly,
    Requirement::VerificationRequired,
];

/// Table mapping a denial's requirement to the text shown to the user.
///
/// # Examples
///
/// ```
/// use access_core::{Decision, DenialMessages, Remedy, Requirement};
///
/// let messages = DenialMessages::from_json(r#"{ "login-required": "Log in first." }"#)
///     .expect("valid table");
///
/// let denied = Decision::deny("raw reason", Requirement::LoginRequired, Remedy::SignIn);
/// assert_eq!(messages.format(&denied), "Log in first.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<Requirement, String>")]
pub struct DenialMessages {
    entries: BTreeMap<Requirement, String>,
}

impl DenialMessages {
    /// Creates a table with no entries at all.
    ///
    /// Every lookup then falls back to the decision's own reason.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parses overrides from JSON, keeping defaults for missing entries.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidDocument {
            what: "denial message table",
            message: e.to_string(),
        })
    }

    /// Sets the message for one requirement.
    pub fn with_message(mut self, requirement: Requirement, message: impl Into<String>) -> Self {
        self.entries.insert(requirement, message.into());
        self
    }

    /// Returns the configured message for `requirement`.
    pub fn get(&self, requirement: Requirement) -> Option<&str> {
        self.entries.get(&requirement).map(String::as_str)
    }

    /// Renders the message for a denial.
    ///
    /// Lookup order: the table entry for the decision's requirement, then the
    /// decision's raw reason, then a generic denial string. An allowed
    /// decision renders as the empty string.
    pub fn format(&self, decision: &Decision) -> String {
        if decision.allowed {
            return String::new();
        }
        decision
            .requirement
            .and_then(|req| self.get(req))
            .or_else(|| decision.reason())
            .unwrap_or(GENERIC_DENIAL)
            .to_string()
    }

    /// Renders the message for a guard violation.
    ///
    /// Uses the table entry for the violation's requirement when there is one,
    /// otherwise the violation's own message.
    pub fn format_violation(&self, violation: &Violation) -> String {
        violation
            .requirement
            .and_then(|req| self.get(req))
            .unwrap_or(violation.message.as_str())
            .to_string()
    }
}

impl Default for DenialMessages {
    fn default() -> Self {
        Self {
            entries: ALL_REQUIREMENTS
                .into_iter()
                .map(|req| (req, default_message(req).to_string()))
                .collect(),
        }
    }
}

impl From<BTreeMap<Requirement, String>> for DenialMessages {
    fn from(overrides: BTreeMap<Requirement, String>) -> Self {
        let mut messages = DenialMessages::default();
        messages.entries.extend(overrides);
        messages
    }
}

/// Renders a denial with the built-in message table.
///
/// # Examples
///
/// ```
/// use access_core::{format_denial_message, Decision, Remedy, Requirement};
///
/// let denied = Decision::deny("raw", Requirement::PremiumRequired, Remedy::Upgrade);
/// assert_eq!(format_denial_message(&denied), "Upgrade to Premium to unlock this feature.");
///
/// assert_eq!(format_denial_message(&Decision::unknown_action()), "unknown action");
/// ```
pub fn format_denial_message(decision: &Decision) -> String {
    DenialMessages::default().format(decision)
}
