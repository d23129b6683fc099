//! Access decisions.
//!
//! A [`Decision`] is built fresh for every check and handed back to the caller,
//! who either proceeds or turns the denial into a redirect or status code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The condition a principal must meet for a denied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Requirement {
    /// Open to everyone
    Public,
    /// Anonymous access is limited to tournament or promotional content
    TournamentOnly,
    /// A signed-in session is required
    LoginRequired,
    /// A premium entitlement is required
    PremiumRequired,
    /// A specific role is required
    RoleRequired,
    /// Only administrators may proceed
    AdminOnly,
    /// The principal's identity must be verified
    VerificationRequired,
}

impl Requirement {
    /// Returns the kebab-case wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Requirement::Public => "public",
            Requirement::TournamentOnly => "tournament-only",
            Requirement::LoginRequired => "login-required",
            Requirement::PremiumRequired => "premium-required",
            Requirement::RoleRequired => "role-required",
            Requirement::AdminOnly => "admin-only",
            Requirement::VerificationRequired => "verification-required",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the caller should offer the user after a denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Remedy {
    /// Send the user to the sign-in flow
    SignIn,
    /// Send the user to the upgrade flow
    Upgrade,
    /// Tell the user their roles do not permit the action
    InsufficientRole,
    /// Send the user to identity verification
    VerifyIdentity,
}

impl fmt::Display for Remedy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remedy::SignIn => write!(f, "sign-in"),
            Remedy::Upgrade => write!(f, "upgrade"),
            Remedy::InsufficientRole => write!(f, "insufficient-role"),
            Remedy::VerifyIdentity => write!(f, "verify-identity"),
        }
    }
}

pub(crate) const UNKNOWN_ACTION_REASON: &str = "unknown action";

/// The allow/deny verdict for one access check.
///
/// # Examples
///
/// ```
/// use access_core::{Decision, Remedy, Requirement};
///
/// let denied = Decision::deny(
///     "Premium subscription required to download",
///     Requirement::PremiumRequired,
///     Remedy::Upgrade,
/// );
///
/// assert!(!denied.allowed);
/// assert_eq!(denied.remedy, Some(Remedy::Upgrade));
/// assert!(Decision::allow().allowed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Whether the action may proceed
    pub allowed: bool,
    /// Human-readable explanation of a denial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Condition the principal failed to meet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<Requirement>,
    /// Suggested next step for the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remedy: Option<Remedy>,
}

impl Decision {
    /// An unconditional allow.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
            requirement: None,
            remedy: None,
        }
    }

    /// A denial with its failed condition and suggested remedy.
    pub fn deny(reason: impl Into<String>, requirement: Requirement, remedy: Remedy) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            requirement: Some(requirement),
            remedy: Some(remedy),
        }
    }

    /// The denial returned for action names outside the known set.
    pub fn unknown_action() -> Self {
        Self {
            allowed: false,
            reason: Some(UNKNOWN_ACTION_REASON.to_string()),
            requirement: None,
            remedy: None,
        }
    }

    /// Returns true if this decision denies the action.
    pub fn is_denied(&self) -> bool {
        !self.allowed
    }

    /// Returns the denial reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.allowed {
            return write!(f, "allowed");
        }
        write!(f, "denied")?;
        if let Some(requirement) = self.requirement {
            write!(f, " ({})", requirement)?;
        }
        if let Some(reason) = &self.reason {
            write!(f, ": {}", reason)?;
        }
        Ok(())
    }
}
