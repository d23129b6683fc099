use std::fmt;

use crate::action::Action;
use crate::decision::{Decision, Remedy, Requirement};
use crate::role::Role;

/// Errors that can occur in the access crate.
#[derive(Debug)]
pub enum Error {
    /// An access check denied the request
    Violation(Violation),
    /// A session or configuration document could not be parsed
    InvalidDocument {
        /// What kind of document was being read
        what: &'static str,
        /// Parser error message
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Violation(v) => write!(f, "Access violation: {}", v),
            Error::InvalidDocument { what, message } => write!(f, "Invalid {}: {}", what, message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Violation(v) => Some(v),
            Error::InvalidDocument { .. } => None,
        }
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

/// A denied access check, in the form a guard returns it.
///
/// Route handlers turn this into a response with
/// [`status_code`](Self::status_code); pages turn it into a redirect based on
/// [`kind`](Self::kind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// The action that was refused, when one was being checked
    pub action: Option<Action>,
    /// The failed requirement, when the violation came from a decision
    pub requirement: Option<Requirement>,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            action: None,
            requirement: None,
            message: message.into(),
        }
    }

    /// Attaches the refused action.
    pub fn for_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Converts a denied decision into a violation.
    ///
    /// The kind follows the decision's remedy first (that is what the user
    /// can act on), then its requirement.
    ///
    /// # Examples
    ///
    /// ```
    /// use access_core::{evaluate, Action, Principal, ResourceContext, Violation, ViolationKind};
    ///
    /// let decision = evaluate(&Principal::Anonymous, Action::Download, &ResourceContext::new());
    /// let violation = Violation::from_decision(Action::Download, &decision);
    ///
    /// assert_eq!(violation.kind, ViolationKind::SignInRequired);
    /// assert_eq!(violation.status_code(), 401);
    /// ```
    pub fn from_decision(action: Action, decision: &Decision) -> Self {
        let kind = match (decision.remedy, decision.requirement) {
            (Some(Remedy::SignIn), _) => ViolationKind::SignInRequired,
            (Some(Remedy::Upgrade), _) => ViolationKind::UpgradeRequired,
            (Some(Remedy::VerifyIdentity), _) => ViolationKind::VerificationRequired,
            (Some(Remedy::InsufficientRole), _) => ViolationKind::RoleRequired,
            (None, Some(Requirement::VerificationRequired)) => ViolationKind::VerificationRequired,
            (None, Some(Requirement::RoleRequired | Requirement::AdminOnly)) => {
                ViolationKind::RoleRequired
            }
            (None, Some(_)) => ViolationKind::Denied,
            (None, None) => ViolationKind::UnknownAction,
        };
        let message = decision.reason().unwrap_or("Access denied").to_string();
        let mut violation = Self::new(kind, message).for_action(action);
        violation.requirement = decision.requirement;
        violation
    }

    /// Returns the HTTP status code a route handler should respond with.
    pub fn status_code(&self) -> u16 {
        match self.kind {
            ViolationKind::SignInRequired => 401,
            ViolationKind::UpgradeRequired => 402,
            ViolationKind::UnknownAction | ViolationKind::InvalidInput => 400,
            ViolationKind::RoleRequired
            | ViolationKind::VerificationRequired
            | ViolationKind::Denied
            | ViolationKind::RoleNotHeld { .. }
            | ViolationKind::MissingGrant { .. } => 403,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Some(action) => write!(f, "{} [{}]: {}", self.kind, action, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for Violation {}

/// The kind of access violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The principal must sign in
    SignInRequired,
    /// The principal must upgrade to premium
    UpgradeRequired,
    /// The principal lacks a required role
    RoleRequired,
    /// The principal must verify their identity
    VerificationRequired,
    /// The action name was not recognised
    UnknownAction,
    /// Denied for a reason with no specific remedy
    Denied,
    /// Request input failed validation after access was allowed
    InvalidInput,
    /// A persona switch named a role the principal does not hold
    RoleNotHeld {
        /// The requested role
        role: Role,
    },
    /// A context was asked for an action it was not granted
    MissingGrant {
        /// The action without a grant
        action: Action,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::SignInRequired => write!(f, "Sign-in required"),
            ViolationKind::UpgradeRequired => write!(f, "Upgrade required"),
            ViolationKind::RoleRequired => write!(f, "Insufficient role"),
            ViolationKind::VerificationRequired => write!(f, "Verification required"),
            ViolationKind::UnknownAction => write!(f, "Unknown action"),
            ViolationKind::Denied => write!(f, "Denied"),
            ViolationKind::InvalidInput => write!(f, "Invalid input"),
            ViolationKind::RoleNotHeld { role } => write!(f, "Role '{}' not held", role),
            ViolationKind::MissingGrant { action } => write!(f, "No grant for '{}'", action),
        }
    }
}
