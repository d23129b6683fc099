//! Audit event schema.

use std::fmt;

use crate::action::Action;
use crate::decision::{Decision, Requirement};
use crate::resource::ResourceContext;

/// Outcome of an audited access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// The action was allowed
    Allowed,
    /// The action was denied
    Denied,
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditOutcome::Allowed => write!(f, "allowed"),
            AuditOutcome::Denied => write!(f, "denied"),
        }
    }
}

/// One recorded access decision.
///
/// # Example
///
/// ```
/// use access_core::audit::{AuditEvent, AuditOutcome};
/// use access_core::{Action, Requirement};
///
/// let event = AuditEvent::new("req-123", Some("u-1"), Action::Download, AuditOutcome::Denied)
///     .with_requirement(Requirement::PremiumRequired)
///     .with_resource_owner("u-2");
///
/// assert_eq!(event.request_id(), "req-123");
/// assert_eq!(event.principal(), Some("u-1"));
/// assert_eq!(event.resource_owner(), Some("u-2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    request_id: String,
    /// None for anonymous requests
    principal: Option<String>,
    action: Action,
    outcome: AuditOutcome,
    requirement: Option<Requirement>,
    resource_owner: Option<String>,
    promotional: bool,
}

impl AuditEvent {
    /// Creates a new audit event with required fields.
    pub fn new(
        request_id: impl Into<String>,
        principal: Option<impl Into<String>>,
        action: Action,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            principal: principal.map(Into::into),
            action,
            outcome,
            requirement: None,
            resource_owner: None,
            promotional: false,
        }
    }

    /// Builds the event for one evaluated decision.
    pub fn from_decision(
        request_id: &str,
        principal: Option<&str>,
        action: Action,
        resource: &ResourceContext,
        decision: &Decision,
    ) -> Self {
        let outcome = if decision.allowed {
            AuditOutcome::Allowed
        } else {
            AuditOutcome::Denied
        };
        let mut event = Self::new(request_id, principal, action, outcome);
        event.requirement = decision.requirement;
        event.resource_owner = resource.owner_id().map(str::to_string);
        event.promotional = resource.is_promotional();
        event
    }

    /// Sets the failed requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    /// Sets the id of the resource's owner.
    pub fn with_resource_owner(mut self, owner: impl Into<String>) -> Self {
        self.resource_owner = Some(owner.into());
        self
    }

    /// Returns the request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the principal id, if authenticated.
    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    /// Returns the checked action.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Returns the decision outcome.
    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    /// Returns the failed requirement, if any.
    pub fn requirement(&self) -> Option<Requirement> {
        self.requirement
    }

    /// Returns the resource owner id, if known.
    pub fn resource_owner(&self) -> Option<&str> {
        self.resource_owner.as_deref()
    }

    /// Returns true if the resource was promotional.
    pub fn promotional(&self) -> bool {
        self.promotional
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuditEvent[action={}, outcome={}, request_id={}, principal={}",
            self.action,
            self.outcome,
            self.request_id,
            self.principal.as_deref().unwrap_or("<anonymous>")
        )?;

        if let Some(requirement) = self.requirement {
            write!(f, ", requirement={}", requirement)?;
        }
        if let Some(owner) = &self.resource_owner {
            write!(f, ", resource_owner={}", owner)?;
        }
        if self.promotional {
            write!(f, ", promotional")?;
        }

        write!(f, "]")
    }
}
