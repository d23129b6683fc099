//! Active persona for multi-role accounts.
//!
//! A user holding several roles operates as one of them at a time (the
//! dashboard and navigation follow it). The persona never feeds into
//! [`evaluate`](crate::evaluate): access checks look at role membership only.

use crate::error::{Violation, ViolationKind};
use crate::role::{Role, Roles};

/// Order in which a default persona is picked from a role set.
const DEFAULT_PRIORITY: [Role; 5] = [
    Role::Admin,
    Role::Artist,
    Role::Entrepreneur,
    Role::Marketer,
    Role::Listener,
];

/// A role set together with the role currently acted as.
///
/// # Examples
///
/// ```
/// use access_core::{Persona, Role, Roles};
///
/// let mut persona = Persona::new(Roles::ARTIST | Roles::LISTENER);
/// assert_eq!(persona.active(), Some(Role::Artist));
///
/// persona.switch_to(Role::Listener).expect("listener is held");
/// assert_eq!(persona.active(), Some(Role::Listener));
///
/// assert!(persona.switch_to(Role::Admin).is_err());
/// assert_eq!(persona.active(), Some(Role::Listener));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    roles: Roles,
    active: Option<Role>,
}

impl Persona {
    /// Creates a persona with the highest-priority held role active.
    ///
    /// An empty role set has no active persona.
    pub fn new(roles: Roles) -> Self {
        let active = DEFAULT_PRIORITY.into_iter().find(|role| roles.has(*role));
        Self { roles, active }
    }

    /// Restores a persona from a stored active role.
    ///
    /// A stored role the user no longer holds is dropped in favour of the
    /// default, which covers roles revoked since the preference was saved.
    pub fn restore(roles: Roles, stored: Option<Role>) -> Self {
        match stored {
            Some(role) if roles.has(role) => Self {
                roles,
                active: Some(role),
            },
            Some(role) => {
                tracing::debug!(role = %role, "stored persona no longer held, using default");
                Self::new(roles)
            }
            None => Self::new(roles),
        }
    }

    /// Returns the role set.
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// Returns the active role, if any.
    pub fn active(&self) -> Option<Role> {
        self.active
    }

    /// Returns true if more than one role is held.
    pub fn can_switch(&self) -> bool {
        self.roles.bits().count_ones() > 1
    }

    /// Switches the active role and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns a `RoleNotHeld` violation, leaving the persona unchanged, if
    /// `role` is not in the role set.
    pub fn switch_to(&mut self, role: Role) -> Result<Option<Role>, Violation> {
        if !self.roles.has(role) {
            tracing::warn!(role = %role, "persona switch to role not held");
            return Err(Violation::new(
                ViolationKind::RoleNotHeld { role },
                format!("Cannot act as '{}' without holding that role", role),
            ));
        }
        let previous = self.active.replace(role);
        tracing::debug!(from = ?previous, to = %role, "persona switched");
        Ok(previous)
    }
}
