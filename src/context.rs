use crate::action::Action;
use crate::capability::AccessGrant;
use crate::error::{Violation, ViolationKind};
use crate::logging::AccessLog;
use crate::principal::Principal;

/// Request context produced by a successful [`AccessGate`](crate::AccessGate).
///
/// Holds the request id, the principal and the actions the gate allowed.
/// Guarded operations ask it for an [`AccessGrant`] before doing anything.
///
/// # Construction
///
/// `Ctx` cannot be constructed by user code; `AccessGate::build` is the only
/// way to obtain one.
///
/// # Examples
///
/// ```
/// use access_core::{AccessGate, Account, Action, RequestMeta, Role};
///
/// let meta = RequestMeta::new("req-1", Account::new("u1").with_role(Role::Artist));
/// let ctx = AccessGate::new(meta)
///     .require(Action::JoinCompetition)
///     .build()
///     .expect("artists may join competitions");
///
/// assert!(ctx.grant(Action::JoinCompetition).is_ok());
/// assert!(ctx.grant(Action::CreateCampaign).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Ctx {
    request_id: String,
    principal: Principal,
    granted: Vec<Action>,
}

impl Ctx {
    /// Creates a context with the actions the gate has already allowed.
    ///
    /// This is `pub(crate)`; only `AccessGate` calls it.
    pub(crate) fn new_checked(request_id: String, principal: Principal, granted: Vec<Action>) -> Self {
        Self {
            request_id,
            principal,
            granted,
        }
    }

    /// Returns the request ID for this context.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the acting principal.
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Returns the allowed actions, in the order they were required.
    pub fn granted_actions(&self) -> &[Action] {
        &self.granted
    }

    /// Returns true if the gate allowed `action`.
    pub fn is_granted(&self, action: Action) -> bool {
        self.granted.contains(&action)
    }

    /// Returns a grant for `action`.
    ///
    /// # Errors
    ///
    /// Returns a `MissingGrant` violation if the gate was never asked to check
    /// `action`.
    pub fn grant(&self, action: Action) -> Result<AccessGrant, Violation> {
        if self.is_granted(action) {
            Ok(AccessGrant::new(action))
        } else {
            Err(Violation::new(
                ViolationKind::MissingGrant { action },
                format!("Action '{}' was not checked for this request", action),
            )
            .for_action(action))
        }
    }

    /// Returns a logger tagged with this request.
    pub fn log(&self) -> AccessLog<'_> {
        AccessLog::new(&self.request_id, self.principal.id())
    }
}
