use crate::action::Action;

/// Proof that one action was allowed for the current request.
///
/// `AccessGrant` is handed out by [`Ctx::grant`](crate::Ctx::grant) and can
/// not be constructed outside this crate, so an operation that takes one by
/// value cannot run without the gate having allowed it first.
///
/// ```compile_fail
/// use access_core::{AccessGrant, Action};
///
/// // Error: field `_private` is private
/// let grant = AccessGrant { action: Action::Download, _private: () };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGrant {
    action: Action,
    // Private field prevents construction outside the crate
    _private: (),
}

impl AccessGrant {
    /// Only `Ctx` creates grants, after the gate allowed the action.
    pub(crate) fn new(action: Action) -> Self {
        Self {
            action,
            _private: (),
        }
    }

    /// Returns the action this grant covers.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Checks that this grant covers `action`.
    pub fn covers(&self, action: Action) -> bool {
        self.action == action
    }
}
