use std::fmt;

use crate::action::Action;
use crate::decision::Decision;

/// A request-scoped logging interface.
///
/// `AccessLog` is obtained from `Ctx::log()` and is lifetime-bound to the
/// context. Every event carries the request id and, when signed in, the
/// principal id.
#[derive(Debug, Clone, Copy)]
pub struct AccessLog<'a> {
    request_id: &'a str,
    principal: Option<&'a str>,
}

impl<'a> AccessLog<'a> {
    pub(crate) fn new(request_id: &'a str, principal: Option<&'a str>) -> Self {
        Self {
            request_id,
            principal,
        }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Logs an info-level message.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(request_id = %self.request_id, principal = ?self.principal, "{}", args);
    }

    /// Logs a warning-level message.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(request_id = %self.request_id, principal = ?self.principal, "{}", args);
    }

    /// Logs a debug-level message.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(request_id = %self.request_id, principal = ?self.principal, "{}", args);
    }

    /// Logs the outcome of one access check.
    ///
    /// Allows go out at debug level, denials at info.
    pub fn decision(&self, action: Action, decision: &Decision) {
        if decision.allowed {
            tracing::debug!(
                request_id = %self.request_id,
                principal = ?self.principal,
                action = %action,
                "access allowed"
            );
        } else {
            tracing::info!(
                request_id = %self.request_id,
                principal = ?self.principal,
                action = %action,
                requirement = ?decision.requirement,
                remedy = ?decision.remedy,
                reason = ?decision.reason(),
                "access denied"
            );
        }
    }
}
