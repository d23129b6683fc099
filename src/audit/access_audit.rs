//! `AccessAudit` emits audit events through tracing.

use super::{AuditEvent, AuditTrail};

/// Target used for every audit event, so subscribers can route them apart
/// from ordinary request logs.
const AUDIT_TARGET: &str = "access_audit";

/// Audit event emitter.
///
/// # Example
///
/// ```
/// use access_core::audit::{AccessAudit, AuditEvent, AuditOutcome, AuditTrail};
/// use access_core::Action;
///
/// let trail = AuditTrail::new();
/// let event = AuditEvent::new("req-123", Some("u-1"), Action::Download, AuditOutcome::Allowed);
///
/// AccessAudit::new().emit_and_record(&event, &trail);
///
/// assert_eq!(trail.len(), 1);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AccessAudit {
    _private: (),
}

impl AccessAudit {
    /// Creates a new emitter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Emits an audit event as a structured tracing event.
    pub fn emit(&self, event: &AuditEvent) {
        tracing::info!(
            target: AUDIT_TARGET,
            request_id = %event.request_id(),
            principal = ?event.principal(),
            action = %event.action(),
            outcome = %event.outcome(),
            requirement = ?event.requirement(),
            resource_owner = ?event.resource_owner(),
            promotional = event.promotional(),
            "access decision"
        );
    }

    /// Emits an audit event and also records it to `trail`.
    pub fn emit_and_record(&self, event: &AuditEvent, trail: &AuditTrail) {
        self.emit(event);
        trail.record(event.clone());
    }
}
