//! In-memory audit trail recorder.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{AuditEvent, AuditOutcome};

/// In-memory recorder for audit events.
///
/// The buffer sits behind a `Mutex`, so a single trail can be shared by
/// handlers running on different threads. A production deployment would
/// drain it into persistent audit storage.
///
/// # Example
///
/// ```
/// use access_core::audit::{AuditEvent, AuditOutcome, AuditTrail};
/// use access_core::Action;
///
/// let trail = AuditTrail::new();
/// trail.record(AuditEvent::new("req-123", Some("u-1"), Action::Like, AuditOutcome::Allowed));
///
/// assert_eq!(trail.events().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AuditTrail {
    events: Mutex<Vec<AuditEvent>>,
}

impl AuditTrail {
    /// Creates a new empty audit trail.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written event.
    fn lock(&self) -> MutexGuard<'_, Vec<AuditEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records an audit event.
    pub fn record(&self, event: AuditEvent) {
        self.lock().push(event);
    }

    /// Returns a snapshot of all recorded events, in recording order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.lock().clone()
    }

    /// Returns the recorded denials.
    pub fn denials(&self) -> Vec<AuditEvent> {
        self.lock()
            .iter()
            .filter(|e| e.outcome() == AuditOutcome::Denied)
            .cloned()
            .collect()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns all recorded events.
    pub fn drain(&self) -> Vec<AuditEvent> {
        std::mem::take(&mut *self.lock())
    }
}
