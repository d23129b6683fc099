//! Audit trail of access decisions.
//!
//! This module provides:
//! - `AuditEvent`: one access decision, reduced to safe identifiers
//! - `AuditTrail`: thread-safe in-memory recorder
//! - `AccessAudit`: emitter that writes events to `tracing`
//!
//! Events never carry session documents or free-text user input; only ids,
//! the action name, and the decision's categorical fields are kept.

mod access_audit;
mod event;
mod trail;

pub use access_audit::AccessAudit;
pub use event::{AuditEvent, AuditOutcome};
pub use trail::AuditTrail;
