//! Guard functions and response mapping for route handlers.
//!
//! # Integration Flow
//!
//! ```text
//! HTTP Request
//!   ↓
//! Framework-specific code builds RequestAdapter
//!   ↓
//! guard(adapter, action, resource)
//!   ↓
//! Ctx with the action granted, or Violation
//!   ↓
//! Handler runs with an AccessGrant, or Response::from_result maps the denial
//! ```

use serde::Serialize;
use serde_json::{json, Value};

use crate::action::Action;
use crate::audit::AuditTrail;
use crate::context::Ctx;
use crate::error::Violation;
use crate::gate::AccessGate;
use crate::messages::DenialMessages;
use crate::principal::Principal;
use crate::resource::ResourceContext;

use super::{ExtractMetadata, RequestAdapter};

/// Returns the principal the request's session resolves to.
pub fn extract_principal(adapter: &RequestAdapter) -> Principal {
    adapter.extract_metadata().principal
}

/// Checks `action` on `resource` for the request and returns the context.
///
/// # Errors
///
/// Returns the `Violation` of a denied decision.
///
/// # Examples
///
/// ```
/// use access_core::web::{guard, RequestAdapter};
/// use access_core::{Action, ResourceContext};
///
/// let adapter = RequestAdapter::new("req-001");
/// let err = guard(&adapter, Action::Comment, ResourceContext::new()).unwrap_err();
/// assert_eq!(err.status_code(), 401);
/// ```
pub fn guard(
    adapter: &RequestAdapter,
    action: Action,
    resource: ResourceContext,
) -> Result<Ctx, Violation> {
    AccessGate::new(adapter.extract_metadata())
        .on(resource)
        .require(action)
        .build()
}

/// Like [`guard`], recording the decision to `trail`.
pub fn guard_audited(
    adapter: &RequestAdapter,
    action: Action,
    resource: ResourceContext,
    trail: &AuditTrail,
) -> Result<Ctx, Violation> {
    AccessGate::new(adapter.extract_metadata())
        .on(resource)
        .require(action)
        .audit_to(trail)
        .build()
}

/// A framework-neutral HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: Value,
}

impl Response {
    /// Maps a handler result to a response.
    ///
    /// Success bodies are the serialized value with status 200. Denials carry
    /// the violation's status, its kind, the refused action and the
    /// user-facing message from `messages`.
    pub fn from_result<T: Serialize>(
        result: Result<T, Violation>,
        messages: &DenialMessages,
    ) -> Self {
        match result {
            Ok(value) => match serde_json::to_value(value) {
                Ok(body) => Self { status: 200, body },
                Err(e) => {
                    tracing::error!(error = %e, "failed to serialize handler response");
                    Self {
                        status: 500,
                        body: json!({ "error": "Internal error" }),
                    }
                }
            },
            Err(violation) => Self {
                status: violation.status_code(),
                body: json!({
                    "error": violation.kind.to_string(),
                    "action": violation.action,
                    "requirement": violation.requirement,
                    "message": messages.format_violation(&violation),
                }),
            },
        }
    }
}
