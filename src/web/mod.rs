//! Web framework integration surface.
//!
//! This module is the boundary between route handlers and the evaluator. It
//! handles:
//! - Turning identity-provider session claims into a [`Principal`](crate::Principal)
//! - Request-ID propagation into [`RequestMeta`](crate::RequestMeta)
//! - Guarding a handler with [`AccessGate`](crate::AccessGate) and mapping a
//!   denial to an HTTP status and user-facing message
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: nothing here names a web framework.
//!    Framework glue builds a [`RequestAdapter`] and calls [`guard`].
//!
//! 2. **Explicit Principal**: the principal is rebuilt from the session on
//!    every request and passed down as a value. There is no ambient "current
//!    user".
//!
//! 3. **Fail Closed**: a missing or unreadable session is an anonymous
//!    request, never an error that skips the check.
//!
//! # Example Flow
//!
//! ```
//! use access_core::web::{guard, RequestAdapter};
//! use access_core::{Action, ResourceContext};
//!
//! let adapter = RequestAdapter::new("req-1")
//!     .with_session_json(r#"{ "userId": "u-1", "roles": ["artist"] }"#)
//!     .expect("valid session");
//!
//! let ctx = guard(&adapter, Action::JoinCompetition, ResourceContext::new())
//!     .expect("artists may join competitions");
//! let grant = ctx.grant(Action::JoinCompetition).unwrap();
//! # let _ = grant;
//! ```

mod adapter;
mod extract;
pub mod handlers;
mod middleware;

pub use adapter::{RequestAdapter, SessionClaims};
pub use extract::ExtractMetadata;
pub use middleware::{extract_principal, guard, guard_audited, Response};
