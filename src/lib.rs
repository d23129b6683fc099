//! Access decisions for a multi-role music streaming platform.
//!
//! Artists, listeners, entrepreneurs, marketers and admins share one account
//! model; this crate decides what each of them may do:
//! - **Evaluator**: [`evaluate`] is a pure function of principal, action and
//!   resource returning a [`Decision`] with a reason, the failed
//!   [`Requirement`] and a suggested [`Remedy`]
//! - **Gate**: [`AccessGate`] runs the evaluator for a request, logs and
//!   audits the decisions, and hands out [`AccessGrant`] proofs
//! - **Web boundary**: [`web`] turns session claims into a [`Principal`] and
//!   maps denials to HTTP responses
//!
//! # Core Types
//!
//! - [`Principal`] / [`Account`]: who is asking, with their [`Roles`]
//! - [`Action`]: the closed set of guarded operations
//! - [`ResourceContext`]: promotional tag and owner of the target
//! - [`Decision`]: the verdict
//! - [`Violation`]: a denial in error form, with an HTTP status
//!
//! # Examples
//!
//! ```
//! use access_core::{evaluate, Account, Action, Principal, ResourceContext, Role};
//!
//! let artist = Principal::from(Account::new("artist-1").with_role(Role::Artist));
//! let own_track = ResourceContext::new().owned_by("artist-1");
//!
//! assert!(evaluate(&artist, Action::Download, &own_track).allowed);
//! assert!(!evaluate(&artist, Action::CreateCampaign, &own_track).allowed);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
pub mod audit;
mod capability;
mod context;
mod decision;
mod error;
mod evaluate;
mod gate;
mod logging;
mod messages;
mod persona;
mod principal;
mod request;
mod resource;
mod role;
pub mod web;

#[cfg(test)]
mod test_utils;

pub use action::{Action, UnknownAction};
pub use capability::AccessGrant;
pub use context::Ctx;
pub use decision::{Decision, Remedy, Requirement};
pub use error::{Error, Violation, ViolationKind};
pub use evaluate::{evaluate, evaluate_named, has_all_access, has_any_access};
pub use gate::AccessGate;
pub use logging::AccessLog;
pub use messages::{format_denial_message, DenialMessages};
pub use persona::Persona;
pub use principal::{Account, Principal};
pub use request::RequestMeta;
pub use resource::ResourceContext;
pub use role::{Role, Roles, UnknownRole};
