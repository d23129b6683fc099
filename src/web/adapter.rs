//! Request adapter for mapping HTTP requests to access-core types.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::principal::{Account, Principal};
use crate::request::RequestMeta;
use crate::role::Roles;

use super::ExtractMetadata;

/// Session claims as handed over by the identity provider.
///
/// Field names follow the provider's camelCase session document. Only
/// `userId` is mandatory; everything else defaults to the least privileged
/// value.
///
/// # Examples
///
/// ```
/// use access_core::web::SessionClaims;
/// use access_core::Role;
///
/// let claims = SessionClaims::from_json(
///     r#"{ "userId": "u-1", "roles": ["entrepreneur"], "isVerified": true }"#,
/// )
/// .unwrap();
///
/// let account = claims.to_account();
/// assert!(account.has_role(Role::Entrepreneur));
/// assert!(account.verified);
/// assert!(!account.premium);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Account id
    pub user_id: String,
    /// Role labels, e.g. `["artist", "listener"]`
    #[serde(default)]
    pub roles: Vec<String>,
    /// Premium entitlement
    #[serde(default)]
    pub is_premium: bool,
    /// Verified identity
    #[serde(default)]
    pub is_verified: bool,
}

impl SessionClaims {
    /// Parses claims from the session JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidDocument {
            what: "session claims",
            message: e.to_string(),
        })
    }

    /// Builds the account the evaluator sees.
    ///
    /// Unknown role labels are dropped.
    pub fn to_account(&self) -> Account {
        Account::new(self.user_id.clone())
            .with_roles(Roles::from_labels(&self.roles))
            .premium(self.is_premium)
            .verified(self.is_verified)
    }
}

/// Adapter for converting framework-specific HTTP requests into access-core
/// types.
///
/// Holds only owned, framework-neutral data: the request id and the session
/// claims, if the request carried a session.
///
/// # Examples
///
/// ```
/// use access_core::web::{ExtractMetadata, RequestAdapter, SessionClaims};
///
/// let adapter = RequestAdapter::new("req-12345").with_session(SessionClaims {
///     user_id: "user-1".to_string(),
///     roles: vec!["listener".to_string()],
///     ..Default::default()
/// });
///
/// let meta = adapter.extract_metadata();
/// assert_eq!(meta.request_id, "req-12345");
/// assert_eq!(meta.principal.id(), Some("user-1"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    request_id: String,
    session: Option<SessionClaims>,
}

impl RequestAdapter {
    /// Creates an adapter for a request without a session.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            session: None,
        }
    }

    /// Attaches session claims.
    pub fn with_session(mut self, claims: SessionClaims) -> Self {
        self.session = Some(claims);
        self
    }

    /// Attaches session claims parsed from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDocument` if the document is not valid claims.
    pub fn with_session_json(self, json: &str) -> Result<Self, Error> {
        let claims = SessionClaims::from_json(json)?;
        Ok(self.with_session(claims))
    }

    /// Replaces or clears the session claims.
    pub fn set_session(&mut self, claims: Option<SessionClaims>) {
        self.session = claims;
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the session claims, if present.
    pub fn session(&self) -> Option<&SessionClaims> {
        self.session.as_ref()
    }
}

impl ExtractMetadata for RequestAdapter {
    fn extract_metadata(&self) -> RequestMeta {
        let principal = self
            .session
            .as_ref()
            .map_or(Principal::Anonymous, |claims| {
                Principal::Authenticated(claims.to_account())
            });
        RequestMeta {
            request_id: self.request_id.clone(),
            principal,
        }
    }
}
