use crate::principal::Principal;

/// Metadata about an incoming request.
///
/// Contains the request identifier and the principal the session resolved to.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    /// Unique identifier for this request
    pub request_id: String,
    /// Acting principal; `Principal::Anonymous` without a session
    pub principal: Principal,
}

impl RequestMeta {
    /// Creates request metadata.
    pub fn new(request_id: impl Into<String>, principal: impl Into<Principal>) -> Self {
        Self {
            request_id: request_id.into(),
            principal: principal.into(),
        }
    }

    /// Creates metadata for a request without a session.
    pub fn anonymous(request_id: impl Into<String>) -> Self {
        Self::new(request_id, Principal::Anonymous)
    }
}
