//! Extraction boundary trait for web integration.

use crate::request::RequestMeta;

/// Extracts request metadata from a framework-specific request.
///
/// Framework integrations implement this to provide the request id and the
/// principal resolved from the session. The trait intentionally does not
/// evaluate anything: that is `AccessGate`'s job.
///
/// # Examples
///
/// ```
/// use access_core::web::ExtractMetadata;
/// use access_core::{Account, RequestMeta};
///
/// struct MyFrameworkRequest {
///     request_id: String,
///     user: Option<String>,
/// }
///
/// impl ExtractMetadata for MyFrameworkRequest {
///     fn extract_metadata(&self) -> RequestMeta {
///         RequestMeta::new(
///             self.request_id.clone(),
///             self.user.as_ref().map(|u| Account::new(u.clone())),
///         )
///     }
/// }
///
/// let req = MyFrameworkRequest { request_id: "r".into(), user: None };
/// assert!(!req.extract_metadata().principal.is_authenticated());
/// ```
pub trait ExtractMetadata {
    /// Extracts request metadata for access checks.
    fn extract_metadata(&self) -> RequestMeta;
}
