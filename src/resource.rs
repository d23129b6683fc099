/// Attributes of the target resource that influence an access decision.
///
/// Both fields are optional in effect: the default context is a regular,
/// unowned resource, which makes ownership checks fail closed.
///
/// # Examples
///
/// ```
/// use access_core::ResourceContext;
///
/// let track = ResourceContext::default()
///     .promotional()
///     .owned_by("artist-7");
///
/// assert!(track.is_promotional());
/// assert_eq!(track.owner_id(), Some("artist-7"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResourceContext {
    promotional: bool,
    owner_id: Option<String>,
}

impl ResourceContext {
    /// Creates an untagged, unowned resource context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the resource as part of a tournament or free-tier promotion.
    pub fn promotional(mut self) -> Self {
        self.promotional = true;
        self
    }

    /// Sets the promotional tag explicitly.
    pub fn with_promotional(mut self, promotional: bool) -> Self {
        self.promotional = promotional;
        self
    }

    /// Records the id of the principal that owns the resource.
    pub fn owned_by(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Returns true if the resource is tournament or promotion tagged.
    pub fn is_promotional(&self) -> bool {
        self.promotional
    }

    /// Returns the owning principal's id, if known.
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_untagged_and_unowned() {
        let ctx = ResourceContext::new();
        assert!(!ctx.is_promotional());
        assert!(ctx.owner_id().is_none());
    }

    #[test]
    fn with_promotional_can_clear_tag() {
        let ctx = ResourceContext::new().promotional().with_promotional(false);
        assert!(!ctx.is_promotional());
    }
}
