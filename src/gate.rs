use crate::{
    action::Action,
    audit::{AccessAudit, AuditEvent, AuditTrail},
    context::Ctx,
    error::Violation,
    evaluate::evaluate,
    logging::AccessLog,
    request::RequestMeta,
    resource::ResourceContext,
};

/// The access enforcement gate.
///
/// `AccessGate` is the only way to construct a `Ctx`. It evaluates every
/// required action against the request's principal and resource before
/// granting anything. Unlike the evaluator, the gate logs each decision and
/// can record it to an [`AuditTrail`].
///
/// # Examples
///
/// ```
/// use access_core::{AccessGate, Account, Action, RequestMeta, ResourceContext, ViolationKind};
///
/// let meta = RequestMeta::anonymous("req-123");
/// let err = AccessGate::new(meta)
///     .on(ResourceContext::new())
///     .require(Action::Listen)
///     .build()
///     .unwrap_err();
///
/// assert_eq!(err.kind, ViolationKind::SignInRequired);
/// ```
pub struct AccessGate<'t> {
    meta: RequestMeta,
    resource: ResourceContext,
    requirements: Vec<Action>,
    trail: Option<&'t AuditTrail>,
}

impl<'t> AccessGate<'t> {
    /// Creates a new gate for the given request; the resource defaults to an
    /// untagged, unowned one.
    pub fn new(meta: RequestMeta) -> Self {
        Self {
            meta,
            resource: ResourceContext::default(),
            requirements: Vec::new(),
            trail: None,
        }
    }

    /// Sets the resource the required actions target.
    pub fn on(mut self, resource: ResourceContext) -> Self {
        self.resource = resource;
        self
    }

    /// Adds a required action, deduplicating repeats.
    ///
    /// ```
    /// use access_core::{AccessGate, Account, Action, RequestMeta};
    ///
    /// let ctx = AccessGate::new(RequestMeta::new("req-1", Account::new("u1")))
    ///     .require(Action::Comment)
    ///     .require(Action::Comment) // second call is deduplicated
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(ctx.granted_actions().len(), 1);
    /// ```
    pub fn require(mut self, action: Action) -> Self {
        if !self.requirements.contains(&action) {
            self.requirements.push(action);
        }
        self
    }

    /// Adds several required actions.
    pub fn require_all(self, actions: impl IntoIterator<Item = Action>) -> Self {
        actions.into_iter().fold(self, AccessGate::require)
    }

    /// Records every decision this gate makes to `trail`.
    pub fn audit_to(mut self, trail: &'t AuditTrail) -> Self {
        self.trail = Some(trail);
        self
    }

    /// Evaluates all requirements and builds a `Ctx`.
    ///
    /// Requirements are checked in the order they were added; the first denial
    /// stops the build.
    ///
    /// # Errors
    ///
    /// Returns a `Violation` derived from the first denied decision.
    pub fn build(self) -> Result<Ctx, Violation> {
        self.validate_all()?;

        Ok(Ctx::new_checked(
            self.meta.request_id,
            self.meta.principal,
            self.requirements,
        ))
    }

    fn validate_all(&self) -> Result<(), Violation> {
        let log = AccessLog::new(&self.meta.request_id, self.meta.principal.id());
        for action in &self.requirements {
            self.validate_one(*action, &log)?;
        }
        Ok(())
    }

    fn validate_one(&self, action: Action, log: &AccessLog<'_>) -> Result<(), Violation> {
        let decision = evaluate(&self.meta.principal, action, &self.resource);
        log.decision(action, &decision);

        if let Some(trail) = self.trail {
            let event = AuditEvent::from_decision(
                &self.meta.request_id,
                self.meta.principal.id(),
                action,
                &self.resource,
                &decision,
            );
            AccessAudit::new().emit_and_record(&event, trail);
        }

        if decision.allowed {
            Ok(())
        } else {
            Err(Violation::from_decision(action, &decision))
        }
    }
}
