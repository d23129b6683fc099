use access_core::{
    evaluate, evaluate_named, format_denial_message, has_all_access, has_any_access, AccessGate,
    Account, Action, Decision, DenialMessages, Persona, Principal, Remedy, RequestMeta,
    Requirement, ResourceContext, Role, Roles, ViolationKind,
};

fn signed_in(account: Account) -> Principal {
    Principal::Authenticated(account)
}

#[test]
fn plain_account_download_needs_upgrade() {
    // loggedIn, no roles, no premium, someone else's track
    let principal = signed_in(Account::new("u1"));
    let resource = ResourceContext::new().owned_by("u2");

    let decision = evaluate_named(&principal, "download", &resource);

    assert!(!decision.allowed);
    assert_eq!(decision.requirement, Some(Requirement::PremiumRequired));
    assert_eq!(decision.remedy, Some(Remedy::Upgrade));
}

#[test]
fn anonymous_listen_on_tournament_track() {
    let resource = ResourceContext::new().promotional();
    let decision = evaluate_named(&Principal::Anonymous, "listen", &resource);
    assert_eq!(decision, Decision::allow());
}

#[test]
fn decision_serializes_in_camel_case() {
    let decision = evaluate(&Principal::Anonymous, Action::Comment, &ResourceContext::new());
    let json = serde_json::to_value(&decision).unwrap();

    assert_eq!(json["allowed"], false);
    assert_eq!(json["requirement"], "login-required");
    assert_eq!(json["remedy"], "sign-in");
    assert_eq!(json["reason"], "Sign in to comment");

    let allowed = serde_json::to_value(Decision::allow()).unwrap();
    assert_eq!(allowed, serde_json::json!({ "allowed": true }));
}

#[test]
fn unknown_action_name_is_denied_without_remedy() {
    let admin = signed_in(Account::new("root").with_role(Role::Admin).verified(true));
    let decision = evaluate_named(&admin, "Listen", &ResourceContext::new());

    assert!(!decision.allowed);
    assert_eq!(decision.reason(), Some("unknown action"));
    assert!(decision.requirement.is_none());
    assert!(decision.remedy.is_none());
    assert_eq!(format_denial_message(&decision), "unknown action");
}

#[test]
fn multi_role_account_combines_roles() {
    let account = Account::new("multi")
        .with_roles(Roles::ARTIST | Roles::MARKETER)
        .verified(true);
    let principal = signed_in(account);

    assert!(has_all_access(
        &principal,
        &[Action::JoinCompetition, Action::CreateCampaign, Action::Comment]
    ));
    assert!(!has_all_access(&principal, &[Action::ListOnMarketplace]));
    assert!(has_any_access(&principal, &[Action::ListOnMarketplace, Action::Share]));
}

#[test]
fn denial_messages_follow_configured_table() {
    let messages =
        DenialMessages::from_json(r#"{ "premium-required": "Go Premium to download." }"#).unwrap();

    let denied = evaluate(
        &signed_in(Account::new("u1")),
        Action::Download,
        &ResourceContext::new(),
    );
    assert_eq!(messages.format(&denied), "Go Premium to download.");
    assert_eq!(
        format_denial_message(&denied),
        "Upgrade to Premium to unlock this feature."
    );

    // Entries that are not overridden keep their defaults.
    let anon = evaluate(&Principal::Anonymous, Action::Comment, &ResourceContext::new());
    assert_eq!(messages.format(&anon), "Please sign in to continue.");
}

#[test]
fn invalid_message_table_is_rejected() {
    let err = DenialMessages::from_json(r#"{ "vip-only": "nope" }"#).unwrap_err();
    assert!(err.to_string().contains("denial message table"));
}

#[test]
fn gate_grants_every_required_action() {
    let meta = RequestMeta::new(
        "req-gate",
        Account::new("artist-1").with_roles(Roles::ARTIST | Roles::LISTENER),
    );

    let ctx = AccessGate::new(meta)
        .on(ResourceContext::new().owned_by("artist-1"))
        .require_all([Action::Listen, Action::Download, Action::JoinCompetition])
        .build()
        .expect("artist owns the track");

    assert_eq!(ctx.granted_actions().len(), 3);
    let grant = ctx.grant(Action::Download).unwrap();
    assert!(grant.covers(Action::Download));

    let err = ctx.grant(Action::CreateCampaign).unwrap_err();
    assert_eq!(
        err.kind,
        ViolationKind::MissingGrant {
            action: Action::CreateCampaign
        }
    );
}

#[test]
fn gate_stops_at_first_denial() {
    let meta = RequestMeta::new("req-gate", Account::new("l-1").with_role(Role::Listener));

    let err = AccessGate::new(meta)
        .require(Action::Comment)
        .require(Action::ListOnMarketplace)
        .require(Action::CreateCampaign)
        .build()
        .unwrap_err();

    assert_eq!(err.action, Some(Action::ListOnMarketplace));
    assert_eq!(err.kind, ViolationKind::RoleRequired);
    assert_eq!(err.status_code(), 403);
}

#[test]
fn persona_does_not_affect_decisions() {
    let roles = Roles::ARTIST | Roles::MARKETER;
    let mut persona = Persona::new(roles);
    assert_eq!(persona.active(), Some(Role::Artist));

    persona.switch_to(Role::Marketer).unwrap();
    let principal = signed_in(Account::new("m").with_roles(persona.roles()));

    // Still an artist for access purposes while acting as a marketer.
    assert!(evaluate(&principal, Action::JoinCompetition, &ResourceContext::new()).allowed);

    let err = persona.switch_to(Role::Admin).unwrap_err();
    assert_eq!(err.kind, ViolationKind::RoleNotHeld { role: Role::Admin });
    assert_eq!(persona.active(), Some(Role::Marketer));
}

#[test]
fn restored_persona_falls_back_when_role_revoked() {
    let persona = Persona::restore(Roles::LISTENER, Some(Role::Entrepreneur));
    assert_eq!(persona.active(), Some(Role::Listener));
    assert!(!persona.can_switch());
}
