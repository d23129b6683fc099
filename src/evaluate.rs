//! The access decision evaluator.
//!
//! [`evaluate`] is a flat decision table over [`Action`]. It reads nothing but
//! its arguments and writes nothing at all: no logging, no clock, no shared
//! state. Callers that want a trace of decisions go through
//! [`AccessGate`](crate::AccessGate), which logs and audits around it.

use crate::action::Action;
use crate::decision::{Decision, Remedy, Requirement};
use crate::principal::{Account, Principal};
use crate::resource::ResourceContext;
use crate::role::{Role, Roles};

/// Decides whether `principal` may perform `action` on `resource`.
///
/// # Examples
///
/// ```
/// use access_core::{evaluate, Account, Action, Principal, Remedy, Requirement, ResourceContext};
///
/// let listener = Principal::from(Account::new("u1"));
/// let decision = evaluate(&listener, Action::Download, &ResourceContext::new().owned_by("u2"));
///
/// assert!(!decision.allowed);
/// assert_eq!(decision.requirement, Some(Requirement::PremiumRequired));
/// assert_eq!(decision.remedy, Some(Remedy::Upgrade));
///
/// let anonymous = Principal::Anonymous;
/// let decision = evaluate(&anonymous, Action::Listen, &ResourceContext::new().promotional());
/// assert!(decision.allowed);
/// ```
pub fn evaluate(principal: &Principal, action: Action, resource: &ResourceContext) -> Decision {
    match principal {
        Principal::Anonymous => evaluate_anonymous(action, resource),
        Principal::Authenticated(account) => evaluate_account(account, action, resource),
    }
}

/// Like [`evaluate`], but takes the action by wire name.
///
/// Names outside the known action set are denied with reason
/// `"unknown action"` and no requirement or remedy.
pub fn evaluate_named(principal: &Principal, action: &str, resource: &ResourceContext) -> Decision {
    match action.parse::<Action>() {
        Ok(action) => evaluate(principal, action, resource),
        Err(_) => Decision::unknown_action(),
    }
}

/// Returns true if at least one of `actions` is allowed.
///
/// Stops at the first allow. Each action is checked against an untagged,
/// unowned resource.
pub fn has_any_access(principal: &Principal, actions: &[Action]) -> bool {
    let resource = ResourceContext::default();
    actions
        .iter()
        .any(|action| evaluate(principal, *action, &resource).allowed)
}

/// Returns true only if every one of `actions` is allowed.
///
/// Stops at the first denial. Each action is checked against an untagged,
/// unowned resource.
pub fn has_all_access(principal: &Principal, actions: &[Action]) -> bool {
    let resource = ResourceContext::default();
    actions
        .iter()
        .all(|action| evaluate(principal, *action, &resource).allowed)
}

fn evaluate_anonymous(action: Action, resource: &ResourceContext) -> Decision {
    match action {
        Action::Listen | Action::Like | Action::Share => {
            if resource.is_promotional() {
                Decision::allow()
            } else {
                Decision::deny(
                    "Sign in to access tracks outside tournaments",
                    Requirement::TournamentOnly,
                    Remedy::SignIn,
                )
            }
        }
        Action::Comment => sign_in_required("Sign in to comment"),
        Action::Download => sign_in_required("Sign in to download tracks"),
        Action::JoinCompetition => sign_in_required("Sign in to join competitions"),
        Action::ListOnMarketplace => sign_in_required("Sign in to sell on the marketplace"),
        Action::CreateCampaign => sign_in_required("Sign in to create campaigns"),
    }
}

fn evaluate_account(account: &Account, action: Action, resource: &ResourceContext) -> Decision {
    match action {
        Action::Listen | Action::Like | Action::Share | Action::Comment => Decision::allow(),
        Action::Download => {
            let own_upload = account.has_role(Role::Artist) && account.owns(resource);
            if account.is_premium() || own_upload {
                Decision::allow()
            } else {
                Decision::deny(
                    "Premium subscription required to download",
                    Requirement::PremiumRequired,
                    Remedy::Upgrade,
                )
            }
        }
        Action::JoinCompetition => require_any_role(
            account,
            Roles::ARTIST | Roles::ADMIN,
            "Only artists can join competitions",
        ),
        Action::ListOnMarketplace => {
            let decision = require_any_role(
                account,
                Roles::ENTREPRENEUR | Roles::ADMIN,
                "Only entrepreneurs can list on the marketplace",
            );
            if decision.allowed && !account.verified {
                Decision::deny(
                    "Verify your identity to sell on the marketplace",
                    Requirement::VerificationRequired,
                    Remedy::VerifyIdentity,
                )
            } else {
                decision
            }
        }
        Action::CreateCampaign => require_any_role(
            account,
            Roles::MARKETER | Roles::ADMIN,
            "Only marketers can create campaigns",
        ),
    }
}

fn sign_in_required(reason: &str) -> Decision {
    Decision::deny(reason, Requirement::LoginRequired, Remedy::SignIn)
}

fn require_any_role(account: &Account, roles: Roles, reason: &str) -> Decision {
    if account.roles.contains_any(roles) {
        Decision::allow()
    } else {
        Decision::deny(reason, Requirement::RoleRequired, Remedy::InsufficientRole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str) -> Account {
        Account::new(id)
    }

    fn authed(account: Account) -> Principal {
        Principal::Authenticated(account)
    }

    #[test]
    fn anonymous_listen_like_share_need_promotional_resource() {
        let regular = ResourceContext::new();
        let promo = ResourceContext::new().promotional();

        for action in [Action::Listen, Action::Like, Action::Share] {
            let denied = evaluate(&Principal::Anonymous, action, &regular);
            assert!(!denied.allowed, "{action} should be denied");
            assert_eq!(denied.requirement, Some(Requirement::TournamentOnly));
            assert_eq!(denied.remedy, Some(Remedy::SignIn));

            assert_eq!(evaluate(&Principal::Anonymous, action, &promo), Decision::allow());
        }
    }

    #[test]
    fn anonymous_comment_is_denied_even_on_promotional_resource() {
        let d = evaluate(
            &Principal::Anonymous,
            Action::Comment,
            &ResourceContext::new().promotional(),
        );
        assert!(!d.allowed);
        assert_eq!(d.requirement, Some(Requirement::LoginRequired));
        assert_eq!(d.remedy, Some(Remedy::SignIn));
    }

    #[test]
    fn anonymous_gated_actions_suggest_sign_in() {
        for action in [
            Action::Download,
            Action::JoinCompetition,
            Action::ListOnMarketplace,
            Action::CreateCampaign,
        ] {
            let d = evaluate(&Principal::Anonymous, action, &ResourceContext::new());
            assert!(!d.allowed);
            assert_eq!(d.requirement, Some(Requirement::LoginRequired));
            assert_eq!(d.remedy, Some(Remedy::SignIn));
        }
    }

    #[test]
    fn authenticated_social_actions_always_allowed() {
        let p = authed(account("u1"));
        for action in [Action::Listen, Action::Like, Action::Share, Action::Comment] {
            assert!(evaluate(&p, action, &ResourceContext::new()).allowed);
            assert!(evaluate(&p, action, &ResourceContext::new().promotional()).allowed);
        }
    }

    #[test]
    fn download_without_entitlement_requires_premium() {
        let p = authed(account("u1"));
        let d = evaluate(&p, Action::Download, &ResourceContext::new().owned_by("u2"));
        assert_eq!(
            d,
            Decision::deny(
                "Premium subscription required to download",
                Requirement::PremiumRequired,
                Remedy::Upgrade,
            )
        );
    }

    #[test]
    fn premium_listener_can_download() {
        let p = authed(account("u1").with_role(Role::Listener).premium(true));
        assert!(evaluate(&p, Action::Download, &ResourceContext::new()).allowed);
    }

    #[test]
    fn artist_downloads_own_upload_without_premium() {
        let p = authed(account("u1").with_role(Role::Artist));
        assert!(evaluate(&p, Action::Download, &ResourceContext::new().owned_by("u1")).allowed);

        let other = evaluate(&p, Action::Download, &ResourceContext::new().owned_by("u2"));
        assert_eq!(other.requirement, Some(Requirement::PremiumRequired));

        let unowned = evaluate(&p, Action::Download, &ResourceContext::new());
        assert!(!unowned.allowed);
    }

    #[test]
    fn owner_without_artist_role_still_needs_premium() {
        let p = authed(account("u1").with_role(Role::Listener));
        let d = evaluate(&p, Action::Download, &ResourceContext::new().owned_by("u1"));
        assert_eq!(d.requirement, Some(Requirement::PremiumRequired));
    }

    #[test]
    fn admin_always_downloads() {
        let p = authed(account("admin").with_role(Role::Admin).premium(false));
        assert!(evaluate(&p, Action::Download, &ResourceContext::new().owned_by("x")).allowed);
    }

    #[test]
    fn join_competition_needs_artist_or_admin() {
        let artist = authed(account("a").with_role(Role::Artist));
        let admin = authed(account("b").with_role(Role::Admin));
        let listener = authed(account("c").with_role(Role::Listener));

        assert!(evaluate(&artist, Action::JoinCompetition, &ResourceContext::new()).allowed);
        assert!(evaluate(&admin, Action::JoinCompetition, &ResourceContext::new()).allowed);

        let d = evaluate(&listener, Action::JoinCompetition, &ResourceContext::new());
        assert_eq!(d.requirement, Some(Requirement::RoleRequired));
        assert_eq!(d.remedy, Some(Remedy::InsufficientRole));
    }

    #[test]
    fn marketplace_needs_role_and_verification() {
        let verified_seller = authed(account("s").with_role(Role::Entrepreneur).verified(true));
        assert!(evaluate(&verified_seller, Action::ListOnMarketplace, &ResourceContext::new()).allowed);

        let unverified_seller = authed(account("s").with_role(Role::Entrepreneur));
        let d = evaluate(&unverified_seller, Action::ListOnMarketplace, &ResourceContext::new());
        assert_eq!(d.requirement, Some(Requirement::VerificationRequired));
        assert_eq!(d.remedy, Some(Remedy::VerifyIdentity));

        let verified_listener = authed(account("l").with_role(Role::Listener).verified(true));
        let d = evaluate(&verified_listener, Action::ListOnMarketplace, &ResourceContext::new());
        assert_eq!(d.requirement, Some(Requirement::RoleRequired));
    }

    #[test]
    fn unverified_admin_cannot_list() {
        let admin = authed(account("root").with_role(Role::Admin));
        let d = evaluate(&admin, Action::ListOnMarketplace, &ResourceContext::new());
        assert_eq!(d.requirement, Some(Requirement::VerificationRequired));

        let verified = authed(account("root").with_role(Role::Admin).verified(true));
        assert!(evaluate(&verified, Action::ListOnMarketplace, &ResourceContext::new()).allowed);
    }

    #[test]
    fn create_campaign_needs_marketer_or_admin() {
        let marketer = authed(account("m").with_role(Role::Marketer));
        assert!(evaluate(&marketer, Action::CreateCampaign, &ResourceContext::new()).allowed);

        let artist = authed(account("a").with_role(Role::Artist).premium(true));
        let d = evaluate(&artist, Action::CreateCampaign, &ResourceContext::new());
        assert!(!d.allowed);
        assert_eq!(d.requirement, Some(Requirement::RoleRequired));
    }

    #[test]
    fn evaluate_named_matches_evaluate() {
        let p = authed(account("u1").with_role(Role::Marketer));
        let resource = ResourceContext::new();
        for action in Action::ALL {
            assert_eq!(
                evaluate_named(&p, action.name(), &resource),
                evaluate(&p, action, &resource)
            );
        }
    }

    #[test]
    fn evaluate_named_denies_unknown_action() {
        let admin = authed(account("root").with_role(Role::Admin).verified(true));
        let d = evaluate_named(&admin, "delete-everything", &ResourceContext::new());
        assert_eq!(d, Decision::unknown_action());
    }

    #[test]
    fn has_any_access_short_circuits_on_allow() {
        let listener = authed(account("l"));
        assert!(has_any_access(&listener, &[Action::CreateCampaign, Action::Listen]));
        assert!(!has_any_access(
            &listener,
            &[Action::CreateCampaign, Action::JoinCompetition]
        ));
        assert!(!has_any_access(&Principal::Anonymous, &[Action::Listen]));
    }

    #[test]
    fn has_all_access_requires_every_action() {
        let artist = authed(account("a").with_role(Role::Artist));
        assert!(has_all_access(&artist, &[Action::Listen, Action::JoinCompetition]));
        assert!(!has_all_access(&artist, &[Action::Listen, Action::CreateCampaign]));
    }

    #[test]
    fn combinators_on_empty_list() {
        let p = Principal::Anonymous;
        assert!(!has_any_access(&p, &[]));
        assert!(has_all_access(&p, &[]));
    }

    mod proptests {
        use super::*;
        use crate::test_utils::{arb_account, arb_action, arb_principal, arb_resource, arb_role};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn proptest_evaluate_is_deterministic(
                principal in arb_principal(),
                action in arb_action(),
                resource in arb_resource(),
            ) {
                prop_assert_eq!(
                    evaluate(&principal, action, &resource),
                    evaluate(&principal, action, &resource)
                );
            }

            #[test]
            fn proptest_allowed_decisions_carry_nothing_else(
                principal in arb_principal(),
                action in arb_action(),
                resource in arb_resource(),
            ) {
                let d = evaluate(&principal, action, &resource);
                if d.allowed {
                    prop_assert_eq!(d, Decision::allow());
                } else {
                    prop_assert!(d.reason.is_some());
                    prop_assert!(d.requirement.is_some());
                    prop_assert!(d.remedy.is_some());
                }
            }

            #[test]
            fn proptest_anonymous_denials_suggest_sign_in(
                action in arb_action(),
                resource in arb_resource(),
            ) {
                let d = evaluate(&Principal::Anonymous, action, &resource);
                if !d.allowed {
                    prop_assert_eq!(d.remedy, Some(Remedy::SignIn));
                }
            }

            #[test]
            fn proptest_admin_gains_every_role_gate(
                account in arb_account(),
                action in arb_action(),
                resource in arb_resource(),
            ) {
                let admin = authed(account.with_role(Role::Admin).verified(true));
                prop_assert!(evaluate(&admin, action, &resource).allowed);
            }

            #[test]
            fn proptest_extra_role_never_revokes_access(
                account in arb_account(),
                role in arb_role(),
                action in arb_action(),
                resource in arb_resource(),
            ) {
                let before = evaluate(&authed(account.clone()), action, &resource);
                let after = evaluate(&authed(account.with_role(role)), action, &resource);
                prop_assert!(!before.allowed || after.allowed);
            }

            #[test]
            fn proptest_combinators_agree_with_evaluate(
                principal in arb_principal(),
                actions in prop::collection::vec(arb_action(), 0..5),
            ) {
                let resource = ResourceContext::default();
                let allowed: Vec<bool> = actions
                    .iter()
                    .map(|a| evaluate(&principal, *a, &resource).allowed)
                    .collect();
                prop_assert_eq!(has_any_access(&principal, &actions), allowed.iter().any(|b| *b));
                prop_assert_eq!(has_all_access(&principal, &actions), allowed.iter().all(|b| *b));
            }
        }
    }
}
