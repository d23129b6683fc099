//! Proptest strategies shared by the in-crate property tests.

use proptest::prelude::*;

use crate::{Account, Action, Principal, ResourceContext, Role, Roles};

pub(crate) fn arb_roles() -> impl Strategy<Value = Roles> {
    (0u8..32).prop_map(Roles::from_bits_truncate)
}

pub(crate) fn arb_account() -> impl Strategy<Value = Account> {
    (
        prop::string::string_regex("u-[a-z0-9]{1,6}").unwrap(),
        arb_roles(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(id, roles, premium, verified)| {
            Account::new(id)
                .with_roles(roles)
                .premium(premium)
                .verified(verified)
        })
}

pub(crate) fn arb_principal() -> impl Strategy<Value = Principal> {
    prop_oneof![
        1 => Just(Principal::Anonymous),
        3 => arb_account().prop_map(Principal::Authenticated),
    ]
}

pub(crate) fn arb_action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

pub(crate) fn arb_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

pub(crate) fn arb_resource() -> impl Strategy<Value = ResourceContext> {
    (
        any::<bool>(),
        prop::option::of(prop::string::string_regex("u-[a-z0-9]{1,6}").unwrap()),
    )
        .prop_map(|(promotional, owner)| {
            let ctx = ResourceContext::new().with_promotional(promotional);
            match owner {
                Some(owner) => ctx.owned_by(owner),
                None => ctx,
            }
        })
}
