use crate::resource::ResourceContext;
use crate::role::{Role, Roles};

/// An authenticated user as seen by the evaluator.
///
/// Built by the session boundary from identity-provider claims and passed by
/// reference into every check. Nothing in this crate mutates it.
///
/// # Examples
///
/// ```
/// use access_core::{Account, Role};
///
/// let account = Account::new("u-1")
///     .with_role(Role::Artist)
///     .verified(true);
///
/// assert!(account.has_role(Role::Artist));
/// assert!(!account.is_premium());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    /// Unique identifier for this account
    pub id: String,
    /// Roles held by the account
    pub roles: Roles,
    /// Explicit premium entitlement
    pub premium: bool,
    /// Identity has been verified
    pub verified: bool,
}

impl Account {
    /// Creates an account with no roles, no entitlement and no verification.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            roles: Roles::empty(),
            premium: false,
            verified: false,
        }
    }

    /// Replaces the role set.
    pub fn with_roles(mut self, roles: Roles) -> Self {
        self.roles = roles;
        self
    }

    /// Adds a single role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles |= role.flag();
        self
    }

    /// Sets the explicit premium entitlement.
    pub fn premium(mut self, premium: bool) -> Self {
        self.premium = premium;
        self
    }

    /// Sets the verified-identity flag.
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Returns true if the account holds `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.has(role)
    }

    /// Returns true if the account is premium-entitled.
    ///
    /// Administrators are always entitled, whatever the explicit flag says.
    pub fn is_premium(&self) -> bool {
        self.premium || self.has_role(Role::Admin)
    }

    /// Returns true if `resource` names this account as its owner.
    ///
    /// A resource without an owner id is never owned.
    pub fn owns(&self, resource: &ResourceContext) -> bool {
        resource.owner_id() == Some(self.id.as_str())
    }
}

/// The acting user context of one access check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Principal {
    /// No session
    #[default]
    Anonymous,
    /// Signed-in account
    Authenticated(Account),
}

impl Principal {
    /// Returns true for a signed-in principal.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::Authenticated(_))
    }

    /// Returns the account behind an authenticated principal.
    pub fn account(&self) -> Option<&Account> {
        match self {
            Principal::Authenticated(account) => Some(account),
            Principal::Anonymous => None,
        }
    }

    /// Returns the account id, or `None` when anonymous.
    pub fn id(&self) -> Option<&str> {
        self.account().map(|a| a.id.as_str())
    }
}

impl From<Account> for Principal {
    fn from(account: Account) -> Self {
        Principal::Authenticated(account)
    }
}

impl From<Option<Account>> for Principal {
    fn from(account: Option<Account>) -> Self {
        account.map_or(Principal::Anonymous, Principal::Authenticated)
    }
}
