//! Platform roles and role sets.
//!
//! A principal may hold several roles at once (an artist who also sells merch,
//! an admin who listens). [`Roles`] is the set type the evaluator checks
//! membership against; [`Role`] names a single member of that set.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

bitflags! {
    /// Set of roles held by a principal.
    ///
    /// Serializes transparently through the `bitflags` serde support, so a
    /// session cache can store it as a compact value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Roles: u8 {
        /// Content creator: uploads tracks, enters tournaments
        const ARTIST       = 1 << 0;
        /// Listener account
        const LISTENER     = 1 << 1;
        /// Seller on the marketplace
        const ENTREPRENEUR = 1 << 2;
        /// Promoter running boost and ad campaigns
        const MARKETER     = 1 << 3;
        /// Platform administrator
        const ADMIN        = 1 << 4;
    }
}

/// A single platform role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Content creator
    Artist,
    /// Listener
    Listener,
    /// Marketplace seller
    Entrepreneur,
    /// Campaign promoter
    Marketer,
    /// Administrator
    Admin,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Artist,
        Role::Listener,
        Role::Entrepreneur,
        Role::Marketer,
        Role::Admin,
    ];

    /// Returns the single-member set for this role.
    pub const fn flag(self) -> Roles {
        match self {
            Role::Artist => Roles::ARTIST,
            Role::Listener => Roles::LISTENER,
            Role::Entrepreneur => Roles::ENTREPRENEUR,
            Role::Marketer => Roles::MARKETER,
            Role::Admin => Roles::ADMIN,
        }
    }

    /// Returns the canonical session label for this role.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Artist => "artist",
            Role::Listener => "listener",
            Role::Entrepreneur => "entrepreneur",
            Role::Marketer => "marketer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a role label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role label '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Parses a session role label.
    ///
    /// Matching ignores ASCII case and surrounding whitespace. Generic aliases
    /// (`creator`, `seller`, `promoter`, `administrator`) map onto the
    /// platform's own labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artist" | "creator" => Ok(Role::Artist),
            "listener" => Ok(Role::Listener),
            "entrepreneur" | "seller" => Ok(Role::Entrepreneur),
            "marketer" | "promoter" => Ok(Role::Marketer),
            "admin" | "administrator" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl From<Role> for Roles {
    fn from(role: Role) -> Self {
        role.flag()
    }
}

impl FromIterator<Role> for Roles {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Roles::empty(), |set, role| set | role.flag())
    }
}

impl Roles {
    /// Builds a role set from session labels.
    ///
    /// Labels that do not name a role are skipped with a warning rather than
    /// failing the whole session, so a newer identity provider can add labels
    /// this crate does not know yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use access_core::{Role, Roles};
    ///
    /// let roles = Roles::from_labels(["artist", "Listener", "dj"]);
    /// assert!(roles.has(Role::Artist));
    /// assert!(roles.has(Role::Listener));
    /// assert_eq!(roles.iter_roles().count(), 2);
    /// ```
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roles = Roles::empty();
        for label in labels {
            let label = label.as_ref();
            match label.parse::<Role>() {
                Ok(role) => roles |= role.flag(),
                Err(_) => tracing::warn!(label, "ignoring unknown role label"),
            }
        }
        roles
    }

    /// Returns true if the set holds `role`.
    pub const fn has(&self, role: Role) -> bool {
        self.contains(role.flag())
    }

    /// Returns true if the set shares at least one role with `other`.
    pub const fn contains_any(&self, other: Roles) -> bool {
        self.intersects(other)
    }

    /// Iterates over the held roles in declaration order.
    pub fn iter_roles(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(move |role| self.has(*role))
    }

    /// Returns the canonical labels of the held roles.
    pub fn labels(&self) -> Vec<&'static str> {
        self.iter_roles().map(Role::label).collect()
    }
}
