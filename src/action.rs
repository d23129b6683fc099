use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An operation a principal wants to perform on a resource.
///
/// The set is closed: every variant has exactly one rule in
/// [`evaluate`](crate::evaluate). Names outside this set only exist at string
/// boundaries and are handled by [`evaluate_named`](crate::evaluate_named).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Stream a track
    Listen,
    /// Like a track
    Like,
    /// Share a track
    Share,
    /// Comment on a track
    Comment,
    /// Download a track file
    Download,
    /// Enter a tournament
    JoinCompetition,
    /// List a product on the marketplace
    ListOnMarketplace,
    /// Create a boost or ad campaign
    CreateCampaign,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 8] = [
        Action::Listen,
        Action::Like,
        Action::Share,
        Action::Comment,
        Action::Download,
        Action::JoinCompetition,
        Action::ListOnMarketplace,
        Action::CreateCampaign,
    ];

    /// Returns the kebab-case wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Action::Listen => "listen",
            Action::Like => "like",
            Action::Share => "share",
            Action::Comment => "comment",
            Action::Download => "download",
            Action::JoinCompetition => "join-competition",
            Action::ListOnMarketplace => "list-on-marketplace",
            Action::CreateCampaign => "create-campaign",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an action name is outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action '{}'", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_parse_back() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn action_display_is_kebab_case() {
        assert_eq!(Action::JoinCompetition.to_string(), "join-competition");
        assert_eq!(Action::ListOnMarketplace.to_string(), "list-on-marketplace");
    }

    #[test]
    fn unknown_action_name_is_rejected() {
        let err = "delete-account".parse::<Action>().unwrap_err();
        assert_eq!(err, UnknownAction("delete-account".to_string()));
        assert_eq!(err.to_string(), "unknown action 'delete-account'");
    }

    #[test]
    fn action_names_are_case_sensitive() {
        assert!("Listen".parse::<Action>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Action::CreateCampaign).unwrap();
        assert_eq!(json, "\"create-campaign\"");

        let action: Action = serde_json::from_str("\"join-competition\"").unwrap();
        assert_eq!(action, Action::JoinCompetition);
    }
}
