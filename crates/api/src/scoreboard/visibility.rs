//! Nametag and death message visibility for teams

use registry::ResourceKey;
use serde::{Deserialize, Serialize};

/// Controls whether nametags or death messages of team members are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Always visible. This is the default.
    #[default]
    Always,
    /// Visible to members of the same team only
    HideForOtherTeams,
    /// Visible to members of other teams only
    HideForOwnTeam,
    /// Never visible
    Never,
}

impl Visibility {
    pub const ALL: [Visibility; 4] = [
        Self::Always,
        Self::HideForOtherTeams,
        Self::HideForOwnTeam,
        Self::Never,
    ];

    pub const fn key(self) -> ResourceKey {
        ResourceKey::sponge(self.name())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::HideForOtherTeams => "hide_for_other_teams",
            Self::HideForOwnTeam => "hide_for_own_team",
            Self::Never => "never",
        }
    }

    pub fn from_key(key: &ResourceKey) -> Option<Self> {
        if key.namespace() != registry::SPONGE_NAMESPACE {
            return None;
        }
        Self::ALL.into_iter().find(|visibility| visibility.name() == key.value())
    }

    /// Whether a member's nametag or death message is shown to a viewer.
    ///
    /// `same_team` tells whether the viewer is on the member's team.
    pub fn is_visible_to(self, same_team: bool) -> bool {
        match self {
            Self::Always => true,
            Self::HideForOtherTeams => same_team,
            Self::HideForOwnTeam => !same_team,
            Self::Never => false,
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sponge:{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_rules() {
        assert!(Visibility::Always.is_visible_to(true));
        assert!(Visibility::Always.is_visible_to(false));

        assert!(Visibility::HideForOtherTeams.is_visible_to(true));
        assert!(!Visibility::HideForOtherTeams.is_visible_to(false));

        assert!(!Visibility::HideForOwnTeam.is_visible_to(true));
        assert!(Visibility::HideForOwnTeam.is_visible_to(false));

        assert!(!Visibility::Never.is_visible_to(true));
        assert!(!Visibility::Never.is_visible_to(false));
    }

    #[test]
    fn test_keys_and_default() {
        assert_eq!(Visibility::default(), Visibility::Always);
        assert_eq!(Visibility::Never.to_string(), "sponge:never");

        for visibility in Visibility::ALL {
            assert_eq!(Visibility::from_key(&visibility.key()), Some(visibility));
        }
        assert_eq!(Visibility::from_key(&ResourceKey::minecraft("never")), None);
    }
}
