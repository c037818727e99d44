//! Registry constants for every [`Visibility`]

use registry::{DefaultedRegistryReference, RegistryKey, RegistryScope};

use crate::registry_types;
use crate::scoreboard::visibility::Visibility;

pub const SCOPE: RegistryScope = RegistryScope::Game;

/// Always visible. This is the default value.
pub const ALWAYS: DefaultedRegistryReference<Visibility> = key(Visibility::Always);

/// Hidden from members of other teams, visible to the own team.
pub const HIDE_FOR_OTHER_TEAMS: DefaultedRegistryReference<Visibility> = key(Visibility::HideForOtherTeams);

/// Hidden from the own team, visible to members of other teams.
pub const HIDE_FOR_OWN_TEAM: DefaultedRegistryReference<Visibility> = key(Visibility::HideForOwnTeam);

pub const NEVER: DefaultedRegistryReference<Visibility> = key(Visibility::Never);

pub const ALL: [DefaultedRegistryReference<Visibility>; 4] = [ALWAYS, HIDE_FOR_OTHER_TEAMS, HIDE_FOR_OWN_TEAM, NEVER];

const fn key(visibility: Visibility) -> DefaultedRegistryReference<Visibility> {
    RegistryKey::of(registry_types::VISIBILITY, visibility.key()).as_defaulted_reference(crate::game::registries)
}
