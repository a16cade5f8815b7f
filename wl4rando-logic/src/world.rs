//! A per-session view of the game world: the player slot, the chosen
//! options, and the registry of item locations that access rules attach to.
//! Region graph topology and entrance wiring live with the world builder,
//! not here.

use anyhow::{Context, Result};
use hashbrown::HashMap;

use crate::{CollectedState, Options, Requirement};
use wl4rando_game::{GameData, PlayerId};

#[derive(Clone, Debug)]
pub struct Location {
    pub name: String,
    /// None means ungated: obtainable as soon as the containing region is
    /// reached.
    pub access_rule: Option<Requirement>,
}

impl Location {
    pub fn can_access(&self, world: &World, state: &CollectedState) -> bool {
        match &self.access_rule {
            None => true,
            Some(req) => req.evaluate(world, state),
        }
    }
}

#[derive(Clone, Debug)]
pub struct World {
    pub player: PlayerId,
    pub options: Options,
    locations: HashMap<String, Location>,
}

impl World {
    /// Creates a world with one ungated location per catalog entry.
    /// Event-only names get no location object, matching the external
    /// region-graph builder's behavior.
    pub fn new(player: PlayerId, options: Options, game_data: &GameData) -> Self {
        let locations = game_data
            .location_names
            .iter()
            .map(|name| {
                (
                    name.clone(),
                    Location {
                        name: name.clone(),
                        access_rule: None,
                    },
                )
            })
            .collect();
        World {
            player,
            options,
            locations,
        }
    }

    pub fn get_location(&self, name: &str) -> Result<&Location> {
        self.locations
            .get(name)
            .with_context(|| format!("Unknown location '{name}'"))
    }

    pub fn try_get_location_mut(&mut self, name: &str) -> Option<&mut Location> {
        self.locations.get_mut(name)
    }

    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_start_ungated() {
        let game_data = GameData::new();
        let world = World::new(0, Options::default(), &game_data);
        let state = CollectedState::new(1, &game_data);
        let location = world.get_location("Palm Tree Paradise - First Box").unwrap();
        assert!(location.access_rule.is_none());
        assert!(location.can_access(&world, &state));
    }

    #[test]
    fn event_only_names_have_no_location() {
        let game_data = GameData::new();
        let world = World::new(0, Options::default(), &game_data);
        assert!(world.get_location("Sound Room - Emergency Exit").is_err());
    }
}
