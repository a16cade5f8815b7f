//! Reachability logic for the Wario Land 4 randomizer: player options,
//! collected-item state, and the `Requirement` predicates that gate regions
//! and item locations.

pub mod rules;
pub mod world;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{EnumString, VariantNames};

use crate::world::World;
pub use wl4rando_game::{ItemCount, ItemId, PlayerId};
use wl4rando_game::GameData;

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
pub enum Difficulty {
    #[default]
    Normal,
    Hard,
    SHard,
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumString, VariantNames, Serialize,
    Deserialize,
)]
pub enum Logic {
    #[default]
    Basic,
    Advanced,
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumString, VariantNames, Serialize,
    Deserialize,
)]
pub enum Goal {
    #[default]
    GoldenDiva,
    GoldenTreasureHunt,
    GoldenDivaTreasureHunt,
}

/// Player-chosen generation options for one session. Read-only during
/// evaluation; only the surrounding setup mutates these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub logic: Logic,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default = "default_golden_treasure_count")]
    pub golden_treasure_count: ItemCount,
    #[serde(default = "default_required_jewels")]
    pub required_jewels: ItemCount,
}

fn default_golden_treasure_count() -> ItemCount {
    12
}

fn default_required_jewels() -> ItemCount {
    1
}

impl Default for Options {
    fn default() -> Self {
        Options {
            difficulty: Difficulty::default(),
            logic: Logic::default(),
            goal: Goal::default(),
            golden_treasure_count: default_golden_treasure_count(),
            required_jewels: default_required_jewels(),
        }
    }
}

impl Options {
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).context("parsing options")
    }

    /// Set an option by name. An unknown option or value names a bug in the
    /// caller's tables, so it fails rather than being ignored.
    pub fn set(&mut self, option_name: &str, value: &str) -> Result<()> {
        match option_name {
            "difficulty" => {
                self.difficulty = Difficulty::from_str(value)
                    .map_err(|_| anyhow::anyhow!("Unknown difficulty '{value}'"))?;
            }
            "logic" => {
                self.logic = Logic::from_str(value)
                    .map_err(|_| anyhow::anyhow!("Unknown logic mode '{value}'"))?;
            }
            "goal" => {
                self.goal = Goal::from_str(value)
                    .map_err(|_| anyhow::anyhow!("Unknown goal '{value}'"))?;
            }
            "golden_treasure_count" => {
                self.golden_treasure_count = value
                    .parse()
                    .with_context(|| format!("parsing golden_treasure_count '{value}'"))?;
            }
            "required_jewels" => {
                self.required_jewels = value
                    .parse()
                    .with_context(|| format!("parsing required_jewels '{value}'"))?;
            }
            _ => bail!("Unknown option '{option_name}'"),
        }
        Ok(())
    }
}

/// The simulated inventory of every player in the session, as item counts.
/// Mutated by the surrounding search, never by requirement evaluation.
#[derive(Clone, Debug)]
pub struct CollectedState {
    item_counts: Vec<Vec<ItemCount>>,
}

impl CollectedState {
    pub fn new(num_players: usize, game_data: &GameData) -> Self {
        CollectedState {
            item_counts: vec![vec![0; game_data.item_isv.keys.len()]; num_players],
        }
    }

    pub fn has(&self, item_id: ItemId, player: PlayerId, count: ItemCount) -> bool {
        self.item_counts[player][item_id] >= count
    }

    pub fn count(&self, item_id: ItemId, player: PlayerId) -> ItemCount {
        self.item_counts[player][item_id]
    }

    pub fn collect(&mut self, player: PlayerId, item_id: ItemId) {
        self.item_counts[player][item_id] += 1;
    }

    pub fn remove(&mut self, player: PlayerId, item_id: ItemId) {
        if self.item_counts[player][item_id] > 0 {
            self.item_counts[player][item_id] -= 1;
        }
    }
}

/// An immutable predicate over (world, collected state). Composition with
/// `make_and`/`make_or` builds a new value; operands are never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    Free,
    Never,
    Item {
        item_id: ItemId,
        count: ItemCount,
    },
    /// Holds when at least `golden_treasure_count` of the listed treasure
    /// items have been found (one copy each).
    TreasureHunt {
        treasures: Vec<ItemId>,
    },
    DifficultyIs(Difficulty),
    DifficultyIsNot(Difficulty),
    LogicIs(Logic),
    GoalIs(Goal),
    And(Vec<Requirement>),
    Or(Vec<Requirement>),
}

impl Requirement {
    pub fn make_and(reqs: Vec<Requirement>) -> Requirement {
        let mut out_reqs: Vec<Requirement> = vec![];
        for req in reqs {
            match req {
                Requirement::Never => return Requirement::Never,
                Requirement::Free => continue,
                Requirement::And(and_reqs) => out_reqs.extend(and_reqs),
                other => out_reqs.push(other),
            }
        }
        if out_reqs.is_empty() {
            Requirement::Free
        } else if out_reqs.len() == 1 {
            out_reqs.into_iter().next().unwrap()
        } else {
            Requirement::And(out_reqs)
        }
    }

    pub fn make_or(reqs: Vec<Requirement>) -> Requirement {
        let mut out_reqs: Vec<Requirement> = vec![];
        for req in reqs {
            match req {
                Requirement::Never => continue,
                Requirement::Free => return Requirement::Free,
                Requirement::Or(or_reqs) => out_reqs.extend(or_reqs),
                other => out_reqs.push(other),
            }
        }
        if out_reqs.is_empty() {
            Requirement::Never
        } else if out_reqs.len() == 1 {
            out_reqs.into_iter().next().unwrap()
        } else {
            Requirement::Or(out_reqs)
        }
    }

    pub fn evaluate(&self, world: &World, state: &CollectedState) -> bool {
        match self {
            Requirement::Free => true,
            Requirement::Never => false,
            &Requirement::Item { item_id, count } => state.has(item_id, world.player, count),
            Requirement::TreasureHunt { treasures } => {
                let found = treasures
                    .iter()
                    .filter(|&&item_id| state.has(item_id, world.player, 1))
                    .count() as ItemCount;
                found >= world.options.golden_treasure_count
            }
            &Requirement::DifficultyIs(difficulty) => world.options.difficulty == difficulty,
            &Requirement::DifficultyIsNot(difficulty) => world.options.difficulty != difficulty,
            &Requirement::LogicIs(logic) => world.options.logic == logic,
            &Requirement::GoalIs(goal) => world.options.goal == goal,
            Requirement::And(reqs) => reqs.iter().all(|req| req.evaluate(world, state)),
            Requirement::Or(reqs) => reqs.iter().any(|req| req.evaluate(world, state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_world() -> (GameData, World) {
        let game_data = GameData::new();
        let world = World::new(0, Options::default(), &game_data);
        (game_data, world)
    }

    #[test]
    fn conjunction_and_disjunction_follow_boolean_algebra() {
        let (game_data, world) = make_world();
        let mut state = CollectedState::new(1, &game_data);
        let swim = game_data.item_id("Swim").unwrap();
        let dash = game_data.item_id("Dash Attack").unwrap();
        state.collect(0, swim);

        let a = Requirement::Item {
            item_id: swim,
            count: 1,
        };
        let b = Requirement::Item {
            item_id: dash,
            count: 1,
        };
        for x in [&a, &b] {
            for y in [&a, &b] {
                let and_xy = Requirement::make_and(vec![x.clone(), y.clone()]);
                let or_xy = Requirement::make_or(vec![x.clone(), y.clone()]);
                assert_eq!(
                    and_xy.evaluate(&world, &state),
                    x.evaluate(&world, &state) && y.evaluate(&world, &state)
                );
                assert_eq!(
                    or_xy.evaluate(&world, &state),
                    x.evaluate(&world, &state) || y.evaluate(&world, &state)
                );
                // Commutativity under evaluation:
                let and_yx = Requirement::make_and(vec![y.clone(), x.clone()]);
                assert_eq!(
                    and_xy.evaluate(&world, &state),
                    and_yx.evaluate(&world, &state)
                );
            }
        }
        // Distributivity: a AND (a OR b) == a
        let distributed = Requirement::make_and(vec![
            a.clone(),
            Requirement::make_or(vec![a.clone(), b.clone()]),
        ]);
        assert_eq!(
            distributed.evaluate(&world, &state),
            a.evaluate(&world, &state)
        );
    }

    #[test]
    fn empty_conjunction_is_free_and_empty_disjunction_is_never() {
        let (game_data, world) = make_world();
        let state = CollectedState::new(1, &game_data);
        assert_eq!(Requirement::make_and(vec![]), Requirement::Free);
        assert_eq!(Requirement::make_or(vec![]), Requirement::Never);
        assert!(Requirement::make_and(vec![]).evaluate(&world, &state));
        assert!(!Requirement::make_or(vec![]).evaluate(&world, &state));
    }

    #[test]
    fn smart_constructors_flatten_and_short_circuit() {
        let item = Requirement::Item {
            item_id: 0,
            count: 1,
        };
        assert_eq!(
            Requirement::make_and(vec![item.clone(), Requirement::Never]),
            Requirement::Never
        );
        assert_eq!(
            Requirement::make_or(vec![item.clone(), Requirement::Free]),
            Requirement::Free
        );
        assert_eq!(
            Requirement::make_and(vec![Requirement::Free, item.clone()]),
            item
        );
        let nested = Requirement::make_and(vec![
            Requirement::And(vec![item.clone(), item.clone()]),
            item.clone(),
        ]);
        assert_eq!(
            nested,
            Requirement::And(vec![item.clone(), item.clone(), item])
        );
    }

    #[test]
    fn treasure_hunt_counts_distinct_treasures_against_threshold() {
        let game_data = GameData::new();
        let options = Options {
            golden_treasure_count: 2,
            ..Options::default()
        };
        let world = World::new(0, options, &game_data);
        let mut state = CollectedState::new(1, &game_data);

        let treasures = game_data.filter_item_ids(wl4rando_game::ItemType::Treasure, None);
        let req = Requirement::TreasureHunt {
            treasures: treasures.clone(),
        };
        assert!(!req.evaluate(&world, &state));
        state.collect(0, treasures[0]);
        // A duplicate copy of the same treasure is not a second treasure:
        state.collect(0, treasures[0]);
        assert!(!req.evaluate(&world, &state));
        state.collect(0, treasures[1]);
        assert!(req.evaluate(&world, &state));

        // Raising the threshold changes only the comparison:
        let mut strict = World::new(0, Options::default(), &game_data);
        strict.options.golden_treasure_count = 3;
        assert!(!req.evaluate(&strict, &state));
    }

    #[test]
    fn options_set_rejects_unknown_names() {
        let mut options = Options::default();
        options.set("difficulty", "SHard").unwrap();
        assert_eq!(options.difficulty, Difficulty::SHard);
        options.set("logic", "Advanced").unwrap();
        assert_eq!(options.logic, Logic::Advanced);
        options.set("golden_treasure_count", "6").unwrap();
        assert_eq!(options.golden_treasure_count, 6);
        assert!(options.set("lives", "3").is_err());
        assert!(options.set("difficulty", "Impossible").is_err());
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = Options::from_json(
            r#"{"difficulty": "Hard", "logic": "Advanced", "golden_treasure_count": 4}"#,
        )
        .unwrap();
        assert_eq!(options.difficulty, Difficulty::Hard);
        assert_eq!(options.logic, Logic::Advanced);
        assert_eq!(options.goal, Goal::GoldenDiva);
        assert_eq!(options.golden_treasure_count, 4);
        assert_eq!(options.required_jewels, 1);
    }

    #[test]
    fn difficulties_are_ordered() {
        assert!(Difficulty::Normal < Difficulty::Hard);
        assert!(Difficulty::Hard < Difficulty::SHard);
    }
}
