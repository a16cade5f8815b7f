//! Static game catalog for the Wario Land 4 randomizer: item definitions,
//! level/location names, and event-location names, with name <-> id indexing.

use anyhow::{Context, Result};
use hashbrown::{HashMap, HashSet};
use log::info;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use strum_macros::{EnumString, VariantNames};

pub type ItemId = usize; // Index into GameData.item_isv.keys
pub type ItemCount = i32; // Data type used to represent quantities of items
pub type PlayerId = usize; // Player slot within a multiworld session

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumString, VariantNames, Serialize, Deserialize,
)]
pub enum Passage {
    Entry,
    Emerald,
    Ruby,
    Topaz,
    Sapphire,
    Golden,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumString, VariantNames, Serialize, Deserialize,
)]
pub enum ItemType {
    Ability,
    Jewel,
    Cd,
    Treasure,
    Filler,
}

pub struct ItemData {
    pub name: &'static str,
    pub item_type: ItemType,
    pub passage: Option<Passage>,
}

const fn ability(name: &'static str) -> ItemData {
    ItemData {
        name,
        item_type: ItemType::Ability,
        passage: None,
    }
}

const fn jewel(name: &'static str, passage: Passage) -> ItemData {
    ItemData {
        name,
        item_type: ItemType::Jewel,
        passage: Some(passage),
    }
}

const fn cd(name: &'static str, passage: Passage) -> ItemData {
    ItemData {
        name,
        item_type: ItemType::Cd,
        passage: Some(passage),
    }
}

const fn treasure(name: &'static str) -> ItemData {
    ItemData {
        name,
        item_type: ItemType::Treasure,
        passage: None,
    }
}

const fn filler(name: &'static str) -> ItemData {
    ItemData {
        name,
        item_type: ItemType::Filler,
        passage: None,
    }
}

// Progressive items occupy a single id; collecting another copy raises the tier.
pub const ITEM_DATA: &[ItemData] = &[
    ability("Progressive Ground Pound"),
    ability("Progressive Grab"),
    ability("Swim"),
    ability("Head Smash"),
    ability("Dash Attack"),
    ability("Enemy Jump"),
    ability("Stomp Jump"),
    jewel("Top Left Entry Jewel Piece", Passage::Entry),
    jewel("Top Right Entry Jewel Piece", Passage::Entry),
    jewel("Bottom Left Entry Jewel Piece", Passage::Entry),
    jewel("Bottom Right Entry Jewel Piece", Passage::Entry),
    jewel("Top Left Emerald Jewel Piece", Passage::Emerald),
    jewel("Top Right Emerald Jewel Piece", Passage::Emerald),
    jewel("Bottom Left Emerald Jewel Piece", Passage::Emerald),
    jewel("Bottom Right Emerald Jewel Piece", Passage::Emerald),
    jewel("Top Left Ruby Jewel Piece", Passage::Ruby),
    jewel("Top Right Ruby Jewel Piece", Passage::Ruby),
    jewel("Bottom Left Ruby Jewel Piece", Passage::Ruby),
    jewel("Bottom Right Ruby Jewel Piece", Passage::Ruby),
    jewel("Top Left Topaz Jewel Piece", Passage::Topaz),
    jewel("Top Right Topaz Jewel Piece", Passage::Topaz),
    jewel("Bottom Left Topaz Jewel Piece", Passage::Topaz),
    jewel("Bottom Right Topaz Jewel Piece", Passage::Topaz),
    jewel("Top Left Sapphire Jewel Piece", Passage::Sapphire),
    jewel("Top Right Sapphire Jewel Piece", Passage::Sapphire),
    jewel("Bottom Left Sapphire Jewel Piece", Passage::Sapphire),
    jewel("Bottom Right Sapphire Jewel Piece", Passage::Sapphire),
    jewel("Top Left Golden Jewel Piece", Passage::Golden),
    jewel("Top Right Golden Jewel Piece", Passage::Golden),
    jewel("Bottom Left Golden Jewel Piece", Passage::Golden),
    jewel("Bottom Right Golden Jewel Piece", Passage::Golden),
    cd("Palm Tree Paradise CD", Passage::Emerald),
    cd("Wildflower Fields CD", Passage::Emerald),
    cd("Mystic Lake CD", Passage::Emerald),
    cd("Monsoon Jungle CD", Passage::Emerald),
    cd("The Curious Factory CD", Passage::Ruby),
    cd("The Toxic Landfill CD", Passage::Ruby),
    cd("40 Below Fridge CD", Passage::Ruby),
    cd("Pinball Zone CD", Passage::Ruby),
    cd("Toy Block Tower CD", Passage::Topaz),
    cd("The Big Board CD", Passage::Topaz),
    cd("Doodle Woods CD", Passage::Topaz),
    cd("Domino Row CD", Passage::Topaz),
    cd("Crescent Moon Village CD", Passage::Sapphire),
    cd("Arabian Night CD", Passage::Sapphire),
    cd("Fiery Cavern CD", Passage::Sapphire),
    cd("Hotel Horror CD", Passage::Sapphire),
    treasure("Golden Crown"),
    treasure("Golden Chalice"),
    treasure("Golden Ring"),
    treasure("Golden Scepter"),
    treasure("Golden Lamp"),
    treasure("Golden Goblet"),
    treasure("Golden Mirror"),
    treasure("Golden Harp"),
    treasure("Golden Crystal Ball"),
    treasure("Golden Vase"),
    treasure("Golden Medallion"),
    treasure("Golden Chest"),
    filler("Full Health Item"),
    filler("Heart"),
    filler("Minigame Coin"),
    filler("Diamond"),
];

struct LevelData {
    name: &'static str,
    passage: Passage,
    boxes: &'static [&'static str],
}

// Item boxes per level. Box names are suffixed onto the level name as
// "<level> - <box>" to form location names.
const LEVEL_DATA: &[LevelData] = &[
    LevelData {
        name: "Hall of Hieroglyphs",
        passage: Passage::Entry,
        boxes: &[
            "First Jewel Box",
            "Second Jewel Box",
            "Third Jewel Box",
            "Fourth Jewel Box",
            "Full Health Item Box",
        ],
    },
    LevelData {
        name: "Palm Tree Paradise",
        passage: Passage::Emerald,
        boxes: &[
            "First Box",
            "Ledge Box",
            "Dead End Box",
            "Hidden Box",
            "CD Box",
            "Full Health Item Box",
        ],
    },
    LevelData {
        name: "Wildflower Fields",
        passage: Passage::Emerald,
        boxes: &[
            "8-Shaped Cave Box",
            "Sunflower Jewel Box",
            "Slope Room Box",
            "Current Cave Box",
            "CD Box",
        ],
    },
    LevelData {
        name: "Mystic Lake",
        passage: Passage::Emerald,
        boxes: &[
            "Large Cave Box",
            "Small Cave Box",
            "Rock Cave Box",
            "Spring Cave Box",
            "CD Box",
            "Full Health Item Box",
        ],
    },
    LevelData {
        name: "Monsoon Jungle",
        passage: Passage::Emerald,
        boxes: &[
            "Fat Plummet Box",
            "Buried Cave Box",
            "Puffy Hallway Box",
            "Descent Box",
            "CD Box",
            "Full Health Item Box",
        ],
    },
    LevelData {
        name: "The Curious Factory",
        passage: Passage::Ruby,
        boxes: &[
            "First Drop Box",
            "Conveyor Room Box",
            "Underground Box",
            "Gear Elevator Box",
            "CD Box",
        ],
    },
    LevelData {
        name: "The Toxic Landfill",
        passage: Passage::Ruby,
        boxes: &[
            "Box Above Portal",
            "Ledge Box",
            "Current Circle Box",
            "Transformation Puzzle Box",
            "CD Box",
            "Full Health Item Box",
        ],
    },
    LevelData {
        name: "40 Below Fridge",
        passage: Passage::Ruby,
        boxes: &[
            "Looping Room Box",
            "Maze Room Box",
            "Snowman Puzzle Box",
            "CD Box",
        ],
    },
    LevelData {
        name: "Pinball Zone",
        passage: Passage::Ruby,
        boxes: &[
            "Rolling Room Box",
            "Fruit Room Box",
            "Jungle Room Box",
            "Snow Room Box",
            "CD Box",
            "Full Health Item Box",
            "Pink Room Full Health Item Box",
        ],
    },
    LevelData {
        name: "Toy Block Tower",
        passage: Passage::Topaz,
        boxes: &[
            "Toy Car Overhang Box",
            "Digging Room Box",
            "Hidden Falling Block Door Box",
            "Escape Ledge Box",
            "CD Box",
            "Full Health Item Box",
        ],
    },
    LevelData {
        name: "The Big Board",
        passage: Passage::Topaz,
        boxes: &[
            "Hard Fire Room Box",
            "Hard Enemy Room Box",
            "Fat Room Box",
            "Flat Room Box",
            "CD Box",
            "Full Health Item Box",
        ],
    },
    LevelData {
        name: "Doodle Woods",
        passage: Passage::Topaz,
        boxes: &[
            "Gray Square Box",
            "Pink Circle Box",
            "Purple Square Box",
            "Blue Circle Box",
            "Orange Escape Box",
            "CD Box",
        ],
    },
    LevelData {
        name: "Domino Row",
        passage: Passage::Topaz,
        boxes: &[
            "Racing Box",
            "Rolling Box",
            "Swimming Detour Box",
            "Swimming Room Escape Box",
            "Keyzer Room Box",
            "CD Box",
        ],
    },
    LevelData {
        name: "Crescent Moon Village",
        passage: Passage::Sapphire,
        boxes: &[
            "Agile Bat Hidden Box",
            "Metal Platform Box",
            "Rolling Box",
            "Sewer Box",
            "CD Box",
        ],
    },
    LevelData {
        name: "Arabian Night",
        passage: Passage::Sapphire,
        boxes: &[
            "Onomi Box",
            "Sewer Box",
            "Flying Carpet Dash Attack Box",
            "Kool-Aid Box",
            "CD Box",
        ],
    },
    LevelData {
        name: "Fiery Cavern",
        passage: Passage::Sapphire,
        boxes: &[
            "Lava Dodging Box",
            "Long Lava Geyser Box",
            "Ice Beyond Door Box",
            "Snowman Box",
            "CD Box",
        ],
    },
    LevelData {
        name: "Hotel Horror",
        passage: Passage::Sapphire,
        boxes: &[
            "1F Hallway Box",
            "2F Hallway Box",
            "3F Hallway Box",
            "4F Hallway Box",
            "CD Box",
        ],
    },
    LevelData {
        name: "Golden Passage",
        passage: Passage::Golden,
        boxes: &[
            "Current Puzzle Box",
            "River Box",
            "Bat Room Box",
            "Mad Scienstein Box",
        ],
    },
];

const BOSS_DATA: &[(&str, Passage)] = &[
    ("Spoiled Rotten", Passage::Entry),
    ("Cractus", Passage::Emerald),
    ("Cuckoo Condor", Passage::Ruby),
    ("Aerodent", Passage::Topaz),
    ("Catbat", Passage::Sapphire),
    ("Golden Diva", Passage::Golden),
];

// Time-attack sub-locations credited for beating a boss with time to spare:
const BOSS_TIME_ATTACKS: &[&str] = &["0:55", "0:35", "0:15"];

#[derive(Default, Clone)]
pub struct IndexedVec<T: Hash + Eq> {
    pub keys: Vec<T>,
    pub index_by_key: HashMap<T, usize>,
}

impl<T: Hash + Eq> IndexedVec<T> {
    pub fn add<U: ToOwned<Owned = T> + ?Sized>(&mut self, name: &U) -> usize {
        if !self.index_by_key.contains_key(&name.to_owned()) {
            let idx = self.keys.len();
            self.index_by_key.insert(name.to_owned(), self.keys.len());
            self.keys.push(name.to_owned());
            idx
        } else {
            self.index_by_key[&name.to_owned()]
        }
    }
}

#[derive(Default, Clone)]
pub struct GameData {
    pub item_isv: IndexedVec<String>,
    pub location_names: HashSet<String>,
    pub event_names: HashSet<String>,
    pub level_names: Vec<&'static str>,
}

impl GameData {
    pub fn new() -> Self {
        let mut game_data = GameData::default();
        for item in ITEM_DATA {
            game_data.item_isv.add(item.name);
        }
        for level in LEVEL_DATA {
            game_data.level_names.push(level.name);
            for box_name in level.boxes {
                game_data
                    .location_names
                    .insert(format!("{} - {}", level.name, box_name));
            }
            game_data
                .event_names
                .insert(format!("{} - Keyzer", level.name));
            if level.passage != Passage::Entry {
                game_data
                    .event_names
                    .insert(format!("{} - Frog Switch", level.name));
            }
        }
        for &(boss_name, _) in BOSS_DATA {
            game_data.location_names.insert(boss_name.to_string());
            for time in BOSS_TIME_ATTACKS {
                game_data
                    .location_names
                    .insert(format!("{boss_name} - {time}"));
            }
        }
        // The emergency exit is an event-only name: it has no physical location.
        game_data
            .event_names
            .insert("Sound Room - Emergency Exit".to_string());
        info!(
            "Loaded game catalog: {} items, {} locations, {} event locations",
            game_data.item_isv.keys.len(),
            game_data.location_names.len(),
            game_data.event_names.len()
        );
        game_data
    }

    pub fn item_id(&self, name: &str) -> Result<ItemId> {
        self.item_isv
            .index_by_key
            .get(name)
            .copied()
            .with_context(|| format!("Unknown item '{name}'"))
    }

    pub fn boss_passage(&self, boss_name: &str) -> Result<Passage> {
        BOSS_DATA
            .iter()
            .find(|&&(name, _)| name == boss_name)
            .map(|&(_, passage)| passage)
            .with_context(|| format!("Unknown boss '{boss_name}'"))
    }

    pub fn filter_item_ids(&self, item_type: ItemType, passage: Option<Passage>) -> Vec<ItemId> {
        ITEM_DATA
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                item.item_type == item_type
                    && (passage.is_none() || item.passage == passage)
            })
            .map(|(item_id, _)| item_id)
            .collect()
    }

    pub fn filter_item_names(
        &self,
        item_type: ItemType,
        passage: Option<Passage>,
    ) -> Vec<&'static str> {
        self.filter_item_ids(item_type, passage)
            .into_iter()
            .map(|item_id| ITEM_DATA[item_id].name)
            .collect()
    }
}
