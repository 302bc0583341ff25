use tracing::debug;

use crate::models::{Attraction, BestTime};

struct AttractionSeed {
    name: &'static str,
    description: &'static str,
    best_time: BestTime,
    entry_cost: u64,
}

struct CitySeed {
    key: &'static str,
    display_name: &'static str,
    attractions: &'static [AttractionSeed],
}

const fn seed(
    name: &'static str,
    description: &'static str,
    best_time: BestTime,
    entry_cost: u64,
) -> AttractionSeed {
    AttractionSeed {
        name,
        description,
        best_time,
        entry_cost,
    }
}

static CITY_TABLE: &[CitySeed] = &[
    CitySeed {
        key: "varkala",
        display_name: "Varkala",
        attractions: &[
            seed(
                "Varkala Cliff & Beach",
                "Iconic cliffside beach with cafes and sunsets",
                BestTime::Sunset,
                0,
            ),
            seed(
                "Janardanaswamy Temple",
                "Ancient temple near the beach",
                BestTime::Morning,
                50,
            ),
            seed(
                "Kappil Lake",
                "Backwaters meeting the sea, serene views",
                BestTime::Evening,
                0,
            ),
            seed(
                "Anjengo Fort",
                "Historic fort with lighthouse views",
                BestTime::Evening,
                25,
            ),
        ],
    },
    CitySeed {
        key: "kochi",
        display_name: "Kochi",
        attractions: &[
            seed(
                "Fort Kochi",
                "Chinese fishing nets, colonial lanes, art cafes",
                BestTime::Evening,
                0,
            ),
            seed(
                "Mattancherry Palace",
                "Kerala murals and royal artefacts",
                BestTime::Morning,
                60,
            ),
            seed(
                "Jew Town & Synagogue",
                "Antique shops and heritage walk",
                BestTime::Morning,
                70,
            ),
            seed("Marine Drive", "Harbour-side promenade", BestTime::Sunset, 0),
        ],
    },
    CitySeed {
        key: "ooty",
        display_name: "Ooty",
        attractions: &[
            seed(
                "Ooty Lake",
                "Boating and lakeside strolls",
                BestTime::Evening,
                30,
            ),
            seed(
                "Botanical Gardens",
                "Vast gardens with rare flora",
                BestTime::Morning,
                50,
            ),
            seed(
                "Doddabetta Peak",
                "Panoramic views of the Nilgiris",
                BestTime::Morning,
                20,
            ),
            seed(
                "Tea Museum",
                "Learn tea making and tasting",
                BestTime::Afternoon,
                50,
            ),
        ],
    },
];

#[derive(Debug, Clone)]
pub struct ResolvedCity {
    pub attractions: Vec<Attraction>,
    /// False when the attractions were synthesized for an unknown destination.
    pub known: bool,
}

pub fn normalize_city_key(location: &str) -> String {
    location.trim().to_lowercase()
}

pub fn known_cities() -> Vec<&'static str> {
    CITY_TABLE.iter().map(|city| city.display_name).collect()
}

pub fn resolve_city(location: &str) -> ResolvedCity {
    let key = normalize_city_key(location);

    match CITY_TABLE.iter().find(|city| city.key == key) {
        Some(city) => {
            debug!(city = city.key, "resolved curated destination");
            ResolvedCity {
                attractions: city
                    .attractions
                    .iter()
                    .map(|seed| Attraction {
                        name: seed.name.to_string(),
                        description: seed.description.to_string(),
                        best_time: seed.best_time,
                        entry_cost: seed.entry_cost,
                    })
                    .collect(),
                known: true,
            }
        }
        None => {
            debug!(location = %location, "unknown destination, synthesizing attractions");
            ResolvedCity {
                attractions: fallback_attractions(location),
                known: false,
            }
        }
    }
}

fn fallback_attractions(location: &str) -> Vec<Attraction> {
    let generic = |suffix: &str, description: &str, best_time, entry_cost| Attraction {
        name: format!("{} {}", location, suffix),
        description: description.to_string(),
        best_time,
        entry_cost,
    };

    vec![
        generic(
            "Central Park",
            "City green space and walking paths",
            BestTime::Evening,
            0,
        ),
        generic("Museum", "Local history and culture", BestTime::Morning, 100),
        generic("Market", "Street food and souvenirs", BestTime::Afternoon, 0),
        generic("Viewpoint", "City skyline panorama", BestTime::Sunset, 20),
    ]
}
