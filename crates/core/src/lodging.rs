use crate::models::{Hotel, LodgingType};

pub const STAY_SHARE: f64 = 0.5;
pub const MIN_STAY_BUDGET: f64 = 800.0;
pub const PLANNED_NIGHTS: f64 = 2.0;
pub const MIN_NIGHTLY_PRICE: u64 = 600;

struct HotelSeed {
    name: &'static str,
    kind: LodgingType,
    rating: f32,
    location: &'static str,
}

static REFERENCE_HOTELS: &[HotelSeed] = &[
    HotelSeed {
        name: "Seaview Inn",
        kind: LodgingType::Hotel,
        rating: 4.2,
        location: "Central",
    },
    HotelSeed {
        name: "Palm Breeze Stays",
        kind: LodgingType::Homestay,
        rating: 4.5,
        location: "Beachside",
    },
    HotelSeed {
        name: "City Comfort Rooms",
        kind: LodgingType::Hotel,
        rating: 4.0,
        location: "Downtown",
    },
];

/// Per-night target when half of the base budget goes to a two-night stay.
pub fn per_night_target(base_budget: f64) -> f64 {
    let stay_budget = (base_budget * STAY_SHARE).round().max(MIN_STAY_BUDGET);
    (stay_budget / PLANNED_NIGHTS).round()
}

pub fn allocate_hotels(base_budget: f64, party_size: u32) -> Vec<Hotel> {
    let per_night = per_night_target(base_budget);
    let rooms = f64::from(party_size.max(1).div_ceil(2));
    let capacity = party_size.max(2);

    REFERENCE_HOTELS
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let scale = 0.7 + index as f64 * 0.15;
            let price = ((per_night * scale / rooms).round() as u64).max(MIN_NIGHTLY_PRICE);
            Hotel {
                name: seed.name.to_string(),
                kind: seed.kind,
                rating: seed.rating,
                location: seed.location.to_string(),
                capacity,
                price,
            }
        })
        .collect()
}
