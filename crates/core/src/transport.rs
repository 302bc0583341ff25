use crate::models::{TransportMode, TransportOption};

/// Average distance drawn per attraction, in kilometres.
pub const DISTANCE_RANGE_KM: (f64, f64) = (4.0, 10.0);

struct FareRule {
    base_fare: f64,
    per_km: f64,
    min_offset: i64,
    max_offset: i64,
}

fn rule_for(mode: TransportMode) -> FareRule {
    match mode {
        TransportMode::Bus => FareRule {
            base_fare: 15.0,
            per_km: 2.0,
            min_offset: 10,
            max_offset: 25,
        },
        TransportMode::Train => FareRule {
            base_fare: 30.0,
            per_km: 3.0,
            min_offset: 0,
            max_offset: 15,
        },
        TransportMode::Taxi => FareRule {
            base_fare: 120.0,
            per_km: 20.0,
            min_offset: -5,
            max_offset: 10,
        },
        TransportMode::Auto => FareRule {
            base_fare: 60.0,
            per_km: 10.0,
            min_offset: 0,
            max_offset: 10,
        },
    }
}

pub fn build_transport_options(distance_km: f64) -> Vec<TransportOption> {
    let distance_km = if distance_km.is_finite() {
        distance_km.max(0.0)
    } else {
        0.0
    };
    let time_base = ((distance_km * 6.0).round() as i64).max(10);

    TransportMode::ALL
        .iter()
        .map(|&mode| {
            let rule = rule_for(mode);
            TransportOption {
                mode,
                fare: (rule.base_fare + distance_km * rule.per_km).round() as u64,
                time_range: format!(
                    "{}-{}m",
                    time_base + rule.min_offset,
                    time_base + rule.max_offset
                ),
            }
        })
        .collect()
}
