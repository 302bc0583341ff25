use tracing::info;

use crate::budget::normalize_budget;
use crate::city::resolve_city;
use crate::config::{PlannerConfig, BASE_ATTRACTION_COUNT, MAX_EXTRA_ATTRACTION_SLOTS};
use crate::costs::estimate_costs;
use crate::lodging::allocate_hotels;
use crate::models::{Attraction, DayPlan, Plan, PlannedAttraction, TripInput};
use crate::sampler::{sample_without_replacement, RngSampler, Sampler};
use crate::transport::{build_transport_options, DISTANCE_RANGE_KM};

#[derive(Debug, Clone, Default)]
pub struct ItineraryGenerator {
    config: PlannerConfig,
}

/// What happened while building a plan, for callers that record metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub known_city: bool,
    pub extended_trip: bool,
}

impl ItineraryGenerator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn generate<S: Sampler + ?Sized>(&self, input: &TripInput, sampler: &mut S) -> Plan {
        self.generate_with_outcome(input, sampler).0
    }

    pub fn generate_with_outcome<S: Sampler + ?Sized>(
        &self,
        input: &TripInput,
        sampler: &mut S,
    ) -> (Plan, GenerationOutcome) {
        let city = resolve_city(&input.location);
        let budget = normalize_budget(&input.budget, self.config.usd_rate);
        let party_size = input.people.party_size();

        // configs built in code skip the env range check
        let extra_slots = self
            .config
            .extra_attraction_slots
            .min(MAX_EXTRA_ATTRACTION_SLOTS);
        let sample_size =
            BASE_ATTRACTION_COUNT + (sampler.unit() * extra_slots as f64).floor() as usize;
        let attractions = sample_without_replacement(&city.attractions, sample_size, sampler)
            .into_iter()
            .map(|attraction| with_transport(attraction, sampler))
            .collect::<Vec<_>>();

        let hotels = allocate_hotels(budget.base_amount, party_size);

        let extended_trip = budget.base_amount > self.config.extended_trip_threshold
            || attractions.len() > BASE_ATTRACTION_COUNT;
        let days = assemble_days(&input.location, &attractions, extended_trip);

        let costs = estimate_costs(&attractions, &hotels, &days);

        info!(
            city = %input.location,
            currency = budget.currency.code(),
            attractions = attractions.len(),
            days = days.len(),
            total = costs.total,
            "plan generated"
        );

        let plan = Plan {
            city: input.location.clone(),
            currency: budget.currency,
            attractions,
            hotels,
            days,
            total_estimated: costs.total,
        };

        (
            plan,
            GenerationOutcome {
                known_city: city.known,
                extended_trip,
            },
        )
    }
}

/// Generates with default settings and a fresh entropy-seeded sampler.
pub fn generate_plan(input: &TripInput) -> Plan {
    ItineraryGenerator::default().generate(input, &mut RngSampler::from_entropy())
}

fn with_transport<S: Sampler + ?Sized>(
    attraction: Attraction,
    sampler: &mut S,
) -> PlannedAttraction {
    let (low, high) = DISTANCE_RANGE_KM;
    let distance_km = sampler.range(low, high);
    PlannedAttraction {
        attraction,
        transport: build_transport_options(distance_km),
    }
}

fn assemble_days(
    location: &str,
    attractions: &[PlannedAttraction],
    extended: bool,
) -> Vec<DayPlan> {
    let first = attractions.first().map(|a| a.name()).unwrap_or(location);
    let second = attractions.get(1).map(|a| a.name()).unwrap_or(first);
    let first_word = first.split(' ').next().unwrap_or(first);

    let mut days = vec![
        DayPlan {
            activities: vec![
                format!("Arrive in {} and check-in", location),
                format!("Visit {}", first),
                format!("Sunset at {} area", first_word),
            ],
        },
        DayPlan {
            activities: vec![
                format!("Morning at {}", second),
                "Local food crawl near market".to_string(),
                "Evening stroll along popular promenade".to_string(),
            ],
        },
    ];

    if extended {
        let third = attractions.get(2).map(|a| a.name()).unwrap_or(first);
        days.push(DayPlan {
            activities: vec![
                format!("Day trip to {}", third),
                "Cafe hopping and shopping".to_string(),
                "Relaxed dinner and pack-up".to_string(),
            ],
        });
    }

    days
}
