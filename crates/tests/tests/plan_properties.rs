use std::collections::HashSet;

use itinera_core::{
    plan_costs, Currency, InputValue, ItineraryGenerator, Plan, PlannerConfig, RngSampler,
    TransportMode, TripInput,
};
use proptest::prelude::*;

fn location() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Varkala".to_string()),
        Just(" kochi ".to_string()),
        Just("OOTY".to_string()),
        "[A-Za-z ]{0,16}",
    ]
}

fn budget() -> impl Strategy<Value = InputValue> {
    prop_oneof![
        (0.0..200_000.0_f64).prop_map(InputValue::Number),
        (0_u32..200_000).prop_map(|amount| InputValue::Text(format!("₹{amount}"))),
        (0_u32..5_000).prop_map(|amount| InputValue::Text(format!("${amount}"))),
        "[ -~]{0,12}".prop_map(InputValue::Text),
    ]
}

fn people() -> impl Strategy<Value = InputValue> {
    prop_oneof![
        (-5.0..40.0_f64).prop_map(InputValue::Number),
        (0_u32..40).prop_map(|count| InputValue::Text(count.to_string())),
        "[a-z]{0,6}".prop_map(InputValue::Text),
    ]
}

fn assert_plan_shape(plan: &Plan, input: &TripInput) {
    assert_eq!(plan.city, input.location);

    let expected_currency = if input.budget.as_text().contains('$') {
        Currency::Usd
    } else {
        Currency::Inr
    };
    assert_eq!(plan.currency, expected_currency);

    let names = plan
        .attractions
        .iter()
        .map(|planned| planned.name())
        .collect::<HashSet<_>>();
    assert_eq!(names.len(), plan.attractions.len());
    assert!((3..=4).contains(&plan.attractions.len()));

    for planned in &plan.attractions {
        let modes = planned
            .transport
            .iter()
            .map(|option| option.mode)
            .collect::<Vec<_>>();
        assert_eq!(modes, TransportMode::ALL.to_vec());
        assert!(planned.transport.iter().all(|option| option.fare > 0));
    }

    let party = input.people.party_size().max(2);
    assert_eq!(plan.hotels.len(), 3);
    for hotel in &plan.hotels {
        assert!(hotel.price >= 600);
        assert_eq!(hotel.capacity, party);
        if let InputValue::Number(people) = input.people {
            if people.is_finite() {
                assert!(f64::from(hotel.capacity) >= people);
            }
        }
    }

    assert!(plan.days.len() == 2 || plan.days.len() == 3);
    assert!(plan.days.iter().all(|day| !day.activities.is_empty()));
    assert_eq!(plan.total_estimated, plan_costs(plan).total);
}

proptest! {
    #[test]
    fn every_plan_keeps_its_invariants(
        location in location(),
        budget in budget(),
        people in people(),
        seed in any::<u64>(),
    ) {
        let input = TripInput { location, budget, people };
        let plan = ItineraryGenerator::default().generate(&input, &mut RngSampler::seeded(seed));
        assert_plan_shape(&plan, &input);
    }

    #[test]
    fn wider_sampling_still_keeps_invariants(
        location in location(),
        budget in budget(),
        seed in any::<u64>(),
    ) {
        let config = PlannerConfig {
            extra_attraction_slots: 2,
            ..PlannerConfig::default()
        };
        let input = TripInput::new(location, budget, 2_u32);
        let plan = ItineraryGenerator::new(config).generate(&input, &mut RngSampler::seeded(seed));
        assert_plan_shape(&plan, &input);

        let extended = plan.attractions.len() > 3;
        if extended {
            prop_assert_eq!(plan.days.len(), 3);
        }
    }

    #[test]
    fn modest_budgets_stay_two_days(amount in 0_u32..=25_000, seed in any::<u64>()) {
        let input = TripInput::new("Kochi", InputValue::Number(f64::from(amount)), 2_u32);
        let plan = ItineraryGenerator::default().generate(&input, &mut RngSampler::seeded(seed));
        prop_assert_eq!(plan.days.len(), 2);
    }

    #[test]
    fn large_budgets_add_a_day(amount in 25_001_u32..1_000_000, seed in any::<u64>()) {
        let input = TripInput::new("Kochi", InputValue::Number(f64::from(amount)), 2_u32);
        let plan = ItineraryGenerator::default().generate(&input, &mut RngSampler::seeded(seed));
        prop_assert_eq!(plan.days.len(), 3);
    }

    #[test]
    fn city_lookup_ignores_case_and_padding(seed in any::<u64>(), pad in " {0,3}") {
        let padded = format!("{pad}KoChI{pad}");
        let left = ItineraryGenerator::default()
            .generate(&TripInput::new(padded, "₹9000", 2_u32), &mut RngSampler::seeded(seed));
        let right = ItineraryGenerator::default()
            .generate(&TripInput::new("kochi", "₹9000", 2_u32), &mut RngSampler::seeded(seed));

        let names = |plan: &Plan| {
            plan.attractions
                .iter()
                .map(|planned| planned.name().to_string())
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(names(&left), names(&right));
    }
}

#[test]
fn kochi_rupee_example() {
    let input = TripInput::new("Kochi", "₹10000", 2_u32);
    let plan = ItineraryGenerator::default().generate(&input, &mut RngSampler::seeded(1));

    assert_eq!(plan.currency, Currency::Inr);
    assert_eq!(plan.days.len(), 2);
    assert!(plan.hotels.iter().all(|hotel| hotel.capacity >= 2));
    assert!(plan.total_estimated > 0);
    assert_plan_shape(&plan, &input);
}

#[test]
fn unknown_destination_example() {
    let input = TripInput::new("Nowhereville", "$500", 4_u32);
    let plan = ItineraryGenerator::default().generate(&input, &mut RngSampler::seeded(2));

    assert_eq!(plan.currency, Currency::Usd);
    assert!(plan
        .attractions
        .iter()
        .all(|planned| planned.name().contains("Nowhereville")));
    assert!(plan.hotels.iter().all(|hotel| hotel.capacity >= 4));
    assert_plan_shape(&plan, &input);
}

#[test]
fn fractional_parties_round_up() {
    let generator = ItineraryGenerator::default();

    for (people, capacity) in [(2.5, 3), (3.5, 4)] {
        let input = TripInput::new("Kochi", "₹20000", people);
        let plan = generator.generate(&input, &mut RngSampler::seeded(1));

        assert!(plan.hotels.iter().all(|hotel| hotel.capacity == capacity));
        // two rooms either way, so each nightly rate is half the single-room figure
        let prices = plan.hotels.iter().map(|hotel| hotel.price).collect::<Vec<_>>();
        assert_eq!(prices, vec![1750, 2125, 2500]);
        assert_plan_shape(&plan, &input);
    }
}
