use crate::models::{CostBreakdown, DayPlan, Hotel, PlannedAttraction, Plan};

/// Nights of stay, one stay cost per night at the first listed hotel, a round
/// trip on the first transport option per attraction, plus entry fees.
pub fn estimate_costs(
    attractions: &[PlannedAttraction],
    hotels: &[Hotel],
    days: &[DayPlan],
) -> CostBreakdown {
    let nights = days.len().saturating_sub(1) as u64;
    let stay = hotels
        .first()
        .map(|hotel| hotel.price.saturating_mul(nights))
        .unwrap_or(0);

    let local_transport = attractions
        .iter()
        .filter_map(|attraction| attraction.transport.first())
        .fold(0_u64, |sum, option| {
            sum.saturating_add(option.fare.saturating_mul(2))
        });

    let sightseeing = attractions.iter().fold(0_u64, |sum, attraction| {
        sum.saturating_add(attraction.attraction.entry_cost)
    });

    CostBreakdown {
        stay,
        local_transport,
        sightseeing,
        total: stay
            .saturating_add(local_transport)
            .saturating_add(sightseeing),
    }
}

pub fn plan_costs(plan: &Plan) -> CostBreakdown {
    estimate_costs(&plan.attractions, &plan.hotels, &plan.days)
}
