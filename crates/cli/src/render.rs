use std::fmt::Write as _;

use itinera_core::{format_amount, plan_costs, Plan};

/// Plain-text rendering of a plan, section by section.
pub fn render_plan(plan: &Plan) -> String {
    let mut out = String::new();
    let money = |amount: u64| format_amount(plan.currency, amount);

    let _ = writeln!(
        out,
        "Trip plan for {} ({})",
        plan.city,
        plan.currency.code().to_uppercase()
    );

    let _ = writeln!(out, "\nTop Attractions");
    for planned in &plan.attractions {
        let attraction = &planned.attraction;
        let _ = writeln!(
            out,
            "  - {}: {} (best time: {}, entry ~ {})",
            attraction.name,
            attraction.description,
            attraction.best_time.label(),
            money(attraction.entry_cost)
        );
    }

    let _ = writeln!(out, "\nGetting Around");
    for planned in &plan.attractions {
        let _ = writeln!(out, "  {}", planned.name());
        for option in &planned.transport {
            let _ = writeln!(
                out,
                "    {:<6} {:>8}  {}",
                option.mode.label(),
                money(option.fare),
                option.time_range
            );
        }
    }

    let _ = writeln!(out, "\nStays within Budget");
    for hotel in &plan.hotels {
        let _ = writeln!(
            out,
            "  - {} ({}, {:.1}★, {}): {}/night, fits {} people",
            hotel.name,
            hotel.kind.label(),
            hotel.rating,
            hotel.location,
            money(hotel.price),
            hotel.capacity
        );
    }

    let _ = writeln!(out, "\nTrip Idea ({}-Day Plan)", plan.days.len());
    for (index, day) in plan.days.iter().enumerate() {
        let _ = writeln!(out, "  Day {}", index + 1);
        for activity in &day.activities {
            let _ = writeln!(out, "    - {}", activity);
        }
    }

    let costs = plan_costs(plan);
    let _ = writeln!(
        out,
        "\nEstimated Total (stay + local transport + sightseeing): {}",
        money(plan.total_estimated)
    );
    let _ = writeln!(
        out,
        "  stay {} | local transport {} | sightseeing {}",
        money(costs.stay),
        money(costs.local_transport),
        money(costs.sightseeing)
    );

    out
}
