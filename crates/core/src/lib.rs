pub mod budget;
pub mod city;
pub mod config;
pub mod costs;
pub mod intake;
pub mod lodging;
pub mod models;
pub mod planner;
pub mod sampler;
pub mod transport;

pub use budget::{detect_currency, normalize_budget, parse_amount, NormalizedBudget};
pub use city::{known_cities, resolve_city, ResolvedCity};
pub use config::{ConfigError, PlannerConfig};
pub use costs::{estimate_costs, plan_costs};
pub use intake::{Intake, IntakeError, IntakeStep, PartialInput};
pub use models::*;
pub use planner::{generate_plan, GenerationOutcome, ItineraryGenerator};
pub use sampler::{sample_without_replacement, RngSampler, Sampler, SeededSampler};
pub use transport::build_transport_options;
