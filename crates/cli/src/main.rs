mod render;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use itinera_core::{
    known_cities, Intake, IntakeError, IntakeStep, ItineraryGenerator, Plan, PlannerConfig,
    RngSampler, SeededSampler, TripInput,
};
use itinera_observability::{init_tracing, PlannerMetrics};
use tracing::info;

use crate::render::render_plan;

#[derive(Debug, Parser)]
#[command(name = "itinera")]
#[command(about = "Sample travel itineraries from a destination, budget and party size")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate one plan and print it.
    Plan {
        #[arg(long)]
        location: String,
        #[arg(long, default_value = "")]
        budget: String,
        #[arg(long, default_value = "1")]
        people: String,
        #[arg(long, env = "ITINERA_SEED")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Answer the trip questions interactively, then regenerate at will.
    Chat {
        #[arg(long, env = "ITINERA_SEED")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List destinations with curated attractions.
    Cities,
}

fn main() -> Result<()> {
    init_tracing("itinera_cli");
    let cli = Cli::parse();

    let planner = PlannerConfig::from_env().context("invalid planner configuration")?;
    let generator = ItineraryGenerator::new(planner);

    match cli.command {
        Command::Plan {
            location,
            budget,
            people,
            seed,
            format,
        } => {
            let input = TripInput::new(location, budget, people);
            let mut sampler = sampler_for(seed);
            let plan = generator.generate(&input, &mut sampler);
            print_plan(&plan, format)?;
        }
        Command::Chat { seed, format } => run_chat(&generator, seed, format)?,
        Command::Cities => {
            for city in known_cities() {
                println!("{city}");
            }
        }
    }

    Ok(())
}

fn sampler_for(seed: Option<u64>) -> SeededSampler {
    match seed {
        Some(seed) => RngSampler::seeded(seed),
        None => RngSampler::from_entropy(),
    }
}

fn print_plan(plan: &Plan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(plan)?),
        OutputFormat::Text => println!("{}", render_plan(plan)),
    }
    Ok(())
}

fn run_chat(
    generator: &ItineraryGenerator,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let metrics = PlannerMetrics::default();
    // one sampler per session so regenerations keep drawing fresh values
    let mut sampler = sampler_for(seed);
    let mut intake = Intake::new();
    let mut last_input: Option<TripInput> = None;

    println!("Itinera trip planner. type 'exit' to quit.");
    if let Some(prompt) = intake.prompt() {
        println!("{prompt}");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;
        let message = line.trim();

        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if intake.step() == IntakeStep::Complete {
            match message {
                "r" | "regenerate" => {
                    if let Some(input) = last_input.as_ref() {
                        metrics.inc_regeneration();
                        let plan = generate(generator, input, &mut sampler, &metrics);
                        print_plan(&plan, format)?;
                    }
                }
                "n" | "new" => {
                    intake = Intake::new();
                    if let Some(prompt) = intake.prompt() {
                        println!("{prompt}");
                    }
                }
                _ => println!("type 'r' to regenerate, 'n' for a new trip, or 'exit'"),
            }
            continue;
        }

        match intake.answer(message) {
            Ok(IntakeStep::Complete) => {
                if let Some(input) = intake.finish() {
                    let plan = generate(generator, &input, &mut sampler, &metrics);
                    print_plan(&plan, format)?;
                    last_input = Some(input);
                    println!("type 'r' to regenerate, 'n' for a new trip, or 'exit'");
                }
            }
            Ok(step) => {
                if let Some(prompt) = step.prompt() {
                    println!("{prompt}");
                }
            }
            Err(IntakeError::EmptyAnswer) => {
                if let Some(prompt) = intake.prompt() {
                    println!("{prompt}");
                }
            }
            Err(error @ IntakeError::AlreadyComplete) => println!("{error}"),
        }
    }

    let snapshot = metrics.snapshot();
    info!(
        plans = snapshot.plans_generated_total,
        regenerations = snapshot.regenerations_total,
        "chat session ended"
    );
    Ok(())
}

fn generate(
    generator: &ItineraryGenerator,
    input: &TripInput,
    sampler: &mut SeededSampler,
    metrics: &PlannerMetrics,
) -> Plan {
    metrics.inc_request();
    let (plan, outcome) = generator.generate_with_outcome(input, sampler);
    metrics.record_plan(outcome.known_city, outcome.extended_trip);
    plan
}
