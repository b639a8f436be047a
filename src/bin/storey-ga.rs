//! Building search CLI: evolves a building within the given budgets,
//! prints every floor of the best design and saves it as JSON.
//!
//! Usage:
//!   cargo run --release --features cli -- --output building_design.json
//!   RUST_LOG=storey_ga=debug cargo run --features cli -- --seed 42 -o out.json

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use storey_ga::ga::GaConfig;
use storey_ga::{run, BuildingConfig};

#[derive(Parser)]
#[command(name = "storey-ga")]
#[command(about = "Search for a tall, cheap building layout with a genetic algorithm")]
struct Args {
    /// Where to write the best design as JSON
    #[arg(short, long)]
    output: PathBuf,

    /// Number of floors per building
    #[arg(long, default_value_t = 10)]
    floors: usize,

    /// Height budget in meters
    #[arg(long, default_value_t = 60.0)]
    max_height: f64,

    /// Cost budget
    #[arg(long, default_value_t = 100_000.0)]
    max_cost: f64,

    /// Individuals per generation
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// Stop after this many generations without improvement
    #[arg(long, default_value_t = 100)]
    stagnation: usize,

    /// Hard cap on the number of generations
    #[arg(long)]
    max_generations: Option<usize>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let ga = GaConfig {
        population_size: args.population,
        stagnation_limit: args.stagnation,
        max_generations: args.max_generations,
        seed: args.seed,
        ..GaConfig::default()
    };
    let config = BuildingConfig::default()
        .with_floors(args.floors)
        .with_budgets(args.max_height, args.max_cost)
        .with_ga(ga);

    println!("Genetic Algorithm - Building Design with 3D Box Floors");
    let outcome = run(&config).context("invalid run configuration")?;
    let design = &outcome.design;

    for floor in &design.floors {
        let vertices: Vec<String> = floor
            .base_vertices()
            .iter()
            .map(|v| format!("({:.2}, {:.2})", v.x, v.y))
            .collect();
        println!(
            "Floor - Base Vertices: {}, Height: {:.2}, Cost: {:.2}",
            vertices.join(", "),
            floor.height(),
            floor.cost()
        );
    }

    println!();
    println!("  Generations:  {} ({})", outcome.generations, outcome.stop_reason);
    println!("  Total height: {:.2} / {:.2}", design.total_height, config.max_height);
    println!("  Total cost:   {:.2} / {:.2}", design.total_cost, config.max_cost);
    println!("  Fitness:      {:.4}", design.fitness);
    if !design.feasible {
        println!("  WARNING: no design within budget was found");
    }

    let json = serde_json::to_string_pretty(design).context("failed to serialize design")?;
    fs::write(&args.output, json)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("Building design saved to {}", args.output.display());

    Ok(())
}
