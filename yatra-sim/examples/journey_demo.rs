//! Journey planning demo on a randomly scattered obstacle field.
//!
//! Usage:
//!   cargo run --example journey_demo
//!   cargo run --example journey_demo -- --obstacles 80 --horizon 20
//!   RUST_LOG=debug cargo run --example journey_demo

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use yatra_sim::{
    ascii_window, report, Coord, Heading, JourneyConfig, JourneyPlanner, ObstacleReport, Rover,
    Surface,
};

/// Journey planning demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of obstacles to scatter near the rover
    #[arg(short, long, default_value_t = 40)]
    obstacles: usize,

    /// Step horizon for the planner
    #[arg(long, default_value_t = 16)]
    horizon: usize,

    /// RNG seed for the obstacle field
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let rover = Rover::new();
    let mut surface = Surface::new(rover.position);

    // Scatter obstacles around the rover, as if discovered on earlier
    // traversals.
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut placed = 0;
    while placed < args.obstacles {
        let coord = Coord::new(rng.gen_range(-12..=12), rng.gen_range(-12..=12));
        if coord == rover.position {
            continue;
        }
        let heading = Heading::ALL[rng.gen_range(0..4)];
        report(&mut surface, &ObstacleReport::new(coord, heading)).expect("coord in bounds");
        placed += 1;
    }

    let config = JourneyConfig::default().with_horizon(args.horizon);
    let planner = JourneyPlanner::new(&surface, config);
    let journey = planner.plan(&rover);

    println!(
        "journey: {} steps, {:?}, {} cells expanded",
        journey.steps(),
        journey.end,
        journey.cells_expanded
    );
    println!(
        "destination: {} facing {}",
        journey.destination().position,
        journey.destination().heading
    );
    println!();
    println!("{}", ascii_window(&surface, &rover, Some(&journey), 14, 14));
}
