// demos/friending.rs
// Run with:
//   cargo run --example friending --features "domain-friending"

use std::cell::RefCell;

use bevy_prng::WyRand;
use rand_core::SeedableRng;

use game_dreaming::domains::friending::{day_from_edges, FriendingGame};
use game_dreaming::systems::{dreaming, driver};
use game_dreaming::{ActorId, SimError};

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // A small hand-rolled friendship network (directed nominations).
    let nplayers = 6;
    let edges = [
        (0, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (3, 0),
        (4, 0),
        (5, 0),
        (2, 0),
        (3, 4),
    ];

    let (game, mut actors) = FriendingGame::with_population(nplayers);
    let observed = day_from_edges(nplayers, &edges);

    // Initial dreaming: retrain against the observed network before
    // simulating anything forward.
    println!("== initial dreaming ==");
    for (i, actor) in actors.iter_mut().enumerate() {
        let rng = RefCell::new(WyRand::from_seed((100 + i as u64).to_le_bytes()));
        let utility = dreaming::retrain(actor, ActorId(i), &game, &observed, 50, &rng)?;
        println!(
            "actor {i}: utility {utility:.1}, perceived status {:?}",
            actor
                .perceived_status()
                .iter()
                .map(|s| (s * 100.0).round() / 100.0)
                .collect::<Vec<_>>()
        );
    }

    // Forward simulation: wake, report, dream, repeat.
    println!("== simulating ==");
    let cfg = driver::SimConfig {
        num_days: 5,
        num_dreams: 20,
        seed: 7,
    };
    driver::simulate(&game, &mut actors, cfg, |day_idx, day| {
        println!(
            "day #{day_idx}: {} nominations played",
            day.played_moves().count()
        );
    })?;

    for actor in &actors {
        println!(
            "actor {}: final perceived status {:?}",
            actor.id().0,
            actor
                .perceived_status()
                .iter()
                .map(|s| (s * 100.0).round() / 100.0)
                .collect::<Vec<_>>()
        );
    }

    Ok(())
}
