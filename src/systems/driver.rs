//! Simulation driver: repeated wake/report/dream cycles.

use std::cell::RefCell;

use bevy_prng::WyRand;
use rand_core::SeedableRng;
use tracing::debug;

use crate::mechanics::stoch;
use crate::systems::{dreaming, waking};
use crate::{Actor, ActorId, Game, GameDay, SimError};

#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Wake/dream cycles to run.
    pub num_days: usize,
    /// Mutate/dream/accept rounds per actor per night.
    pub num_dreams: usize,
    /// Root seed; every day and every (day, actor) retraining gets its
    /// own derived WyRand stream, so runs are bit-reproducible.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_days: 10,
            num_dreams: 10,
            seed: 0,
        }
    }
}

/// Run the full simulation: for each day, generate a day of play, hand
/// it to `report` (purely observational), then retrain every actor in
/// population order against that same day. Aborts on the first core
/// error; partial-day recovery is not supported.
pub fn simulate<G, A, F>(
    game: &G,
    actors: &mut [A],
    cfg: SimConfig,
    mut report: F,
) -> Result<(), SimError>
where
    G: Game,
    A: Actor<Move = G::Move>,
    F: FnMut(usize, &GameDay<G::Move, G::Reward>),
{
    for day_idx in 0..cfg.num_days {
        let day_seed = stoch::derive_seed(cfg.seed, day_idx as u64);

        // waking
        let wake_rng = RefCell::new(WyRand::from_seed(day_seed.to_le_bytes()));
        let day = waking::generate_game_day(game, actors, &wake_rng)?;
        debug!(
            day = day_idx,
            moves = day.recorded_moves(),
            rewards = day.recorded_rewards(),
            "generated day"
        );
        report(day_idx, &day);

        // dreaming: each actor retrains on its own RNG stream, so the
        // order (or concurrency) of retraining cannot change outcomes.
        for (i, actor) in actors.iter_mut().enumerate() {
            let actor_seed = stoch::derive_seed(day_seed, 1 + i as u64);
            let dream_rng = RefCell::new(WyRand::from_seed(actor_seed.to_le_bytes()));
            let utility =
                dreaming::retrain(actor, ActorId(i), game, &day, cfg.num_dreams, &dream_rng)?;
            debug!(day = day_idx, actor = i, utility, "retrained actor");
        }
    }

    Ok(())
}
