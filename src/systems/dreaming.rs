//! Dreaming phase: private forward simulation and strategy retraining.
//!
//! A dream answers "if I behaved this way, what reward profile would I
//! likely end up with, holding everyone else's recorded behavior
//! fixed". Retraining is a fixed-temperature stochastic hill climb over
//! the actor's strategy space: mutate, dream, then keep or revert.

use std::cell::RefCell;

use bevy_prng::WyRand;

use crate::mechanics::{linalg, logistic, stoch};
use crate::{Actor, ActorId, Game, GameDay, SimError};

/// Evaluate the actor's current (possibly just-mutated) strategy:
/// clone `reference`, resample only this actor's moves and rewards
/// under that strategy, and return `preferences · rewards_vector` of
/// the dreamed day. Other actors' recorded behavior is untouched.
pub fn dream<G, A>(
    actor: &A,
    who: ActorId,
    game: &G,
    reference: &GameDay<G::Move, G::Reward>,
    rng: &RefCell<WyRand>,
) -> Result<f64, SimError>
where
    G: Game,
    A: Actor<Move = G::Move>,
{
    let mut dreamed = reference.clone();

    for mv in game.moves_for(who) {
        let score = linalg::dot(
            "strategy vs rules",
            &actor.strategy_vector(&mv),
            &game.rules_vector(who, &mv),
        )?;
        if stoch::bernoulli(rng, logistic::sigmoid(score)) {
            dreamed.play_move(mv);
        } else {
            dreamed.play_non_move(mv);
        }
    }

    for reward in game.rewards_for(who) {
        let score = linalg::dot(
            "scores vs easiness",
            &game.scores_vector(who, &dreamed, &reward),
            &game.easiness_vector(who, &reward),
        )?;
        if stoch::bernoulli(rng, logistic::sigmoid(score)) {
            dreamed.give_reward(who, reward);
        } else {
            dreamed.give_no_reward(who, reward);
        }
    }

    linalg::dot(
        "preferences vs rewards",
        actor.preferences(),
        &game.rewards_vector(who, &dreamed),
    )
}

/// Retrain one actor against a finalized reference day: `num_dreams`
/// rounds of mutate → dream → accept-or-revert. The acceptance test is
/// the fixed-shape rule `u < sigmoid(baseline - candidate)` ⇒ revert —
/// a clear improvement is almost always kept, a clear regression almost
/// always reverted, near-ties go either way about half the time.
///
/// `baseline` starts from the utility the reference day actually
/// delivered and is updated only when a mutation is accepted; it is
/// never re-derived from the day after a rollback. Returns the final
/// baseline.
pub fn retrain<G, A>(
    actor: &mut A,
    who: ActorId,
    game: &G,
    reference: &GameDay<G::Move, G::Reward>,
    num_dreams: usize,
    rng: &RefCell<WyRand>,
) -> Result<f64, SimError>
where
    G: Game,
    A: Actor<Move = G::Move>,
{
    let mut baseline = linalg::dot(
        "preferences vs rewards",
        actor.preferences(),
        &game.rewards_vector(who, reference),
    )?;

    for _ in 0..num_dreams {
        actor.mutate_strategy(rng);
        let candidate = dream(actor, who, game, reference, rng)?;

        // The more the candidate surpasses the baseline, the more
        // likely we keep the switched strategy.
        if stoch::uniform01(rng) < logistic::sigmoid(baseline - candidate) {
            actor.unmutate_strategy();
        } else {
            baseline = candidate;
        }
    }

    Ok(baseline)
}
