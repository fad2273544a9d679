//! Waking phase: sample a full day of play from scratch.

use std::cell::RefCell;

use bevy_prng::WyRand;

use crate::mechanics::{linalg, logistic, stoch};
use crate::{Actor, ActorId, Game, GameDay, SimError};

/// Generate one day: for every actor, one independent Bernoulli trial
/// per available move at `sigmoid(strategy · rules)`, then — strictly
/// after all moves are finalized — one trial per available reward at
/// `sigmoid(scores · easiness)`. Nothing is left hidden.
///
/// `actors[i]` is the actor behind `ActorId(i)`; the game's
/// `num_actors` must agree with the slice length.
pub fn generate_game_day<G, A>(
    game: &G,
    actors: &[A],
    rng: &RefCell<WyRand>,
) -> Result<GameDay<G::Move, G::Reward>, SimError>
where
    G: Game,
    A: Actor<Move = G::Move>,
{
    let mut day = GameDay::new();

    for (i, actor) in actors.iter().enumerate() {
        let who = ActorId(i);
        for mv in game.moves_for(who) {
            let score = linalg::dot(
                "strategy vs rules",
                &actor.strategy_vector(&mv),
                &game.rules_vector(who, &mv),
            )?;
            if stoch::bernoulli(rng, logistic::sigmoid(score)) {
                day.play_move(mv);
            } else {
                day.play_non_move(mv);
            }
        }
    }

    // Rewards may depend on the day's moves, never on other rewards.
    for i in 0..actors.len() {
        let who = ActorId(i);
        for reward in game.rewards_for(who) {
            let score = linalg::dot(
                "scores vs easiness",
                &game.scores_vector(who, &day, &reward),
                &game.easiness_vector(who, &reward),
            )?;
            if stoch::bernoulli(rng, logistic::sigmoid(score)) {
                day.give_reward(who, reward);
            } else {
                day.give_no_reward(who, reward);
            }
        }
    }

    Ok(day)
}
