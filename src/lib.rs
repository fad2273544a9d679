/*!
`game_dreaming` — a minimal stochastic wake/dream harness for adaptive agents.

What it does
- Simulates repeated play among a population of actors: each day every
  available move and reward is resolved by an independent Bernoulli trial
  whose probability is a logistic function of a strategy·rules (or
  scores·easiness) dot product.
- Lets each actor retrain overnight: mutate its strategy, "dream" a
  hypothetical day under the mutated strategy while holding everyone
  else's recorded behavior fixed, and stochastically keep or revert the
  mutation via a fixed-shape logistic acceptance test.

How to use (call surface only)
- Implement [`Actor`] for your agent type (strategy vector per move,
  fixed preferences, one-level mutate/unmutate) and [`Game`] for your
  rule system (lazy move/reward enumerations plus the four vector
  functions).
- Hold the population in a `Vec<A>` and call
  `systems::driver::simulate(&game, &mut actors, cfg, report)`.
- Or drive the pieces yourself: `systems::waking::generate_game_day`,
  `systems::dreaming::{dream, retrain}`.

What it does NOT do
- No convergence guarantees, no annealing schedule, no persistence of
  trained state, no I/O. Domains are external: the optional
  `domain-friending` feature ships one worked example.
*/

use std::cell::RefCell;
use std::hash::Hash;

use bevy_prng::WyRand;
use thiserror::Error;

pub mod day;
pub mod domains;
pub mod mechanics;
pub mod systems;

pub use day::GameDay;

/// Stable handle for one actor in the population. The [`Game`] only ever
/// sees handles; the actors themselves live in a caller-owned slice so
/// each strategy vector has exactly one owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub usize);

/// Errors surfaced by the core loops. All of these are fatal for the
/// computation that raised them; the driver aborts the run on the first.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("dimension mismatch in {context}: {left} vs {right}")]
    DimensionMismatch {
        context: &'static str,
        left: usize,
        right: usize,
    },
}

/// A player in the game. We make no assumptions about its strategy or
/// preferences beyond the shapes below, but we do assume its strategy is
/// directed toward maximizing its utility.
pub trait Actor {
    type Move;

    /// Strategy vector for one move; dotted with the game's rules vector
    /// to produce the move-propensity score.
    fn strategy_vector(&self, mv: &Self::Move) -> Vec<f64>;

    /// How much this actor values each possible reward outcome. Fixed
    /// for the run; must be the same length as the game's rewards
    /// vector for this actor.
    fn preferences(&self) -> &[f64];

    /// Perturb the strategy, remembering the prior value for one level
    /// of rollback. A second mutate before `unmutate_strategy` discards
    /// the first rollback point.
    fn mutate_strategy(&mut self, rng: &RefCell<WyRand>);

    /// Restore the strategy stashed by the last `mutate_strategy`.
    /// Precondition: a mutation is pending; implementations should
    /// panic otherwise.
    fn unmutate_strategy(&mut self);
}

/// The game being played. Encodes the rule system and enumerates the
/// possible moves and rewards; holds only [`ActorId`] handles, never the
/// actors themselves.
pub trait Game {
    type Move: Clone + Eq + Hash;
    type Reward: Clone + Eq + Hash;

    fn num_actors(&self) -> usize;

    /// All moves available to one actor.
    fn moves_for(&self, actor: ActorId) -> Box<dyn Iterator<Item = Self::Move> + '_>;

    /// All moves for all actors, in population order.
    fn all_moves(&self) -> Box<dyn Iterator<Item = Self::Move> + '_> {
        Box::new((0..self.num_actors()).flat_map(move |i| self.moves_for(ActorId(i))))
    }

    /// All rewards available to one actor.
    fn rewards_for(&self, actor: ActorId) -> Box<dyn Iterator<Item = Self::Reward> + '_>;

    /// Models the probability that `actor` plays `mv` (dotted with the
    /// actor's strategy vector).
    fn rules_vector(&self, actor: ActorId, mv: &Self::Move) -> Vec<f64>;

    /// Models the probability that `actor` gets `reward` given the moves
    /// recorded in `day`. May read moves, never rewards.
    fn scores_vector(
        &self,
        actor: ActorId,
        day: &GameDay<Self::Move, Self::Reward>,
        reward: &Self::Reward,
    ) -> Vec<f64>;

    /// The other half of the reward probability; ±∞ entries are legal
    /// and saturate the logistic.
    fn easiness_vector(&self, actor: ActorId, reward: &Self::Reward) -> Vec<f64>;

    /// Zero/one vector of rewards actually granted in `day`, aligned
    /// with the actor's preferences vector (the alignment is checked at
    /// every dot product).
    fn rewards_vector(&self, actor: ActorId, day: &GameDay<Self::Move, Self::Reward>) -> Vec<f64>;
}
