#![cfg(feature = "domain-friending")]

//! Friending domain: a social network where the move "a nominates b as
//! a friend" is driven by how much higher `a` perceives `b`'s status
//! than its own, and the reward is being nominated. An actor's strategy
//! is its perceived-status vector over the whole population; retraining
//! nudges those perceptions toward whatever best predicts the incoming
//! nominations it actually observes.
//!
//! Loading a real network from disk is out of scope; seed the observed
//! day from an in-memory edge list with [`day_from_edges`].

use std::cell::RefCell;
use std::collections::HashSet;

use bevy_prng::WyRand;

use crate::mechanics::{stoch, undo::UndoSlot};
use crate::{Actor, ActorId, Game, GameDay};

/// Directed nomination: (friender, friendee). Doubles as the reward key
/// for the friendee ("friender nominated me").
pub type Nomination = (ActorId, ActorId);

pub fn friender(mv: &Nomination) -> ActorId {
    mv.0
}

pub fn friendee(mv: &Nomination) -> ActorId {
    mv.1
}

#[derive(Clone, Debug)]
pub struct FriendingActor {
    id: ActorId,
    /// What this actor thinks about the status of every actor,
    /// including itself. This is the mutable strategy state.
    perceived_status: Vec<f64>,
    /// Desire to be nominated is uniform over the population and does
    /// not depend on who the nominator is.
    preferences: Vec<f64>,
    undo: UndoSlot<Vec<f64>>,
}

impl FriendingActor {
    pub fn new(id: ActorId, nplayers: usize) -> Self {
        Self {
            id,
            perceived_status: vec![0.0; nplayers],
            preferences: vec![1.0; nplayers],
            undo: UndoSlot::new(),
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn perceived_status(&self) -> &[f64] {
        &self.perceived_status
    }
}

impl Actor for FriendingActor {
    type Move = Nomination;

    /// One dimension: the perceived status gap between the friendee and
    /// ourselves. Nominating up the hierarchy is attractive.
    fn strategy_vector(&self, mv: &Self::Move) -> Vec<f64> {
        debug_assert_eq!(friender(mv), self.id);
        vec![self.perceived_status[friendee(mv).0] - self.perceived_status[self.id.0]]
    }

    fn preferences(&self) -> &[f64] {
        &self.preferences
    }

    fn mutate_strategy(&mut self, rng: &RefCell<WyRand>) {
        self.undo.stash(self.perceived_status.clone());
        for s in self.perceived_status.iter_mut() {
            *s += stoch::gaussian01(rng);
        }
    }

    fn unmutate_strategy(&mut self) {
        self.perceived_status = self.undo.restore();
    }
}

/// The rule system. Holds only the population size; the actors live in
/// the caller's `Vec<FriendingActor>`.
#[derive(Clone, Copy, Debug)]
pub struct FriendingGame {
    nplayers: usize,
}

impl FriendingGame {
    pub fn new(nplayers: usize) -> Self {
        Self { nplayers }
    }

    /// Convenience: the game plus a fresh flat-status population.
    pub fn with_population(nplayers: usize) -> (Self, Vec<FriendingActor>) {
        let actors = (0..nplayers)
            .map(|i| FriendingActor::new(ActorId(i), nplayers))
            .collect();
        (Self::new(nplayers), actors)
    }
}

impl Game for FriendingGame {
    type Move = Nomination;
    type Reward = Nomination;

    fn num_actors(&self) -> usize {
        self.nplayers
    }

    fn moves_for(&self, actor: ActorId) -> Box<dyn Iterator<Item = Self::Move> + '_> {
        Box::new(
            (0..self.nplayers)
                .map(ActorId)
                .filter(move |b| *b != actor)
                .map(move |b| (actor, b)),
        )
    }

    /// Rewards for `actor` are everyone else's potential nominations of
    /// `actor`.
    fn rewards_for(&self, actor: ActorId) -> Box<dyn Iterator<Item = Self::Reward> + '_> {
        Box::new(
            (0..self.nplayers)
                .map(ActorId)
                .filter(move |b| *b != actor)
                .map(move |b| (b, actor)),
        )
    }

    fn rules_vector(&self, _actor: ActorId, _mv: &Self::Move) -> Vec<f64> {
        vec![1.0]
    }

    fn scores_vector(
        &self,
        actor: ActorId,
        day: &GameDay<Self::Move, Self::Reward>,
        reward: &Self::Reward,
    ) -> Vec<f64> {
        debug_assert_eq!(friendee(reward), actor);
        if day.move_exists(reward) {
            vec![1.0]
        } else {
            vec![-1.0]
        }
    }

    /// Infinite easiness: the nomination either happened or it did not,
    /// and that is all the reward model cares about, so the logistic is
    /// driven to a saturated 0 or 1.
    fn easiness_vector(&self, actor: ActorId, reward: &Self::Reward) -> Vec<f64> {
        debug_assert_eq!(friendee(reward), actor);
        vec![f64::INFINITY]
    }

    fn rewards_vector(&self, actor: ActorId, day: &GameDay<Self::Move, Self::Reward>) -> Vec<f64> {
        let mut bits = vec![0.0; self.nplayers];
        for b in (0..self.nplayers).map(ActorId) {
            if b != actor && day.move_exists(&(b, actor)) {
                bits[b.0] = 1.0;
            }
        }
        bits
    }
}

/// Build an observed day from a directed edge list: every ordered pair
/// is recorded, as played when the edge is present and explicitly
/// not-played otherwise. Nothing is left hidden.
pub fn day_from_edges(
    nplayers: usize,
    edges: &[(usize, usize)],
) -> GameDay<Nomination, Nomination> {
    let present: HashSet<(usize, usize)> = edges.iter().copied().collect();
    let mut day = GameDay::new();
    for a in 0..nplayers {
        for b in 0..nplayers {
            if a == b {
                continue;
            }
            if present.contains(&(a, b)) {
                day.play_move((ActorId(a), ActorId(b)));
            } else {
                day.play_non_move((ActorId(a), ActorId(b)));
            }
        }
    }
    day
}
