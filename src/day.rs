//! A particular execution of a game: which moves were played and which
//! rewards were given, as two sparse tri-state maps. A key that was
//! never written is *hidden* — a legitimate third state, never an error.
//! Moves and rewards must hash stably by value, so domains use plain
//! data keys (ids, tuples), not objects with identity.

use std::collections::HashMap;
use std::hash::Hash;

use crate::ActorId;

/// The two storable labels; "hidden" is key absence, on purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Yes,
    No,
}

/// One simulated (or observed, or dreamed) day of play.
///
/// `Clone` is the cheap independent duplicate: mutating a clone never
/// changes the original's answers for any key.
#[derive(Clone, Debug)]
pub struct GameDay<M, R> {
    moves: HashMap<M, Mark>,
    rewards: HashMap<(ActorId, R), Mark>,
}

impl<M, R> Default for GameDay<M, R> {
    fn default() -> Self {
        Self {
            moves: HashMap::new(),
            rewards: HashMap::new(),
        }
    }
}

impl<M, R> GameDay<M, R>
where
    M: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mv` as played. Overwrites any prior label; idempotent.
    pub fn play_move(&mut self, mv: M) {
        self.moves.insert(mv, Mark::Yes);
    }

    /// Record `mv` as explicitly not played.
    pub fn play_non_move(&mut self, mv: M) {
        self.moves.insert(mv, Mark::No);
    }

    /// Forget `mv`, restoring the hidden state.
    pub fn hide_move(&mut self, mv: &M) {
        self.moves.remove(mv);
    }

    /// True iff `mv` is recorded as played (hidden counts as false).
    pub fn move_exists(&self, mv: &M) -> bool {
        self.moves.get(mv) == Some(&Mark::Yes)
    }

    /// True iff `mv` is recorded as explicitly not played.
    pub fn move_does_not_exist(&self, mv: &M) -> bool {
        self.moves.get(mv) == Some(&Mark::No)
    }

    /// True iff nothing is recorded for `mv`.
    pub fn move_hidden(&self, mv: &M) -> bool {
        !self.moves.contains_key(mv)
    }

    /// Record `reward` as given to `actor`.
    pub fn give_reward(&mut self, actor: ActorId, reward: R) {
        self.rewards.insert((actor, reward), Mark::Yes);
    }

    /// Record `reward` as explicitly not given to `actor`.
    pub fn give_no_reward(&mut self, actor: ActorId, reward: R) {
        self.rewards.insert((actor, reward), Mark::No);
    }

    /// True iff `reward` is recorded as given to `actor`.
    pub fn reward_exists(&self, actor: ActorId, reward: &R) -> bool {
        self.rewards.get(&(actor, reward.clone())) == Some(&Mark::Yes)
    }

    /// True iff `reward` is recorded as explicitly not given to `actor`.
    pub fn reward_does_not_exist(&self, actor: ActorId, reward: &R) -> bool {
        self.rewards.get(&(actor, reward.clone())) == Some(&Mark::No)
    }

    /// True iff nothing is recorded for `(actor, reward)`.
    pub fn reward_hidden(&self, actor: ActorId, reward: &R) -> bool {
        !self.rewards.contains_key(&(actor, reward.clone()))
    }

    /// Number of move keys with a recorded label (played or not).
    pub fn recorded_moves(&self) -> usize {
        self.moves.len()
    }

    /// Number of (actor, reward) keys with a recorded label.
    pub fn recorded_rewards(&self) -> usize {
        self.rewards.len()
    }

    /// Moves recorded as played, in arbitrary order.
    pub fn played_moves(&self) -> impl Iterator<Item = &M> {
        self.moves
            .iter()
            .filter(|(_, m)| **m == Mark::Yes)
            .map(|(k, _)| k)
    }

    /// (actor, reward) pairs recorded as given, in arbitrary order.
    pub fn given_rewards(&self) -> impl Iterator<Item = (ActorId, &R)> {
        self.rewards
            .iter()
            .filter(|(_, m)| **m == Mark::Yes)
            .map(|((a, r), _)| (*a, r))
    }
}
