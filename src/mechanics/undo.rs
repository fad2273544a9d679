/// One-level undo buffer for actor strategy state.

/// Explicit {empty, stashed} rollback slot. Stashing while a value is
/// already held discards the older rollback point (the contract of
/// `Actor::mutate_strategy`); restoring from an empty slot is a caller
/// bug and panics.
#[derive(Clone, Debug, Default)]
pub struct UndoSlot<T> {
    prior: Option<T>,
}

impl<T> UndoSlot<T> {
    pub fn new() -> Self {
        Self { prior: None }
    }

    /// Remember `value` as the rollback target, replacing any older one.
    pub fn stash(&mut self, value: T) {
        self.prior = Some(value);
    }

    /// Take back the stashed value, emptying the slot.
    ///
    /// Panics if nothing is stashed: unmutate is only legal immediately
    /// after a mutate that has not been accepted.
    pub fn restore(&mut self) -> T {
        match self.prior.take() {
            Some(v) => v,
            None => panic!("unmutate without a pending mutation"),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.prior.is_some()
    }
}
