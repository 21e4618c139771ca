//! Undo/redo history for mask edits.
//!
//! The history owns the live mask plus an ordered log of recorded actions
//! and a present position into it. Undo/redo move the position one step at a
//! time, playing the crossed action backward or forward. A saved checkpoint
//! (position + mask snapshot) marks the last externally persisted state;
//! dirtiness is computed from history state, not tracked manually.
//!
//! The engine performs no I/O. The expected protocol is: mutate via
//! [`MaskHistory::apply`], persist the mask through the external store, then
//! call [`MaskHistory::mark_saved`].

use crate::action::{Direction, MaskAction};
use crate::mask::Mask;

/// Outcome of a history operation.
///
/// Failures are expected, recoverable conditions (nothing to undo, nothing
/// to redo) and leave the history untouched. Callers branch on the value;
/// nothing here panics.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

/// Linear undo/redo history owning the live mask.
///
/// `present` counts applied actions: the mask always equals the initial mask
/// with `history[0..present]` played forward over it. Recording a new action
/// while undone discards the tail `history[present..]` permanently — the
/// redo branch is linear, not a tree.
#[derive(Debug)]
pub struct MaskHistory {
    mask: Mask,
    history: Vec<Box<dyn MaskAction>>,
    present: usize,
    saved: usize,
    /// Value copy taken at `mark_saved()`, never an alias of `mask`.
    saved_mask: Mask,
}

impl MaskHistory {
    /// History starting from an empty mask.
    pub fn new() -> Self {
        Self::with_mask(Mask::new())
    }

    /// History starting from an existing mask, e.g. one loaded from storage.
    ///
    /// The checkpoint starts at the initial state, so a freshly constructed
    /// history reports saved.
    pub fn with_mask(mask: Mask) -> Self {
        let saved_mask = mask.clone();
        Self {
            mask,
            history: Vec::new(),
            present: 0,
            saved: 0,
            saved_mask,
        }
    }

    /// The current mask. Read-only: mutation goes through [`Self::apply`].
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn can_undo(&self) -> bool {
        self.present > 0
    }

    pub fn can_redo(&self) -> bool {
        self.present < self.history.len()
    }

    /// True if the live mask matches the last checkpoint.
    ///
    /// Both the position and the snapshot content must match: edits are not
    /// guaranteed perfect inverses, so returning to the saved position does
    /// not by itself prove the mask is unchanged.
    pub fn is_saved(&self) -> bool {
        self.saved == self.present && self.saved_mask == self.mask
    }

    /// Record the current state as the persisted checkpoint. Idempotent.
    ///
    /// Call after the mask has been written to storage; the history itself
    /// performs no I/O.
    pub fn mark_saved(&mut self) {
        self.saved = self.present;
        self.saved_mask = self.mask.clone();
    }

    /// Record a new action and play it forward.
    ///
    /// Discards any undone tail first. Always succeeds: the appended action
    /// is by construction the next one forward.
    pub fn apply(&mut self, action: Box<dyn MaskAction>) -> Status {
        self.history.truncate(self.present);
        self.history.push(action);
        self.step(Direction::Forward)
    }

    /// Step back one action. Fails without touching state when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Status {
        self.step(Direction::Backward)
    }

    /// Step forward one previously undone action. Fails without touching
    /// state when there is nothing to redo.
    pub fn redo(&mut self) -> Status {
        self.step(Direction::Forward)
    }

    // One-step move shared by apply/undo/redo. The crossed action sits at
    // history[present] before a forward step and at history[present - 1]
    // before a backward one.
    fn step(&mut self, direction: Direction) -> Status {
        match direction {
            Direction::Backward => {
                if self.present == 0 {
                    return Status::Failure;
                }
                self.present -= 1;
                self.mask = self.history[self.present].apply(direction, &self.mask);
            }
            Direction::Forward => {
                if self.present == self.history.len() {
                    return Status::Failure;
                }
                self.mask = self.history[self.present].apply(direction, &self.mask);
                self.present += 1;
            }
        }
        Status::Success
    }
}

impl Default for MaskHistory {
    fn default() -> Self {
        Self::new()
    }
}
