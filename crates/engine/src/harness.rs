//! Test harness for scripted mask-editing sessions.
//!
//! This module provides `SessionHarness`, a wrapper around `MaskHistory`
//! that drives scripted operations while independently tracking which edits
//! should be in effect. After every step it verifies the core invariant: the
//! live mask equals the initial mask with the applied prefix of edits played
//! forward. Use it to test editing-session invariants without GUI
//! dependencies.

use crate::action::{Direction, MaskAction, MaskEdit, Tool};
use crate::history::{MaskHistory, Status};
use crate::mask::{Mask, Pixel};

/// Operation in a scripted session.
#[derive(Debug, Clone)]
pub enum Op {
    /// Brush-select pixels.
    Brush(Vec<Pixel>),
    /// Erase pixels.
    Erase(Vec<Pixel>),
    /// Magic-wand select replacing the whole mask.
    Wand(Vec<Pixel>),
    Undo,
    Redo,
    Save,
}

/// Drives a `MaskHistory` through scripted ops and checks invariants.
pub struct SessionHarness {
    initial: Mask,
    history: MaskHistory,
    /// Shadow copy of the recorded log, truncated and appended in lockstep.
    edits: Vec<MaskEdit>,
    /// Shadow copy of the present position.
    cursor: usize,
}

impl SessionHarness {
    pub fn new() -> Self {
        Self::with_mask(Mask::new())
    }

    pub fn with_mask(initial: Mask) -> Self {
        Self {
            history: MaskHistory::with_mask(initial.clone()),
            initial,
            edits: Vec::new(),
            cursor: 0,
        }
    }

    pub fn history(&self) -> &MaskHistory {
        &self.history
    }

    /// Apply one op, asserting the expected status and all invariants.
    pub fn step(&mut self, op: &Op) {
        match op {
            Op::Brush(pixels) => self.record(MaskEdit::Add {
                tool: Tool::Brush,
                pixels: pixels.iter().copied().collect(),
            }),
            Op::Erase(pixels) => self.record(MaskEdit::Remove {
                tool: Tool::Eraser,
                pixels: pixels.iter().copied().collect(),
            }),
            Op::Wand(pixels) => {
                let edit = MaskEdit::Replace {
                    tool: Tool::MagicWand,
                    before: self.history.mask().clone(),
                    after: pixels.iter().copied().collect(),
                };
                self.record(edit);
            }
            Op::Undo => {
                let status = self.history.undo();
                if self.cursor > 0 {
                    assert_eq!(status, Status::Success);
                    self.cursor -= 1;
                } else {
                    assert_eq!(status, Status::Failure);
                }
            }
            Op::Redo => {
                let status = self.history.redo();
                if self.cursor < self.edits.len() {
                    assert_eq!(status, Status::Success);
                    self.cursor += 1;
                } else {
                    assert_eq!(status, Status::Failure);
                }
            }
            Op::Save => self.history.mark_saved(),
        }
        self.check_invariants();
    }

    /// Run a whole script.
    pub fn run(&mut self, script: &[Op]) {
        for op in script {
            self.step(op);
        }
    }

    fn record(&mut self, edit: MaskEdit) {
        self.edits.truncate(self.cursor);
        self.edits.push(edit.clone());
        self.cursor += 1;
        assert_eq!(self.history.apply(Box::new(edit)), Status::Success);
    }

    /// The mask must equal the initial mask with the applied prefix played
    /// forward, and the navigation predicates must agree with the cursor.
    fn check_invariants(&self) {
        let mut expected = self.initial.clone();
        for edit in &self.edits[..self.cursor] {
            expected = edit.apply(Direction::Forward, &expected);
        }
        assert_eq!(*self.history.mask(), expected);
        assert!(self.cursor <= self.edits.len());
        assert_eq!(self.history.can_undo(), self.cursor > 0);
        assert_eq!(self.history.can_redo(), self.cursor < self.edits.len());
    }
}

impl Default for SessionHarness {
    fn default() -> Self {
        Self::new()
    }
}
