//! Reversible mask edit actions.
//!
//! The history treats actions as opaque: the only capability it relies on is
//! [`MaskAction::apply`], which plays an action forward or backward over a
//! mask and returns the resulting mask. `MaskEdit` is the concrete set of
//! edits the editor tools record.

use serde::{Deserialize, Serialize};

use crate::mask::Mask;

/// Which way an action is played while navigating history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Revert the action (undo).
    Backward,
    /// Apply the action (record/redo).
    Forward,
}

/// A reversible edit over a mask.
///
/// Playing `Forward` produces the next mask; playing `Backward` produces the
/// prior one. Implementations never mutate the input mask.
pub trait MaskAction: std::fmt::Debug {
    fn apply(&self, direction: Direction, mask: &Mask) -> Mask;
}

/// Which editor tool produced an edit.
///
/// Carried as provenance so the UI can render status lines like
/// "Undo: Brush add (12 px)".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    MagicWand,
    Brush,
    Eraser,
}

impl Tool {
    fn name(self) -> &'static str {
        match self {
            Tool::MagicWand => "Magic wand",
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
        }
    }
}

/// A concrete mask edit recorded by the editor tools.
///
/// `Add` and `Remove` are set-algebraic and therefore not guaranteed perfect
/// inverses: adding a pixel that was already selected undoes to a mask
/// without it. The history's saved-snapshot check accounts for this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MaskEdit {
    /// Select `pixels` in addition to the current selection.
    Add { tool: Tool, pixels: Mask },
    /// Deselect `pixels`.
    Remove { tool: Tool, pixels: Mask },
    /// Swap the whole selection (select-all, clear, flood select).
    Replace { tool: Tool, before: Mask, after: Mask },
}

impl MaskEdit {
    /// Human-readable label for undo/redo status messages.
    pub fn label(&self) -> String {
        match self {
            MaskEdit::Add { tool, pixels } => {
                format!("{} add ({} px)", tool.name(), pixels.len())
            }
            MaskEdit::Remove { tool, pixels } => {
                format!("{} erase ({} px)", tool.name(), pixels.len())
            }
            MaskEdit::Replace { tool, after, .. } => {
                format!("{} replace ({} px)", tool.name(), after.len())
            }
        }
    }
}

impl MaskAction for MaskEdit {
    fn apply(&self, direction: Direction, mask: &Mask) -> Mask {
        match (self, direction) {
            (MaskEdit::Add { pixels, .. }, Direction::Forward) => mask.union(pixels),
            (MaskEdit::Add { pixels, .. }, Direction::Backward) => mask.difference(pixels),
            (MaskEdit::Remove { pixels, .. }, Direction::Forward) => mask.difference(pixels),
            (MaskEdit::Remove { pixels, .. }, Direction::Backward) => mask.union(pixels),
            (MaskEdit::Replace { after, .. }, Direction::Forward) => after.clone(),
            (MaskEdit::Replace { before, .. }, Direction::Backward) => before.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::Pixel;

    fn mask(pixels: &[Pixel]) -> Mask {
        pixels.iter().copied().collect()
    }

    #[test]
    fn test_add_forward_and_backward() {
        let edit = MaskEdit::Add {
            tool: Tool::Brush,
            pixels: mask(&[2, 3]),
        };

        let forward = edit.apply(Direction::Forward, &mask(&[1]));
        assert_eq!(forward, mask(&[1, 2, 3]));

        let backward = edit.apply(Direction::Backward, &forward);
        assert_eq!(backward, mask(&[1]));
    }

    #[test]
    fn test_remove_forward_and_backward() {
        let edit = MaskEdit::Remove {
            tool: Tool::Eraser,
            pixels: mask(&[1]),
        };

        let forward = edit.apply(Direction::Forward, &mask(&[1, 2]));
        assert_eq!(forward, mask(&[2]));

        let backward = edit.apply(Direction::Backward, &forward);
        assert_eq!(backward, mask(&[1, 2]));
    }

    #[test]
    fn test_replace_swaps_whole_mask() {
        let edit = MaskEdit::Replace {
            tool: Tool::MagicWand,
            before: mask(&[1, 2]),
            after: mask(&[7, 8, 9]),
        };

        assert_eq!(edit.apply(Direction::Forward, &mask(&[1, 2])), mask(&[7, 8, 9]));
        assert_eq!(edit.apply(Direction::Backward, &mask(&[7, 8, 9])), mask(&[1, 2]));
    }

    #[test]
    fn test_overlapping_add_is_not_a_perfect_inverse() {
        // Pixel 2 was already selected; undoing the add deselects it anyway.
        let edit = MaskEdit::Add {
            tool: Tool::Brush,
            pixels: mask(&[2]),
        };

        let start = mask(&[1, 2]);
        let forward = edit.apply(Direction::Forward, &start);
        assert_eq!(forward, start);

        let backward = edit.apply(Direction::Backward, &forward);
        assert_eq!(backward, mask(&[1]));
        assert_ne!(backward, start);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let edit = MaskEdit::Add {
            tool: Tool::Brush,
            pixels: mask(&[5]),
        };
        let start = mask(&[1]);
        let _ = edit.apply(Direction::Forward, &start);

        assert_eq!(start, mask(&[1]));
    }

    #[test]
    fn test_labels() {
        let add = MaskEdit::Add {
            tool: Tool::Brush,
            pixels: mask(&[1, 2, 3]),
        };
        assert_eq!(add.label(), "Brush add (3 px)");

        let replace = MaskEdit::Replace {
            tool: Tool::MagicWand,
            before: Mask::new(),
            after: mask(&[4, 5]),
        };
        assert_eq!(replace.label(), "Magic wand replace (2 px)");
    }
}
