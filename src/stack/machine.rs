//! Mode stack that drives forward and backward navigation.

use crate::core::{Mode, ModeHistory};
use std::fmt::Debug;

/// How a forward transition treats the current history entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionKind {
    /// Append the new mode; the previous one stays reachable via `back`
    #[default]
    Push,

    /// Overwrite the current entry; the previous mode is not revisitable
    Replace,
}

impl From<bool> for TransitionKind {
    /// Maps a `replace` flag onto a transition kind.
    fn from(replace: bool) -> Self {
        if replace {
            Self::Replace
        } else {
            Self::Push
        }
    }
}

/// Finite-history view-state machine.
///
/// The current mode is always the last entry of the history; it is never
/// stored separately. `back` never removes the initial entry.
///
/// Any `Clone + Debug` value can be a mode: string tags, integers, tuples,
/// or enums declared with [`mode_enum!`](crate::mode_enum).
///
/// # Example
///
/// ```rust
/// use modestack::{ModeStack, TransitionKind};
///
/// let mut stack = ModeStack::new("EMPTY");
///
/// stack.transition("EDIT", TransitionKind::Push);
/// stack.transition("ERROR", TransitionKind::Replace);
/// assert_eq!(stack.current_mode(), &"ERROR");
///
/// stack.back();
/// assert_eq!(stack.current_mode(), &"EMPTY");
///
/// stack.back();
/// assert_eq!(stack.current_mode(), &"EMPTY");
/// ```
#[derive(Clone, Debug)]
pub struct ModeStack<M> {
    history: ModeHistory<M>,
}

impl<M: Clone + Debug> ModeStack<M> {
    /// Create a stack whose history holds only `initial`.
    pub fn new(initial: M) -> Self {
        Self::from_history(ModeHistory::new(initial))
    }

    /// Create a stack that continues from an existing history snapshot.
    pub fn from_history(history: ModeHistory<M>) -> Self {
        Self { history }
    }

    /// Get current mode (pure)
    pub fn current_mode(&self) -> &M {
        self.history.current()
    }

    /// Number of history entries, always at least one
    pub fn depth(&self) -> usize {
        self.history.depth()
    }

    /// Whether `back` would change the current mode
    pub fn can_go_back(&self) -> bool {
        !self.history.is_at_floor()
    }

    /// Whether the stack is at its initial entry
    pub fn is_at_floor(&self) -> bool {
        self.history.is_at_floor()
    }

    /// Snapshot of the history.
    ///
    /// The snapshot is independent: later transitions on this stack are
    /// never visible through it.
    pub fn history(&self) -> ModeHistory<M> {
        self.history.clone()
    }

    /// Move forward to `mode`.
    ///
    /// Revisiting a mode already in history is allowed and recorded as a
    /// new entry.
    pub fn transition(&mut self, mode: M, kind: TransitionKind) {
        match kind {
            TransitionKind::Push => {
                tracing::debug!(
                    from = ?self.current_mode(),
                    to = ?mode,
                    depth = self.depth() + 1,
                    "pushed mode"
                );
                self.history.push(mode);
            }
            TransitionKind::Replace => {
                let replaced = self.history.replace_top(mode);
                tracing::debug!(
                    from = ?replaced,
                    to = ?self.current_mode(),
                    depth = self.depth(),
                    "replaced mode"
                );
            }
        }
    }

    /// Shorthand for `transition(mode, TransitionKind::Push)`
    pub fn push(&mut self, mode: M) {
        self.transition(mode, TransitionKind::Push);
    }

    /// Shorthand for `transition(mode, TransitionKind::Replace)`
    pub fn replace(&mut self, mode: M) {
        self.transition(mode, TransitionKind::Replace);
    }

    /// Step back to the previous mode.
    ///
    /// Returns the mode that was left, or `None` when already at the
    /// initial entry, in which case nothing changes.
    pub fn back(&mut self) -> Option<M> {
        match self.history.pop() {
            Some(left) => {
                tracing::debug!(
                    from = ?left,
                    to = ?self.current_mode(),
                    depth = self.depth(),
                    "went back"
                );
                Some(left)
            }
            None => {
                tracing::trace!(mode = ?self.current_mode(), "back at floor");
                None
            }
        }
    }
}

impl<M: Mode> ModeStack<M> {
    /// Display name of the current mode
    pub fn current_name(&self) -> &str {
        self.current_mode().name()
    }

    /// Whether the current mode is an error view
    pub fn is_in_error(&self) -> bool {
        self.current_mode().is_error()
    }
}
