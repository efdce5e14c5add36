//! Mode history tracking.
//!
//! Provides a non-empty, ordered record of visited modes. The last entry is
//! always the current mode. Histories are copy-on-write: cloning one is
//! cheap, and a clone never observes mutations made through another.

use super::error::HistoryError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Ordered, non-empty history of visited modes.
///
/// The initial entry is stored apart from the entries above it, so a
/// history can never be empty and [`current`](Self::current) never fails.
/// Entries above the initial one live behind an [`Arc`] and are cloned only
/// when a shared history is modified.
///
/// # Example
///
/// ```rust
/// use modestack::core::ModeHistory;
///
/// let history = ModeHistory::new("EMPTY");
/// let history = history.pushed("CREATE").pushed("SAVING");
///
/// assert_eq!(history.current(), &"SAVING");
/// assert_eq!(history.get_path(), vec![&"EMPTY", &"CREATE", &"SAVING"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ModeHistory<M> {
    initial: M,
    above: Arc<Vec<M>>,
}

impl<M: Clone> ModeHistory<M> {
    /// Create a history seeded with exactly one mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modestack::core::ModeHistory;
    ///
    /// let history = ModeHistory::new(String::from("SHOW"));
    /// assert_eq!(history.depth(), 1);
    /// assert_eq!(history.current(), "SHOW");
    /// ```
    pub fn new(initial: M) -> Self {
        Self {
            initial,
            above: Arc::new(Vec::new()),
        }
    }

    /// The current mode: the last entry of the history.
    pub fn current(&self) -> &M {
        self.above.last().unwrap_or(&self.initial)
    }

    /// The bottom entry. This is the floor `back` never goes below.
    pub fn initial(&self) -> &M {
        &self.initial
    }

    /// Number of entries, always at least one.
    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }

    /// True when only the initial entry remains.
    pub fn is_at_floor(&self) -> bool {
        self.above.is_empty()
    }

    /// Iterate entries from oldest to current.
    pub fn iter(&self) -> impl Iterator<Item = &M> + '_ {
        std::iter::once(&self.initial).chain(self.above.iter())
    }

    /// Get the path of modes visited, oldest first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modestack::core::ModeHistory;
    ///
    /// let history = ModeHistory::new("EMPTY").pushed("EDIT").replaced("ERROR");
    ///
    /// let path = history.get_path();
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(path[0], &"EMPTY");
    /// assert_eq!(path[1], &"ERROR");
    /// ```
    pub fn get_path(&self) -> Vec<&M> {
        self.iter().collect()
    }

    /// Return a new history with `mode` appended.
    ///
    /// This is a pure function - the receiver is left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modestack::core::ModeHistory;
    ///
    /// let history = ModeHistory::new("A");
    /// let next = history.pushed("B");
    ///
    /// assert_eq!(next.depth(), 2);
    /// assert_eq!(history.depth(), 1); // Original unchanged
    /// ```
    pub fn pushed(&self, mode: M) -> Self {
        let mut next = self.clone();
        next.push(mode);
        next
    }

    /// Return a new history whose last entry is `mode`.
    ///
    /// On a single-entry history this replaces the initial mode.
    pub fn replaced(&self, mode: M) -> Self {
        let mut next = self.clone();
        next.replace_top(mode);
        next
    }

    /// Return a new history without its last entry.
    ///
    /// A single-entry history is returned as is.
    pub fn popped(&self) -> Self {
        let mut next = self.clone();
        next.pop();
        next
    }

    pub(crate) fn push(&mut self, mode: M) {
        Arc::make_mut(&mut self.above).push(mode);
    }

    /// Overwrite the last entry, returning the mode it held.
    pub(crate) fn replace_top(&mut self, mode: M) -> M {
        match Arc::make_mut(&mut self.above).last_mut() {
            Some(top) => std::mem::replace(top, mode),
            None => std::mem::replace(&mut self.initial, mode),
        }
    }

    /// Remove the last entry unless it is the initial one.
    pub(crate) fn pop(&mut self) -> Option<M> {
        if self.above.is_empty() {
            return None;
        }
        Arc::make_mut(&mut self.above).pop()
    }

}

impl<M> TryFrom<Vec<M>> for ModeHistory<M> {
    type Error = HistoryError;

    fn try_from(mut entries: Vec<M>) -> Result<Self, Self::Error> {
        if entries.is_empty() {
            return Err(HistoryError::Empty);
        }
        let initial = entries.remove(0);
        Ok(Self {
            initial,
            above: Arc::new(entries),
        })
    }
}

impl<M: Clone> From<ModeHistory<M>> for Vec<M> {
    fn from(history: ModeHistory<M>) -> Self {
        history.iter().cloned().collect()
    }
}

impl<M: Serialize + Clone> Serialize for ModeHistory<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, M: Deserialize<'de>> Deserialize<'de> for ModeHistory<M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<M>::deserialize(deserializer)?;
        Self::try_from(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestMode {
        Empty,
        Create,
        Saving,
        Error,
    }

    #[test]
    fn new_history_holds_only_initial() {
        let history = ModeHistory::new(TestMode::Empty);
        assert_eq!(history.depth(), 1);
        assert!(history.is_at_floor());
        assert_eq!(history.current(), &TestMode::Empty);
        assert_eq!(history.initial(), &TestMode::Empty);
    }

    #[test]
    fn pushed_appends_and_is_pure() {
        let history = ModeHistory::new(TestMode::Empty);
        let next = history.pushed(TestMode::Create);

        assert_eq!(history.depth(), 1);
        assert_eq!(next.depth(), 2);
        assert_eq!(next.current(), &TestMode::Create);
    }

    #[test]
    fn replaced_overwrites_last_entry() {
        let history = ModeHistory::new(TestMode::Empty)
            .pushed(TestMode::Create)
            .replaced(TestMode::Error);

        assert_eq!(
            history.get_path(),
            vec![&TestMode::Empty, &TestMode::Error]
        );
    }

    #[test]
    fn replaced_at_floor_overwrites_initial() {
        let history = ModeHistory::new(TestMode::Empty).replaced(TestMode::Saving);

        assert_eq!(history.depth(), 1);
        assert_eq!(history.initial(), &TestMode::Saving);
        assert_eq!(history.current(), &TestMode::Saving);
    }

    #[test]
    fn popped_stops_at_floor() {
        let history = ModeHistory::new(TestMode::Empty).pushed(TestMode::Create);

        let once = history.popped();
        assert_eq!(once.current(), &TestMode::Empty);

        let twice = once.popped();
        assert_eq!(twice, once);
        assert_eq!(twice.depth(), 1);
    }

    #[test]
    fn clone_is_isolated_from_later_mutation() {
        let mut history = ModeHistory::new(TestMode::Empty).pushed(TestMode::Create);
        let snapshot = history.clone();

        history.push(TestMode::Saving);
        history.replace_top(TestMode::Error);

        assert_eq!(
            snapshot.get_path(),
            vec![&TestMode::Empty, &TestMode::Create]
        );
        assert_eq!(
            history.get_path(),
            vec![&TestMode::Empty, &TestMode::Create, &TestMode::Error]
        );
    }

    #[test]
    fn replace_top_returns_overwritten_mode() {
        let mut history = ModeHistory::new(TestMode::Empty);
        assert_eq!(history.replace_top(TestMode::Create), TestMode::Empty);

        history.push(TestMode::Saving);
        assert_eq!(history.replace_top(TestMode::Error), TestMode::Saving);
    }


    #[test]
    fn revisited_modes_are_distinct_entries() {
        let history = ModeHistory::new(TestMode::Empty)
            .pushed(TestMode::Create)
            .pushed(TestMode::Empty)
            .pushed(TestMode::Create);

        assert_eq!(history.depth(), 4);
    }

    #[test]
    fn plain_values_work_as_modes() {
        let history = ModeHistory::new(1u32).pushed(2).replaced(3);
        assert_eq!(history.get_path(), vec![&1, &3]);

        let tagged = ModeHistory::new(("wizard", 0usize)).pushed(("wizard", 1));
        assert_eq!(tagged.current(), &("wizard", 1));
    }

    #[test]
    fn try_from_rejects_empty_entries() {
        let result = ModeHistory::<TestMode>::try_from(Vec::new());
        assert_eq!(result, Err(HistoryError::Empty));
    }

    #[test]
    fn try_from_preserves_order() {
        let history =
            ModeHistory::try_from(vec![TestMode::Empty, TestMode::Create, TestMode::Saving])
                .unwrap();

        assert_eq!(history.initial(), &TestMode::Empty);
        assert_eq!(history.current(), &TestMode::Saving);
        assert_eq!(
            Vec::from(history),
            vec![TestMode::Empty, TestMode::Create, TestMode::Saving]
        );
    }

    #[test]
    fn history_serializes_as_sequence() {
        let history = ModeHistory::new(TestMode::Empty).pushed(TestMode::Create);

        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"["Empty","Create"]"#);

        let deserialized: ModeHistory<TestMode> = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }

    #[test]
    fn empty_sequence_fails_to_deserialize() {
        let result: Result<ModeHistory<TestMode>, _> = serde_json::from_str("[]");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }
}
