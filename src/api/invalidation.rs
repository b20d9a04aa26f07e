use serde::{Deserialize, Serialize};

/// Why the chart set must be torn down and rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedrawCause {
    DatasetReplaced,
    ModeChanged,
}

impl RedrawCause {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DatasetReplaced => "dataset_replaced",
            Self::ModeChanged => "mode_changed",
        }
    }
}

/// Two-state redraw machine.
///
/// `Idle` means scales and drawn panels reflect the current dataset and
/// mode. `Dirty` means a full rebuild is pending; it only persists while no
/// drawable dataset is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RedrawState {
    #[default]
    Idle,
    Dirty(RedrawCause),
}

impl RedrawState {
    #[must_use]
    pub const fn is_dirty(self) -> bool {
        matches!(self, Self::Dirty(_))
    }

    #[must_use]
    pub const fn cause(self) -> Option<RedrawCause> {
        match self {
            Self::Idle => None,
            Self::Dirty(cause) => Some(cause),
        }
    }

    /// Marks a rebuild as pending.
    ///
    /// A pending dataset replacement is never downgraded to a mode change.
    #[must_use]
    pub const fn mark(self, cause: RedrawCause) -> Self {
        match (self, cause) {
            (Self::Dirty(RedrawCause::DatasetReplaced), _) => self,
            _ => Self::Dirty(cause),
        }
    }
}

/// Result of a call that may rebuild the chart set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedrawOutcome {
    /// Panels were cleared and redrawn from fresh scales.
    Rebuilt,
    /// Nothing relevant changed; drawn panels were left alone.
    Unchanged,
    /// No drawable dataset yet; nothing is shown.
    NotReady,
}

impl RedrawOutcome {
    #[must_use]
    pub const fn is_rebuilt(self) -> bool {
        matches!(self, Self::Rebuilt)
    }
}

/// Counters exposed for diagnostics and regression tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RedrawStats {
    pub rebuilds: u64,
    pub ignored_datasets: u64,
    pub focus_moves: u64,
}

#[cfg(test)]
mod tests {
    use super::{RedrawCause, RedrawState};

    #[test]
    fn idle_transitions_to_dirty_with_cause() {
        let state = RedrawState::Idle.mark(RedrawCause::ModeChanged);
        assert!(state.is_dirty());
        assert_eq!(state.cause(), Some(RedrawCause::ModeChanged));
    }

    #[test]
    fn dataset_cause_is_sticky() {
        let state = RedrawState::Idle
            .mark(RedrawCause::DatasetReplaced)
            .mark(RedrawCause::ModeChanged);
        assert_eq!(state, RedrawState::Dirty(RedrawCause::DatasetReplaced));

        let state = RedrawState::Idle
            .mark(RedrawCause::ModeChanged)
            .mark(RedrawCause::DatasetReplaced);
        assert_eq!(state, RedrawState::Dirty(RedrawCause::DatasetReplaced));
    }

    #[test]
    fn idle_has_no_cause() {
        assert!(!RedrawState::default().is_dirty());
        assert_eq!(RedrawState::Idle.cause(), None);
    }
}
