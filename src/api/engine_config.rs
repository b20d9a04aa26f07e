use serde::{Deserialize, Serialize};

use crate::core::{ChartGroup, Mode};

/// Display settings supplied by the host page.
///
/// Serializable so hosts can persist the toggles alongside their own state.
/// Missing fields fall back to linear, per-series scaling with the
/// cumulative group visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HostConfig {
    #[serde(default)]
    pub log_scale: bool,
    #[serde(default)]
    pub shared_domain: bool,
    #[serde(default)]
    pub visible_group: ChartGroup,
}

impl HostConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_scale(mut self, enabled: bool) -> Self {
        self.log_scale = enabled;
        self
    }

    #[must_use]
    pub fn with_shared_domain(mut self, enabled: bool) -> Self {
        self.shared_domain = enabled;
        self
    }

    /// Selects which group is shown; both groups are always built.
    #[must_use]
    pub fn with_visible_group(mut self, group: ChartGroup) -> Self {
        self.visible_group = group;
        self
    }

    /// The scale-affecting part of the configuration.
    #[must_use]
    pub fn mode(self) -> Mode {
        Mode::new(self.shared_domain, self.log_scale)
    }

    pub(super) fn set_mode(&mut self, mode: Mode) {
        self.shared_domain = mode.shared_domain;
        self.log_scale = mode.log_scale;
    }
}
