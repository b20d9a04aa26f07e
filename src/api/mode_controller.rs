use tracing::debug;

use crate::core::{ChartGroup, Mode, SeriesKind};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{HostConfig, RedrawCause, RedrawOutcome, TimeSeriesChart};

impl<R: Renderer> TimeSeriesChart<R> {
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.config.mode()
    }

    /// Switches scale mode; any actual change rebuilds all six panels once.
    pub fn set_mode(&mut self, mode: Mode) -> ChartResult<RedrawOutcome> {
        if mode == self.config.mode() {
            return self.flush_redraw();
        }
        debug!(
            shared_domain = mode.shared_domain,
            log_scale = mode.log_scale,
            "mode changed"
        );
        self.config.set_mode(mode);
        self.invalidate(RedrawCause::ModeChanged)
    }

    pub fn set_log_scale(&mut self, enabled: bool) -> ChartResult<RedrawOutcome> {
        self.set_mode(Mode {
            log_scale: enabled,
            ..self.mode()
        })
    }

    pub fn set_shared_domain(&mut self, enabled: bool) -> ChartResult<RedrawOutcome> {
        self.set_mode(Mode {
            shared_domain: enabled,
            ..self.mode()
        })
    }

    #[must_use]
    pub fn visible_group(&self) -> ChartGroup {
        self.config.visible_group
    }

    /// Changes which group the host shows. Never rebuilds.
    pub fn set_visible_group(&mut self, group: ChartGroup) {
        if self.config.visible_group != group {
            debug!(?group, "visible group changed");
            self.config.visible_group = group;
        }
    }

    /// Panels the host should currently display, in panel order.
    #[must_use]
    pub fn visible_panels(&self) -> [SeriesKind; 3] {
        self.config.visible_group.series()
    }

    /// Applies a full host configuration with at most one rebuild.
    pub fn apply_host_config(&mut self, config: HostConfig) -> ChartResult<RedrawOutcome> {
        self.set_visible_group(config.visible_group);
        self.set_mode(config.mode())
    }
}
