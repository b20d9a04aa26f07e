pub mod line_series;
pub mod record;
pub mod scale;
pub mod scale_set;
pub mod stem_series;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use line_series::{CARDINAL_TENSION, CurveSegment, project_cardinal_curve};
pub use record::{ChartGroup, Record, SeriesKind, Timeline};
pub use scale::LinearScale;
pub use scale_set::{Mode, ScaleSet, effective_max};
pub use stem_series::{Stem, project_stems};
pub use time_scale::{
    TIME_AXIS_TARGET_TICKS, TimeScale, TimeTick, TimeTickCadence, date_to_day_number,
    day_number_to_date,
};
pub use types::{Margins, PanelGeometry, Viewport};
pub use value_scale::{
    DOMAIN_HEADROOM, LINEAR_TICK_COUNT, LOG_FLOOR, ValueScale, ValueScaleKind, ValueTicks,
};
