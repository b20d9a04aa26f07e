use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use timeseries_chart::core::{
    DOMAIN_HEADROOM, Mode, PanelGeometry, Record, ScaleSet, SeriesKind, Timeline, ValueScale,
};
use timeseries_chart::interaction::IndexScale;

fn timeline(start_offset: u64, counters: &[u32]) -> Timeline {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1)
        .expect("valid date")
        .checked_add_days(Days::new(start_offset))
        .expect("start date");
    let mut total = 0u64;
    let records = counters
        .iter()
        .enumerate()
        .map(|(i, &daily)| {
            total += u64::from(daily);
            Record {
                date: start
                    .checked_add_days(Days::new(i as u64))
                    .expect("record date"),
                total_confirmed: total,
                total_recovered: total / 2,
                total_deceased: total / 50,
                daily_confirmed: u64::from(daily),
                daily_recovered: u64::from(daily / 2),
                daily_deceased: u64::from(daily / 50),
            }
        })
        .collect();
    Timeline::new(records).expect("valid timeline")
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    (any::<bool>(), any::<bool>()).prop_map(|(shared, log)| Mode::new(shared, log))
}

proptest! {
    #[test]
    fn time_domain_is_padded_by_one_day_each_side(
        start_offset in 0u64..1_500,
        counters in prop::collection::vec(0u32..50_000, 2..300),
    ) {
        let timeline = timeline(start_offset, &counters);
        let scales = ScaleSet::build(&timeline, Mode::default(), PanelGeometry::STANDARD)
            .expect("scales");
        let (start, end) = scales.time().domain();

        prop_assert_eq!(start.succ_opt(), Some(timeline.first().date));
        prop_assert_eq!(end.pred_opt(), Some(timeline.last().date));

        let (left, right) = PanelGeometry::STANDARD.x_range();
        for record in timeline.records() {
            let x = scales.x(record).expect("x");
            prop_assert!(x > left && x < right);
        }
    }

    #[test]
    fn every_value_lands_inside_the_plot(
        counters in prop::collection::vec(0u32..1_000_000, 2..120),
        mode in mode_strategy(),
    ) {
        let timeline = timeline(0, &counters);
        let scales = ScaleSet::build(&timeline, mode, PanelGeometry::STANDARD).expect("scales");
        let (bottom, top) = PanelGeometry::STANDARD.y_range();

        for series in SeriesKind::ALL {
            for record in timeline.records() {
                let y = scales.y(series, record).expect("y");
                prop_assert!(y <= bottom + 1e-9 && y >= top - 1e-9);
            }
        }
    }

    #[test]
    fn linear_domain_keeps_headroom_above_the_maximum(max in 0u64..5_000_000_000) {
        let scale = ValueScale::linear(max as f64, (140.0, 0.0)).expect("linear");
        let (start, end) = scale.domain();
        prop_assert_eq!(start, 0.0);
        prop_assert!(end >= max as f64 * DOMAIN_HEADROOM - 1e-6);
    }

    #[test]
    fn log_lookup_clamps_zero_to_one(max in 0u64..5_000_000_000) {
        let scale = ValueScale::log(max as f64, (140.0, 0.0)).expect("log");
        prop_assert_eq!(scale.lookup(0).expect("zero"), scale.lookup(1).expect("one"));
        prop_assert_eq!(scale.lookup(1).expect("one"), 140.0);
        prop_assert!(scale.domain().1 >= 10.0);

        let ticks = scale.ticks();
        prop_assert!(!ticks.is_empty());
        for tick in ticks {
            let exponent = tick.log10().round() as i32;
            prop_assert_eq!(tick, 10f64.powi(exponent));
        }
    }

    #[test]
    fn index_pixels_invert_to_the_same_index(len in 2usize..1_000, pick in any::<prop::sample::Index>()) {
        let scale = IndexScale::new(len, PanelGeometry::STANDARD).expect("index scale");
        let index = pick.index(len);
        let x = scale.index_to_pixel(index).expect("pixel");
        prop_assert_eq!(scale.index_at(x), Some(index));
    }

    #[test]
    fn index_lookup_is_monotonic(len in 2usize..500, a in 20.0f64..605.0, b in 20.0f64..605.0) {
        let scale = IndexScale::new(len, PanelGeometry::STANDARD).expect("index scale");
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if let (Some(i), Some(j)) = (scale.index_at(low), scale.index_at(high)) {
            prop_assert!(i <= j);
        }
    }

    #[test]
    fn rebuilding_with_the_same_inputs_is_idempotent(
        counters in prop::collection::vec(0u32..100_000, 2..60),
        mode in mode_strategy(),
    ) {
        let timeline = timeline(10, &counters);
        let first = ScaleSet::build(&timeline, mode, PanelGeometry::STANDARD).expect("first");
        let second = ScaleSet::build(&timeline, mode, PanelGeometry::STANDARD).expect("second");
        prop_assert_eq!(first, second);
    }
}
