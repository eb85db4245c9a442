use chrono::NaiveDate;
use price_chart_engine::domain::chart::{
    AxisId, AxisPosition, ChartKind, ChartOptions, ChartOutcome, TimeUnit, ValueField,
};
use price_chart_engine::domain::market_data::{
    Granularity, OHLCV, Price, Sample, Series, Symbol, Timestamp, Volume,
};
use price_chart_engine::build_chart;

fn make_sample(day: u32, close: f64, volume: u64) -> Sample {
    let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
    let ts = date.and_hms_opt(14, 30, 0).unwrap().and_utc().timestamp_millis() as u64;
    Sample::new(
        Timestamp::from_millis(ts),
        date.format("%Y-%m-%d").to_string(),
        OHLCV::new(
            Price::from(close - 1.0),
            Price::from(close + 2.0),
            Price::from(close - 2.0),
            Price::from(close),
            Volume::from(volume),
        ),
    )
}

fn series(days: u32) -> Series {
    let samples = (1..=days).map(|d| make_sample(d, 100.0 + f64::from(d), 1_000 * u64::from(d))).collect();
    Series::new(Symbol::new("aapl").unwrap(), "USD", samples).unwrap()
}

#[test]
fn bar_with_volume_on_single_sample() {
    let options = ChartOptions::default().with_kind(ChartKind::Bar).with_volume(true);
    let outcome = build_chart(&series(1), &options);
    let spec = outcome.spec().unwrap();

    assert_eq!(spec.labels, vec!["2024-06-01".to_string()]);
    assert_eq!(spec.datasets.len(), 2);
    assert_eq!(spec.datasets[0].kind, ChartKind::Bar);
    assert_eq!(spec.datasets[1].name, "Volume");
    assert_eq!(spec.datasets[1].kind, ChartKind::Bar);
}

#[test]
fn empty_series_is_no_data() {
    let empty = Series::empty(Symbol::new("AAPL").unwrap(), "USD");
    assert_eq!(build_chart(&empty, &ChartOptions::default()), ChartOutcome::NoData);
}

#[test]
fn identical_inputs_build_identical_specs() {
    let s = series(30);
    let options = ChartOptions::default();
    assert_eq!(build_chart(&s, &options), build_chart(&s, &options));
}

#[test]
fn primary_dataset_names_symbol_and_field() {
    let options = ChartOptions::default().with_value_field(ValueField::High).with_volume(false);
    let outcome = build_chart(&series(3), &options);
    let primary = &outcome.spec().unwrap().datasets[0];

    assert_eq!(primary.name, "AAPL High Price");
    assert_eq!(primary.axis, AxisId::Price);
    assert_eq!(primary.values, vec![Some(103.0), Some(104.0), Some(105.0)]);
}

#[test]
fn line_overlays_follow_ascending_windows_without_markers() {
    let options = ChartOptions::default().with_indicators([5, 2]);
    let outcome = build_chart(&series(6), &options);
    let spec = outcome.spec().unwrap();

    let names: Vec<_> = spec.datasets.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["AAPL Close Price", "Volume", "SMA 2", "SMA 5"]);

    let sma2 = spec.dataset("SMA 2").unwrap();
    assert_eq!(sma2.values[0], None);
    assert_eq!(sma2.values[1], Some(101.5));
    assert_eq!(sma2.axis, AxisId::Price);
    assert_eq!(sma2.style.point_radius, 0.0);
}

#[test]
fn window_longer_than_series_degrades_to_absent() {
    let options = ChartOptions::default().with_indicators([50]);
    let outcome = build_chart(&series(4), &options);
    let sma = outcome.spec().unwrap().dataset("SMA 50").unwrap();
    assert_eq!(sma.values, vec![None; 4]);
}

#[test]
fn bar_kind_drops_overlays() {
    let options = ChartOptions::default().with_kind(ChartKind::Bar).with_volume(false);
    let outcome = build_chart(&series(60), &options);
    assert_eq!(outcome.spec().unwrap().datasets.len(), 1);
}

#[test]
fn axis_policy() {
    let outcome = build_chart(&series(2), &ChartOptions::default());
    let axes = &outcome.spec().unwrap().axes;

    let price = axes.price.as_ref().unwrap();
    assert_eq!(price.position, AxisPosition::Left);
    assert_eq!(price.title, "Price (USD)");

    let volume = axes.volume.as_ref().unwrap();
    assert_eq!(volume.position, AxisPosition::Right);
    assert!(!volume.grid_on_chart_area);
    assert!(axes.indicator.is_none());
}

#[test]
fn hidden_volume_removes_axis() {
    let outcome = build_chart(&series(2), &ChartOptions::default().with_volume(false));
    assert!(outcome.spec().unwrap().axes.volume.is_none());
}

#[test]
fn time_unit_follows_query_granularity() {
    let s = series(2);
    let cases = [
        (Granularity::Minute, TimeUnit::Hour, "14:30"),
        (Granularity::Day, TimeUnit::Day, "Jun 1"),
        (Granularity::Week, TimeUnit::Month, "Jun 2024"),
        (Granularity::Year, TimeUnit::Year, "2024"),
    ];
    for (granularity, unit, first_tick) in cases {
        let options = ChartOptions::default().with_granularity(granularity);
        let outcome = build_chart(&s, &options);
        let spec = outcome.spec().unwrap();
        assert_eq!(spec.axes.time.unit, unit);
        assert_eq!(spec.tick_labels[0], first_tick);
    }
}

#[test]
fn tooltip_formats_by_axis() {
    let s = Series::new(
        Symbol::new("MSFT").unwrap(),
        "USD",
        vec![make_sample(3, 189.846, 12_345_678)],
    )
    .unwrap();
    let outcome = build_chart(&s, &ChartOptions::default());
    let tooltip = outcome.spec().unwrap().tooltip(0).unwrap();

    insta::assert_snapshot!(tooltip.lines.join(" / "), @"MSFT Close Price: $189.85 / Volume: 12,345,678");
    assert_eq!(tooltip.title, "2024-06-03");
}

#[test]
fn title_spans_series_dates() {
    let outcome = build_chart(&series(5), &ChartOptions::default());
    insta::assert_snapshot!(&outcome.spec().unwrap().title, @"AAPL Stock Chart - 2024-06-01 to 2024-06-05");
}
