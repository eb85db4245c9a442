use price_chart_engine::build_economic_chart;
use price_chart_engine::domain::chart::{AxisId, ChartOutcome, TimeUnit};
use price_chart_engine::domain::market_data::EconomicPoint;

fn inflation() -> Vec<EconomicPoint> {
    vec![
        EconomicPoint::new("2024-01-01", 3.1, "Inflation Rate").with_unit("%"),
        EconomicPoint::new("2024-02-01", 3.2, "Inflation Rate").with_unit("%"),
        EconomicPoint::new("2024-03-01", 3.5, "Inflation Rate").with_unit("%"),
    ]
}

#[test]
fn single_filled_line_on_indicator_axis() {
    let outcome = build_economic_chart(&inflation(), Some("US Inflation"));
    let spec = outcome.spec().unwrap();

    assert_eq!(spec.title, "US Inflation");
    assert_eq!(spec.datasets.len(), 1);
    let dataset = &spec.datasets[0];
    assert_eq!(dataset.name, "Inflation Rate (%)");
    assert_eq!(dataset.axis, AxisId::Indicator);
    assert!(dataset.style.fill);
    assert!(spec.axes.price.is_none());
}

#[test]
fn month_ticks_and_unit_suffix() {
    let outcome = build_economic_chart(&inflation(), None);
    let spec = outcome.spec().unwrap();

    assert_eq!(spec.title, "Economic Indicator");
    assert_eq!(spec.axes.time.unit, TimeUnit::Month);
    assert_eq!(spec.tick_labels, ["Jan 2024", "Feb 2024", "Mar 2024"]);

    let axis = spec.axes.indicator.as_ref().unwrap();
    assert_eq!(axis.format.format(3.5), "3.50%");
}

#[test]
fn unparseable_dates_keep_raw_label() {
    let points = vec![EconomicPoint::new("Q1 2024", 1.2, "GDP Growth")];
    let outcome = build_economic_chart(&points, None);
    assert_eq!(outcome.spec().unwrap().tick_labels, ["Q1 2024"]);
}

#[test]
fn no_points_is_no_data() {
    assert_eq!(build_economic_chart(&[], Some("GDP")), ChartOutcome::NoData);
}

#[test]
fn unnamed_indicator_is_labelled_value() {
    let points = vec![EconomicPoint::new("2024-01-01", 4.0, "  ").with_unit("%")];
    let outcome = build_economic_chart(&points, None);
    let spec = outcome.spec().unwrap();
    assert_eq!(spec.datasets[0].name, "Value (%)");
    assert_eq!(spec.axes.indicator.as_ref().unwrap().title, "Value (%)");
}
