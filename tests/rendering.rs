use price_chart_engine::domain::chart::{ChartOptions, ChartOutcome};
use price_chart_engine::domain::errors::RenderingError;
use price_chart_engine::domain::market_data::{
    OHLCV, Price, Sample, Series, Symbol, Timestamp, Volume,
};
use price_chart_engine::infrastructure::rendering::{
    self, ChartJsRenderer, ChartRenderer, NO_DATA_MESSAGE, RenderOutput, TextRenderer,
};
use price_chart_engine::build_chart;
use serde_json::Value;

fn make_sample(i: u64, close: f64, volume: u64) -> Sample {
    Sample::new(
        Timestamp::from_millis(1_718_000_000_000 + i * 86_400_000),
        format!("2024-06-{:02}", 10 + i),
        OHLCV::new(
            Price::from(close),
            Price::from(close + 1.0),
            Price::from(close - 1.0),
            Price::from(close),
            Volume::from(volume),
        ),
    )
}

fn outcome() -> ChartOutcome {
    let series = Series::new(
        Symbol::new("AMD").unwrap(),
        "USD",
        vec![make_sample(0, 150.0, 1_200_000), make_sample(1, 152.5, 980_000), make_sample(2, 151.25, 1_050_500)],
    )
    .unwrap();
    build_chart(&series, &ChartOptions::default().with_indicators([2]))
}

#[test]
fn text_table_row() {
    let output = TextRenderer::new().render(&outcome()).unwrap();
    let lines: Vec<&str> = output.body().lines().collect();

    assert_eq!(lines[0], "AMD Stock Chart - 2024-06-10 to 2024-06-12");
    assert_eq!(lines[1], "Date | AMD Close Price | Volume | SMA 2");
    insta::assert_snapshot!(lines[3], @"2024-06-11 | $152.50 | 980,000 | $151.25");
}

#[test]
fn chartjs_document_is_valid_json() {
    let output = ChartJsRenderer::pretty().render(&outcome()).unwrap();
    let config: Value = match &output {
        RenderOutput::Document(body) => serde_json::from_str(body).unwrap(),
        RenderOutput::Placeholder(_) => panic!("expected a document"),
    };

    assert_eq!(config["type"], "line");
    assert_eq!(config["options"]["plugins"]["title"]["text"], "AMD Stock Chart - 2024-06-10 to 2024-06-12");
    assert_eq!(config["options"]["scales"]["x"]["time"]["unit"], "day");
    assert_eq!(config["options"]["scales"]["y"]["position"], "left");
    assert_eq!(config["data"]["labels"].as_array().unwrap().len(), 3);
}

#[test]
fn both_renderers_show_placeholder_for_no_data() {
    let renderers: [&dyn ChartRenderer; 2] = [&ChartJsRenderer::new(), &TextRenderer::new()];
    for renderer in renderers {
        let output = renderer.render(&ChartOutcome::NoData).unwrap();
        assert_eq!(output, RenderOutput::Placeholder(NO_DATA_MESSAGE.to_string()));
    }
}

#[test]
fn registry_lookup() {
    rendering::clear_renderers();
    assert!(matches!(rendering::renderer("text"), Err(RenderingError::UnknownRenderer(_))));

    rendering::register_defaults();
    assert_eq!(rendering::renderer_names(), ["chartjs", "text"]);
    assert_eq!(rendering::renderer("chartjs").unwrap().name(), "chartjs");

    rendering::clear_renderers();
    assert!(rendering::renderer_names().is_empty());
}
