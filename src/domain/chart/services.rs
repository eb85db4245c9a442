use super::entities::{Axes, ChartOptions, ChartOutcome, ChartSpec, Dataset, TimeAxis, ValueAxis};
use super::value_objects::{
    AxisId, AxisPosition, ChartKind, DatasetStyle, Palette, TimeUnit, ValueFormat,
};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{EconomicPoint, Granularity, Series, moving_averages};
use crate::time_utils::{format_time_label, parse_date_label};

pub const DEFAULT_ECONOMIC_TITLE: &str = "Economic Indicator";

/// Dataset label used when the points carry no indicator name.
pub const DEFAULT_INDICATOR_NAME: &str = "Value";

/// Domain service turning series and toggles into a [`ChartSpec`].
///
/// Stateless apart from its styling configuration; equal inputs always
/// produce equal outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAssembler {
    palette: Palette,
    currency_prefix: String,
}

impl Default for ChartAssembler {
    fn default() -> Self {
        Self { palette: Palette::default(), currency_prefix: "$".to_string() }
    }
}

impl ChartAssembler {
    pub fn new(palette: Palette, currency_prefix: impl Into<String>) -> Self {
        Self { palette, currency_prefix: currency_prefix.into() }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn build_chart(&self, series: &Series, options: &ChartOptions) -> ChartOutcome {
        let samples = series.samples();
        if samples.is_empty() {
            crate::log_debug!(
                LogComponent::Domain("ChartAssembler"),
                "{} has no samples, returning no-data sentinel",
                series.symbol()
            );
            return ChartOutcome::NoData;
        }

        let unit = TimeUnit::for_granularity(options.granularity);
        let labels: Vec<String> = samples.iter().map(|s| s.date.clone()).collect();
        let tick_labels = samples.iter().map(|s| format_time_label(s.timestamp.value(), unit)).collect();

        let mut datasets = Vec::with_capacity(2 + options.indicators.len());
        datasets.push(Dataset {
            name: format!("{} {} Price", series.symbol(), options.value_field),
            values: samples.iter().map(|s| Some(options.value_field.value_of(s))).collect(),
            axis: AxisId::Price,
            style: DatasetStyle::primary(self.palette.price),
            kind: options.kind,
        });

        if options.show_volume {
            datasets.push(Dataset {
                name: "Volume".to_string(),
                values: samples.iter().map(|s| Some(s.volume() as f64)).collect(),
                axis: AxisId::Volume,
                style: DatasetStyle::volume(self.palette.volume),
                kind: ChartKind::Bar,
            });
        }

        if options.kind == ChartKind::Line && !options.indicators.is_empty() {
            let windows: Vec<usize> = options.indicators.iter().copied().collect();
            for (i, (window, values)) in moving_averages(samples, &windows).into_iter().enumerate() {
                datasets.push(Dataset {
                    name: format!("SMA {}", window),
                    values,
                    axis: AxisId::Price,
                    style: DatasetStyle::overlay(self.palette.overlay(i)),
                    kind: ChartKind::Line,
                });
            }
        }

        let price_axis = ValueAxis {
            id: AxisId::Price,
            position: AxisPosition::Left,
            title: format!("Price ({})", series.unit()),
            grid_on_chart_area: true,
            begin_at_zero: false,
            format: ValueFormat::price(&self.currency_prefix),
        };
        let volume_axis = options.show_volume.then(|| ValueAxis {
            id: AxisId::Volume,
            position: AxisPosition::Right,
            title: "Volume".to_string(),
            grid_on_chart_area: false,
            begin_at_zero: true,
            format: ValueFormat::Grouped,
        });

        let title = match series.metadata() {
            Some(meta) => format!(
                "{} Stock Chart - {} to {}",
                series.symbol(),
                meta.time_range.start,
                meta.time_range.end
            ),
            None => format!("{} Stock Chart", series.symbol()),
        };

        ChartOutcome::Ready(ChartSpec {
            title,
            labels,
            tick_labels,
            datasets,
            axes: Axes {
                price: Some(price_axis),
                volume: volume_axis,
                indicator: None,
                time: TimeAxis::new(unit),
            },
        })
    }

    /// Single filled line on the indicator axis, bucketed by month.
    pub fn build_economic_chart(&self, points: &[EconomicPoint], title: Option<&str>) -> ChartOutcome {
        let Some(first) = points.first() else {
            return ChartOutcome::NoData;
        };

        let unit_label = first.unit.clone().unwrap_or_default();
        let indicator = match first.indicator.trim() {
            "" => DEFAULT_INDICATOR_NAME,
            named => named,
        };
        let name = format!("{} ({})", indicator, unit_label);
        let time_unit = TimeUnit::for_granularity(Granularity::Month);

        let labels: Vec<String> = points.iter().map(|p| p.date.clone()).collect();
        let tick_labels = points
            .iter()
            .map(|p| match parse_date_label(&p.date) {
                Some(ts) => format_time_label(ts, time_unit),
                None => p.date.clone(),
            })
            .collect();

        let dataset = Dataset {
            name: name.clone(),
            values: points.iter().map(|p| Some(p.value)).collect(),
            axis: AxisId::Indicator,
            style: DatasetStyle::filled_area(self.palette.indicator),
            kind: ChartKind::Line,
        };

        ChartOutcome::Ready(ChartSpec {
            title: title.unwrap_or(DEFAULT_ECONOMIC_TITLE).to_string(),
            labels,
            tick_labels,
            datasets: vec![dataset],
            axes: Axes {
                price: None,
                volume: None,
                indicator: Some(ValueAxis {
                    id: AxisId::Indicator,
                    position: AxisPosition::Left,
                    title: name,
                    grid_on_chart_area: true,
                    begin_at_zero: false,
                    format: ValueFormat::with_unit(&unit_label),
                }),
                time: TimeAxis::new(time_unit),
            },
        })
    }
}

/// [`ChartAssembler::build_chart`] with the default palette.
pub fn build_chart(series: &Series, options: &ChartOptions) -> ChartOutcome {
    ChartAssembler::default().build_chart(series, options)
}

/// [`ChartAssembler::build_economic_chart`] with the default palette.
pub fn build_economic_chart(points: &[EconomicPoint], title: Option<&str>) -> ChartOutcome {
    ChartAssembler::default().build_economic_chart(points, title)
}
