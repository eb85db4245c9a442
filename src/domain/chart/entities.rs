use super::value_objects::{
    AxisId, AxisPosition, ChartKind, DatasetStyle, TimeUnit, ValueField, ValueFormat,
};
use crate::domain::market_data::{Granularity, IndicatorPoint, ResolvedQuery};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Display toggles owned by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub kind: ChartKind,
    pub value_field: ValueField,
    pub show_volume: bool,
    /// Moving-average windows; overlays are emitted in ascending order.
    pub indicators: BTreeSet<usize>,
    /// Granularity of the query that produced the series.
    pub granularity: Granularity,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            kind: ChartKind::Line,
            value_field: ValueField::Close,
            show_volume: true,
            indicators: BTreeSet::from([20, 50]),
            granularity: Granularity::Day,
        }
    }
}

impl ChartOptions {
    pub fn for_query(query: &ResolvedQuery) -> Self {
        Self { granularity: query.granularity, ..Self::default() }
    }

    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_value_field(mut self, value_field: ValueField) -> Self {
        self.value_field = value_field;
        self
    }

    pub fn with_volume(mut self, show_volume: bool) -> Self {
        self.show_volume = show_volume;
        self
    }

    pub fn with_indicators(mut self, windows: impl IntoIterator<Item = usize>) -> Self {
        self.indicators = windows.into_iter().collect();
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }
}

/// One drawable series of values aligned with the chart labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub name: String,
    pub values: Vec<IndicatorPoint>,
    pub axis: AxisId,
    pub style: DatasetStyle,
    pub kind: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxis {
    pub id: AxisId,
    pub position: AxisPosition,
    pub title: String,
    /// `false` makes the axis overlay the plot instead of drawing its own grid.
    pub grid_on_chart_area: bool,
    pub begin_at_zero: bool,
    pub format: ValueFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeAxis {
    pub unit: TimeUnit,
    pub title: String,
    pub display_format: String,
    pub tooltip_format: String,
}

impl TimeAxis {
    pub fn new(unit: TimeUnit) -> Self {
        Self {
            unit,
            title: "Date".to_string(),
            display_format: unit.display_format().to_string(),
            tooltip_format: unit.tooltip_format().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axes {
    pub price: Option<ValueAxis>,
    pub volume: Option<ValueAxis>,
    pub indicator: Option<ValueAxis>,
    pub time: TimeAxis,
}

impl Axes {
    pub fn get(&self, id: AxisId) -> Option<&ValueAxis> {
        match id {
            AxisId::Price => self.price.as_ref(),
            AxisId::Volume => self.volume.as_ref(),
            AxisId::Indicator => self.indicator.as_ref(),
        }
    }

    pub fn value_axes(&self) -> impl Iterator<Item = &ValueAxis> {
        [self.price.as_ref(), self.volume.as_ref(), self.indicator.as_ref()].into_iter().flatten()
    }
}

/// Tooltip contents for one label index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<String>,
}

/// Immutable, fully assembled render contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub labels: Vec<String>,
    /// Tick text per label, bucketed by the time axis unit.
    pub tick_labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub axes: Axes,
}

impl ChartSpec {
    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.name == name)
    }

    /// Index-mode tooltip: every dataset with a value at `index`.
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let title = self.labels.get(index)?.clone();
        let lines = self
            .datasets
            .iter()
            .filter_map(|dataset| {
                let value = (*dataset.values.get(index)?)?;
                let formatted = match self.axes.get(dataset.axis) {
                    Some(axis) => axis.format.format(value),
                    None => value.to_string(),
                };
                Some(format!("{}: {}", dataset.name, formatted))
            })
            .collect();
        Some(Tooltip { title, lines })
    }
}

/// Result of a chart build: a [`ChartSpec`], or the sentinel for "nothing to plot".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "chart", rename_all = "snake_case")]
pub enum ChartOutcome {
    Ready(ChartSpec),
    NoData,
}

impl ChartOutcome {
    pub fn spec(&self) -> Option<&ChartSpec> {
        match self {
            Self::Ready(spec) => Some(spec),
            Self::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}
