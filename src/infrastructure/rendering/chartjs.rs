use super::{ChartRenderer, NO_DATA_MESSAGE, RenderOutput};
use crate::domain::chart::{ChartOutcome, ChartSpec, Color, Dataset, TimeAxis, ValueAxis};
use crate::domain::errors::{RenderingError, RenderingResult};
use crate::domain::logging::LogComponent;
use serde_json::{Map, Value, json};

/// Emits a Chart.js configuration object as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsRenderer {
    pretty: bool,
}

impl ChartJsRenderer {
    pub const NAME: &'static str = "chartjs";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Build the configuration value without serialising it.
    pub fn config(&self, spec: &ChartSpec) -> Value {
        let kind = spec.datasets.first().map(|d| d.kind).unwrap_or_default();
        let chart_type: &str = kind.as_ref();

        let mut scales = Map::new();
        scales.insert("x".to_string(), time_scale(&spec.axes.time));
        for axis in spec.axes.value_axes() {
            scales.insert(axis.id.to_string(), value_scale(axis));
        }

        json!({
            "type": chart_type,
            "data": {
                "labels": spec.labels,
                "datasets": spec.datasets.iter().map(dataset).collect::<Vec<_>>(),
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "interaction": { "mode": "index", "intersect": false },
                "plugins": {
                    "legend": { "position": "top" },
                    "title": { "display": true, "text": spec.title },
                },
                "scales": scales,
            },
        })
    }
}

fn css(color: Color) -> String {
    if color.a < 1.0 { color.to_css_rgba() } else { color.to_css_hex() }
}

fn dataset(dataset: &Dataset) -> Value {
    let style = &dataset.style;
    let kind: &str = dataset.kind.as_ref();
    json!({
        "type": kind,
        "label": dataset.name,
        "data": dataset.values,
        "yAxisID": dataset.axis.to_string(),
        "borderColor": css(style.border_color),
        "backgroundColor": css(style.background_color),
        "borderWidth": style.border_width,
        "pointRadius": style.point_radius,
        "pointHoverRadius": style.point_hover_radius,
        "tension": style.tension,
        "fill": style.fill,
    })
}

fn time_scale(axis: &TimeAxis) -> Value {
    let mut display_formats = Map::new();
    display_formats.insert(axis.unit.to_string(), Value::from(axis.display_format.clone()));
    json!({
        "type": "time",
        "time": {
            "unit": axis.unit.to_string(),
            "tooltipFormat": axis.tooltip_format,
            "displayFormats": display_formats,
        },
        "title": { "display": true, "text": axis.title },
    })
}

fn value_scale(axis: &ValueAxis) -> Value {
    let position: &str = axis.position.as_ref();
    json!({
        "type": "linear",
        "display": true,
        "position": position,
        "beginAtZero": axis.begin_at_zero,
        "title": { "display": true, "text": axis.title },
        "grid": { "drawOnChartArea": axis.grid_on_chart_area },
        "format": axis.format,
    })
}

impl ChartRenderer for ChartJsRenderer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn render(&self, outcome: &ChartOutcome) -> RenderingResult<RenderOutput> {
        let Some(spec) = outcome.spec() else {
            return Ok(RenderOutput::Placeholder(NO_DATA_MESSAGE.to_string()));
        };

        let config = self.config(spec);
        let body = if self.pretty {
            serde_json::to_string_pretty(&config)
        } else {
            serde_json::to_string(&config)
        }
        .map_err(|e| RenderingError::Serialization(e.to_string()))?;

        crate::log_trace!(
            LogComponent::Infrastructure("ChartJs"),
            "rendered '{}' with {} datasets",
            spec.title,
            spec.datasets.len()
        );
        Ok(RenderOutput::Document(body))
    }
}
