//! Rendering adapters turning a [`ChartOutcome`] into something displayable.
//!
//! Adapters never compute values; everything they print comes from the `ChartSpec`.

pub mod chartjs;
pub mod registry;
pub mod text;

use crate::domain::chart::ChartOutcome;
use crate::domain::errors::RenderingResult;
use serde::Serialize;

pub use chartjs::ChartJsRenderer;
pub use registry::{clear_renderers, register_defaults, register_renderer, renderer, renderer_names};
pub use text::TextRenderer;

/// Message shown in place of a chart when there is nothing to plot.
pub const NO_DATA_MESSAGE: &str = "No chart data available";

/// What a renderer produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum RenderOutput {
    Document(String),
    Placeholder(String),
}

impl RenderOutput {
    pub fn body(&self) -> &str {
        match self {
            Self::Document(body) | Self::Placeholder(body) => body,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Seam between the chart assembler and a concrete drawing backend.
pub trait ChartRenderer: Send + Sync {
    fn name(&self) -> &'static str;

    fn render(&self, outcome: &ChartOutcome) -> RenderingResult<RenderOutput>;
}
