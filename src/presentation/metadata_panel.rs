use crate::domain::chart::format::{format_fixed, format_percent, group_thousands};
use crate::domain::market_data::Series;
use serde::Serialize;

/// Colour cue for the change figures. Zero change counts as negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    pub fn from_change_percent(change_percent: f64) -> Self {
        if change_percent > 0.0 { Self::Positive } else { Self::Negative }
    }
}

/// Pre-formatted summary shown next to a stock chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPanel {
    pub current_price: String,
    pub change: String,
    pub change_percent: String,
    pub average_volume: String,
    pub date_range: String,
    pub data_points: usize,
    pub trend: Trend,
}

impl MetadataPanel {
    /// `None` for a series without samples.
    pub fn from_series(series: &Series, currency_prefix: &str) -> Option<Self> {
        let meta = series.metadata()?;
        let prices = &meta.price_range;
        Some(Self {
            current_price: format!("{}{}", currency_prefix, format_fixed(prices.current, 2)),
            change: format!("{}{}", currency_prefix, format_fixed(prices.change, 2)),
            change_percent: format_percent(prices.change_percent),
            average_volume: group_thousands(meta.volume_range.average),
            date_range: format!("{} to {}", meta.time_range.start, meta.time_range.end),
            data_points: meta.total_data_points,
            trend: Trend::from_change_percent(prices.change_percent),
        })
    }
}
