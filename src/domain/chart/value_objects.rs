use super::format::{format_fixed, group_thousands};
use crate::domain::market_data::{Granularity, Sample};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - how the primary series is drawn
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Bar")]
    #[strum(serialize = "bar")]
    Bar,
}

/// Value Object - which OHLC field feeds the primary dataset
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ValueField {
    #[display(fmt = "Open")]
    #[strum(serialize = "open")]
    Open,
    #[display(fmt = "High")]
    #[strum(serialize = "high")]
    High,
    #[display(fmt = "Low")]
    #[strum(serialize = "low")]
    Low,
    #[default]
    #[display(fmt = "Close")]
    #[strum(serialize = "close")]
    Close,
}

impl ValueField {
    pub fn value_of(&self, sample: &Sample) -> f64 {
        let ohlcv = &sample.ohlcv;
        match self {
            Self::Open => ohlcv.open.value(),
            Self::High => ohlcv.high.value(),
            Self::Low => ohlcv.low.value(),
            Self::Close => ohlcv.close.value(),
        }
    }
}

/// Identifier a dataset uses to attach to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize)]
pub enum AxisId {
    #[display(fmt = "y")]
    #[strum(serialize = "y")]
    #[serde(rename = "y")]
    Price,
    #[display(fmt = "volume")]
    #[strum(serialize = "volume")]
    #[serde(rename = "volume")]
    Volume,
    #[display(fmt = "y-value")]
    #[strum(serialize = "y-value")]
    #[serde(rename = "y-value")]
    Indicator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "right")]
    Right,
    #[strum(serialize = "bottom")]
    Bottom,
}

/// Tick bucketing unit of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[display(fmt = "hour")]
    #[strum(serialize = "hour")]
    Hour,
    #[display(fmt = "day")]
    #[strum(serialize = "day")]
    Day,
    #[display(fmt = "month")]
    #[strum(serialize = "month")]
    Month,
    #[display(fmt = "year")]
    #[strum(serialize = "year")]
    Year,
}

impl TimeUnit {
    /// The display unit always follows the granularity the data was queried with.
    pub fn for_granularity(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Minute => Self::Hour,
            Granularity::Day => Self::Day,
            Granularity::Week | Granularity::Month => Self::Month,
            Granularity::Year => Self::Year,
        }
    }

    /// date-fns style pattern handed to renderers for tick labels.
    pub fn display_format(&self) -> &'static str {
        match self {
            Self::Hour => "HH:mm",
            Self::Day => "MMM d",
            Self::Month => "MMM yyyy",
            Self::Year => "yyyy",
        }
    }

    pub fn tooltip_format(&self) -> &'static str {
        match self {
            Self::Hour => "MMM d, HH:mm",
            Self::Day => "MMM d, yyyy",
            Self::Month => "MMM yyyy",
            Self::Year => "yyyy",
        }
    }
}

/// How values on an axis (and in tooltips) are printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum ValueFormat {
    Fixed { decimals: usize, prefix: String, suffix: String },
    Grouped,
}

impl ValueFormat {
    pub fn price(prefix: &str) -> Self {
        Self::Fixed { decimals: 2, prefix: prefix.to_string(), suffix: String::new() }
    }

    pub fn with_unit(unit: &str) -> Self {
        Self::Fixed { decimals: 2, prefix: String::new(), suffix: unit.to_string() }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Fixed { decimals, prefix, suffix } => {
                format!("{}{}{}", prefix, format_fixed(value, *decimals), suffix)
            }
            Self::Grouped => group_thousands(value),
        }
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r * 255.0).round() as u32;
        let g = (self.g * 255.0).round() as u32;
        let b = (self.b * 255.0).round() as u32;
        (r << 16) | (g << 8) | b
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// `#RRGGBB`, alpha ignored.
    pub fn to_css_hex(&self) -> String {
        format!("#{:06X}", self.to_hex())
    }

    /// `rgba(r, g, b, a)` for translucent fills.
    pub fn to_css_rgba(&self) -> String {
        let hex = self.to_hex();
        format!("rgba({}, {}, {}, {})", (hex >> 16) & 0xFF, (hex >> 8) & 0xFF, hex & 0xFF, self.a)
    }

    pub fn parse_css_hex(value: &str) -> Option<Self> {
        let digits = value.trim().strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    pub const BLUE_500: Color = Color { r: 59.0 / 255.0, g: 130.0 / 255.0, b: 246.0 / 255.0, a: 1.0 };
    pub const GRAY_400: Color = Color { r: 156.0 / 255.0, g: 163.0 / 255.0, b: 175.0 / 255.0, a: 1.0 };
    pub const RED_500: Color = Color { r: 239.0 / 255.0, g: 68.0 / 255.0, b: 68.0 / 255.0, a: 1.0 };
    pub const YELLOW_500: Color = Color { r: 234.0 / 255.0, g: 179.0 / 255.0, b: 8.0 / 255.0, a: 1.0 };
    pub const GREEN_500: Color = Color { r: 16.0 / 255.0, g: 185.0 / 255.0, b: 129.0 / 255.0, a: 1.0 };
    pub const VIOLET_500: Color = Color { r: 139.0 / 255.0, g: 92.0 / 255.0, b: 246.0 / 255.0, a: 1.0 };
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_css_hex(&value).ok_or_else(|| format!("expected #RRGGBB colour, got '{}'", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css_hex()
    }
}

/// Colours assigned to datasets, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub price: Color,
    pub volume: Color,
    pub indicator: Color,
    /// Cycled through for moving-average overlays.
    pub overlays: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            price: Color::BLUE_500,
            volume: Color::GRAY_400,
            indicator: Color::GREEN_500,
            overlays: vec![Color::RED_500, Color::YELLOW_500, Color::VIOLET_500],
        }
    }
}

impl Palette {
    pub fn overlay(&self, index: usize) -> Color {
        if self.overlays.is_empty() {
            return self.price;
        }
        self.overlays[index % self.overlays.len()]
    }
}

/// Per-dataset drawing style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStyle {
    pub border_color: Color,
    pub background_color: Color,
    pub border_width: f32,
    pub point_radius: f32,
    pub point_hover_radius: f32,
    pub tension: f32,
    pub fill: bool,
}

impl DatasetStyle {
    pub fn primary(color: Color) -> Self {
        Self {
            border_color: color,
            background_color: color,
            border_width: 1.5,
            point_radius: 1.0,
            point_hover_radius: 4.0,
            tension: 0.1,
            fill: false,
        }
    }

    pub fn volume(color: Color) -> Self {
        Self {
            border_color: color,
            background_color: color,
            border_width: 1.0,
            point_radius: 0.0,
            point_hover_radius: 0.0,
            tension: 0.0,
            fill: false,
        }
    }

    /// Smoothing overlays carry no point markers.
    pub fn overlay(color: Color) -> Self {
        Self {
            border_color: color,
            background_color: color,
            border_width: 1.0,
            point_radius: 0.0,
            point_hover_radius: 0.0,
            tension: 0.1,
            fill: false,
        }
    }

    pub fn filled_area(color: Color) -> Self {
        Self {
            border_color: color,
            background_color: color.with_alpha(0.2),
            border_width: 2.0,
            point_radius: 2.0,
            point_hover_radius: 5.0,
            tension: 0.2,
            fill: true,
        }
    }
}
