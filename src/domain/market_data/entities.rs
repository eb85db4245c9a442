pub use super::value_objects::{OHLCV, Price, Symbol, Timestamp, Volume};
use super::services::DataValidationService;
use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Domain entity - one OHLCV period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: Timestamp,
    /// Calendar label as supplied by the backend, e.g. `2024-06-14`.
    pub date: String,
    pub ohlcv: OHLCV,
}

impl Sample {
    pub fn new(timestamp: Timestamp, date: impl Into<String>, ohlcv: OHLCV) -> Self {
        Self { timestamp, date: date.into(), ohlcv }
    }

    pub fn close(&self) -> f64 {
        self.ohlcv.close.value()
    }

    pub fn volume(&self) -> u64 {
        self.ohlcv.volume.value()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub current: f64,
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeRange {
    pub min: u64,
    pub max: u64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Aggregate summary of a series. Only ever derived from samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub total_data_points: usize,
    pub price_range: PriceRange,
    pub volume_range: VolumeRange,
    pub time_range: TimeRange,
}

impl SeriesMetadata {
    /// Returns `None` for an empty slice.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;

        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        let mut min_volume = u64::MAX;
        let mut max_volume = 0u64;
        let mut volume_sum = 0f64;

        for sample in samples {
            min_price = min_price.min(sample.ohlcv.low.value());
            max_price = max_price.max(sample.ohlcv.high.value());
            min_volume = min_volume.min(sample.volume());
            max_volume = max_volume.max(sample.volume());
            volume_sum += sample.volume() as f64;
        }

        let change = last.close() - first.close();
        let change_percent = if first.close() == 0.0 { 0.0 } else { change / first.close() * 100.0 };

        Some(Self {
            total_data_points: samples.len(),
            price_range: PriceRange {
                min: min_price,
                max: max_price,
                current: last.close(),
                change,
                change_percent,
            },
            volume_range: VolumeRange {
                min: min_volume,
                max: max_volume,
                average: volume_sum / samples.len() as f64,
            },
            time_range: TimeRange { start: first.date.clone(), end: last.date.clone() },
        })
    }
}

/// Domain entity - named, validated sample sequence with derived metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    symbol: Symbol,
    unit: String,
    samples: Vec<Sample>,
    metadata: Option<SeriesMetadata>,
}

impl Series {
    /// Validates ordering and OHLC invariants before accepting the samples.
    pub fn new(
        symbol: Symbol,
        unit: impl Into<String>,
        samples: Vec<Sample>,
    ) -> Result<Self, ValidationError> {
        DataValidationService::new().validate_sequence(&samples)?;
        let metadata = SeriesMetadata::from_samples(&samples);
        Ok(Self { symbol, unit: unit.into(), samples, metadata })
    }

    pub fn empty(symbol: Symbol, unit: impl Into<String>) -> Self {
        Self { symbol, unit: unit.into(), samples: Vec::new(), metadata: None }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn metadata(&self) -> Option<&SeriesMetadata> {
        self.metadata.as_ref()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Append one sample; it must be newer than the current last one.
    pub fn push(&mut self, sample: Sample) -> Result<(), ValidationError> {
        let validator = DataValidationService::new();
        let index = self.samples.len();
        validator.validate_sample(index, &sample)?;
        if let Some(last) = self.samples.last() {
            validator.validate_pair(index, last, &sample)?;
        }
        self.samples.push(sample);
        self.refresh_metadata();
        Ok(())
    }

    /// Keep only the most recent `limit` samples.
    pub fn truncate_front(&mut self, limit: usize) {
        if self.samples.len() > limit {
            let excess = self.samples.len() - limit;
            self.samples.drain(..excess);
            self.refresh_metadata();
        }
    }

    fn refresh_metadata(&mut self) {
        self.metadata = SeriesMetadata::from_samples(&self.samples);
    }
}

/// One observation of an economic indicator (inflation, GDP growth, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicPoint {
    pub date: String,
    pub value: f64,
    pub indicator: String,
    pub country: Option<String>,
    pub title: Option<String>,
    pub unit: Option<String>,
}

impl EconomicPoint {
    pub fn new(date: impl Into<String>, value: f64, indicator: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value,
            indicator: indicator.into(),
            country: None,
            title: None,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}
