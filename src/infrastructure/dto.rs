//! Wire shapes of the charting backend and their conversion into domain types.

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{EconomicPoint, OHLCV, Price, Sample, Series, Symbol, Timestamp, Volume};
use serde::{Deserialize, Serialize};

/// Generic envelope returned by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponseDto<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponseDto<T> {
    /// Unwrap the payload, turning a reported failure into `RepositoryError::Backend`.
    pub fn into_result(self) -> RepositoryResult<T> {
        if let Some(error) = self.error {
            return Err(RepositoryError::Backend(error));
        }
        if !self.success {
            return Err(RepositoryError::Backend("request was not successful".to_string()));
        }
        self.data
            .ok_or_else(|| RepositoryError::Malformed("response carried no data".to_string()))
    }
}

/// One OHLCV row. `price` mirrors `close` on the wire and is not used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDataPointDto {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(default)]
    pub price: Option<f64>,
}

impl StockDataPointDto {
    pub fn to_domain_sample(&self, index: usize) -> RepositoryResult<Sample> {
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(RepositoryError::Malformed(format!(
                "volume {} at index {} is not a non-negative number",
                self.volume, index
            )));
        }

        let ohlcv = OHLCV::new(
            Price::from(self.open),
            Price::from(self.high),
            Price::from(self.low),
            Price::from(self.close),
            Volume::from(self.volume.round() as u64),
        );
        Ok(Sample::new(Timestamp::from_millis(self.timestamp), self.date.clone(), ohlcv))
    }
}

/// Historical series payload. Backend metadata is ignored and recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalStockDataDto {
    pub symbol: String,
    pub data: Vec<StockDataPointDto>,
}

impl HistoricalStockDataDto {
    pub fn to_domain_series(&self, unit: &str) -> RepositoryResult<Series> {
        let symbol = Symbol::new(&self.symbol)?;
        let samples = self
            .data
            .iter()
            .enumerate()
            .map(|(index, point)| point.to_domain_sample(index))
            .collect::<RepositoryResult<Vec<_>>>()?;

        let series = Series::new(symbol, unit, samples)?;
        crate::log_debug!(
            LogComponent::Infrastructure("Dto"),
            "decoded {} samples for {}",
            series.len(),
            series.symbol()
        );
        Ok(series)
    }
}

/// One economic indicator observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicDataPointDto {
    pub date: String,
    pub value: f64,
    pub indicator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl From<EconomicDataPointDto> for EconomicPoint {
    fn from(dto: EconomicDataPointDto) -> Self {
        Self {
            date: dto.date,
            value: dto.value,
            indicator: dto.indicator,
            country: dto.country,
            title: dto.title,
            unit: dto.unit,
        }
    }
}

/// Decode a full `ApiResponse<HistoricalStockData>` body.
pub fn decode_historical_response(body: &str, unit: &str) -> RepositoryResult<Series> {
    let response: ApiResponseDto<HistoricalStockDataDto> = serde_json::from_str(body)
        .map_err(|e| RepositoryError::Malformed(format!("invalid historical payload: {}", e)))?;
    response.into_result()?.to_domain_series(unit)
}

/// Decode a full `ApiResponse<EconomicDataPoint[]>` body.
pub fn decode_economic_response(body: &str) -> RepositoryResult<Vec<EconomicPoint>> {
    let response: ApiResponseDto<Vec<EconomicDataPointDto>> = serde_json::from_str(body)
        .map_err(|e| RepositoryError::Malformed(format!("invalid economic payload: {}", e)))?;
    Ok(response.into_result()?.into_iter().map(EconomicPoint::from).collect())
}
