//! Repositories over preloaded data, used for fixtures and offline rendering.

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::repositories::{
    EconomicDataRepository, MarketDataRepository, SeriesRequest,
};
use crate::domain::market_data::{EconomicPoint, Sample, Series, Symbol};
use chrono::{NaiveDate, NaiveTime};
use futures::future::{BoxFuture, FutureExt, ready};
use std::collections::HashMap;

const DAY_MS: i64 = 86_400_000;

fn day_start_ms(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Inclusive millisecond window `[from 00:00, to 23:59:59.999]` in UTC.
fn request_window(request: &SeriesRequest) -> (i64, i64) {
    (day_start_ms(request.from), day_start_ms(request.to) + DAY_MS - 1)
}

/// Market data source holding whole series per symbol.
#[derive(Debug, Default)]
pub struct InMemoryMarketData {
    series: HashMap<Symbol, Series>,
    failure: Option<RepositoryError>,
}

impl InMemoryMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.insert(series.symbol().clone(), series);
        self
    }

    /// Every fetch fails with `error`.
    pub fn failing(error: RepositoryError) -> Self {
        Self { series: HashMap::new(), failure: Some(error) }
    }

    fn select(&self, request: &SeriesRequest) -> RepositoryResult<Series> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let stored = self
            .series
            .get(&request.symbol)
            .ok_or_else(|| RepositoryError::NotFound(request.symbol.to_string()))?;

        let (start, end) = request_window(request);
        let window: Vec<Sample> = stored
            .samples()
            .iter()
            .filter(|s| {
                let ts = s.timestamp.value() as i64;
                ts >= start && ts <= end
            })
            .cloned()
            .collect();

        let mut series = Series::new(stored.symbol().clone(), stored.unit(), window)?;
        series.truncate_front(request.limit);

        crate::log_debug!(
            LogComponent::Infrastructure("InMemoryMarketData"),
            "{} samples for {} between {} and {}",
            series.len(),
            request.symbol,
            request.from,
            request.to
        );
        Ok(series)
    }
}

impl MarketDataRepository for InMemoryMarketData {
    fn fetch_series<'a>(&'a self, request: &'a SeriesRequest) -> BoxFuture<'a, RepositoryResult<Series>> {
        ready(self.select(request)).boxed()
    }
}

/// Economic indicator source keyed by indicator name.
#[derive(Debug, Default)]
pub struct InMemoryEconomicData {
    indicators: HashMap<String, Vec<EconomicPoint>>,
}

impl InMemoryEconomicData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indicator(mut self, name: impl Into<String>, points: Vec<EconomicPoint>) -> Self {
        self.indicators.insert(name.into(), points);
        self
    }
}

impl EconomicDataRepository for InMemoryEconomicData {
    fn fetch_indicator<'a>(
        &'a self,
        indicator: &'a str,
    ) -> BoxFuture<'a, RepositoryResult<Vec<EconomicPoint>>> {
        let result = self
            .indicators
            .get(indicator)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(indicator.to_string()));
        ready(result).boxed()
    }
}
