use super::{EconomicPoint, Granularity, ResolvedQuery, Series, Symbol};
use crate::domain::errors::RepositoryResult;
use chrono::NaiveDate;
use futures::future::BoxFuture;

/// Parameters of one historical-series request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    pub symbol: Symbol,
    pub granularity: Granularity,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub limit: usize,
}

impl SeriesRequest {
    pub fn new(symbol: Symbol, query: &ResolvedQuery, limit: usize) -> Self {
        Self { symbol, granularity: query.granularity, from: query.from, to: query.to, limit }
    }
}

/// Source of historical OHLCV series, sorted ascending by time.
pub trait MarketDataRepository: Send + Sync {
    fn fetch_series<'a>(&'a self, request: &'a SeriesRequest) -> BoxFuture<'a, RepositoryResult<Series>>;
}

/// Source of economic indicator observations.
pub trait EconomicDataRepository: Send + Sync {
    fn fetch_indicator<'a>(&'a self, indicator: &'a str)
    -> BoxFuture<'a, RepositoryResult<Vec<EconomicPoint>>>;
}
