use crate::config::EngineConfig;
use crate::domain::chart::{ChartAssembler, ChartOptions, ChartOutcome};
use crate::domain::errors::{AppError, RepositoryError};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::domain::market_data::repositories::{
    EconomicDataRepository, MarketDataRepository, SeriesRequest,
};
use crate::domain::market_data::{RangeSelection, ResolvedQuery, Symbol, resolve};
use chrono::{DateTime, Utc};

/// Samples requested per series unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Use Case: resolve a range, fetch the series and assemble its chart
pub struct LoadStockChartUseCase<R: MarketDataRepository> {
    repository: R,
    assembler: ChartAssembler,
    limit: usize,
}

impl<R: MarketDataRepository> LoadStockChartUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository, assembler: ChartAssembler::default(), limit: DEFAULT_HISTORY_LIMIT }
    }

    pub fn from_config(repository: R, config: &EngineConfig) -> Self {
        Self { repository, assembler: config.assembler(), limit: config.history_limit }
    }

    pub fn with_assembler(mut self, assembler: ChartAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The query's granularity overrides whatever `options` carried.
    ///
    /// A malformed payload yields [`ChartOutcome::NoData`]; every other
    /// repository failure is returned as an error.
    pub async fn execute(
        &self,
        symbol: &Symbol,
        range: RangeSelection,
        now: DateTime<Utc>,
        options: ChartOptions,
    ) -> Result<ChartOutcome, AppError> {
        let query = resolve(range, now);
        self.execute_query(symbol, &query, options).await
    }

    pub async fn execute_query(
        &self,
        symbol: &Symbol,
        query: &ResolvedQuery,
        options: ChartOptions,
    ) -> Result<ChartOutcome, AppError> {
        let request = SeriesRequest::new(symbol.clone(), query, self.limit);
        crate::log_info!(
            LogComponent::Application("LoadStockChart"),
            "fetching {} {} from {} to {}",
            symbol,
            query.granularity,
            query.from_param(),
            query.to_param()
        );

        let series = match self.repository.fetch_series(&request).await {
            Ok(series) => series,
            Err(RepositoryError::Malformed(reason)) => {
                get_logger().log_with_metadata(
                    LogLevel::Warn,
                    LogComponent::Application("LoadStockChart"),
                    "discarding malformed series",
                    &format!("symbol={} range={}..{} reason={}", symbol, query.from_param(), query.to_param(), reason),
                );
                return Ok(ChartOutcome::NoData);
            }
            Err(error) => {
                crate::log_error!(
                    LogComponent::Application("LoadStockChart"),
                    "failed to load {}: {}",
                    symbol,
                    error
                );
                return Err(error.into());
            }
        };

        let options = options.with_granularity(query.granularity);
        Ok(self.assembler.build_chart(&series, &options))
    }
}

/// Use Case: fetch an economic indicator and assemble its chart
pub struct LoadEconomicChartUseCase<R: EconomicDataRepository> {
    repository: R,
    assembler: ChartAssembler,
}

impl<R: EconomicDataRepository> LoadEconomicChartUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository, assembler: ChartAssembler::default() }
    }

    pub fn with_assembler(mut self, assembler: ChartAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub async fn execute(&self, indicator: &str, title: Option<&str>) -> Result<ChartOutcome, AppError> {
        match self.repository.fetch_indicator(indicator).await {
            Ok(points) => Ok(self.assembler.build_economic_chart(&points, title)),
            Err(RepositoryError::Malformed(reason)) => {
                crate::log_warn!(
                    LogComponent::Application("LoadEconomicChart"),
                    "discarding malformed '{}' data: {}",
                    indicator,
                    reason
                );
                Ok(ChartOutcome::NoData)
            }
            Err(error) => Err(error.into()),
        }
    }
}
