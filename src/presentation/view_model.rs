use super::metadata_panel::MetadataPanel;
use crate::config::EngineConfig;
use crate::domain::chart::{ChartAssembler, ChartKind, ChartOptions, ChartOutcome, ValueField};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{RangeSelection, ResolvedQuery, Series, Symbol, resolve};
use chrono::{DateTime, Utc};
use once_cell::unsync::OnceCell;

/// Progress of the most recent series request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading(ResolvedQuery),
    Ready,
    Failed(String),
}

/// Owns every user toggle plus the last fetched series.
///
/// The chart is derived lazily and memoised; each input change drops the
/// memo so the next [`ChartViewModel::chart`] call rebuilds it.
#[derive(Debug, Clone)]
pub struct ChartViewModel {
    symbol: Symbol,
    range: RangeSelection,
    options: ChartOptions,
    series: Option<Series>,
    state: LoadState,
    assembler: ChartAssembler,
    currency_prefix: String,
    chart: OnceCell<ChartOutcome>,
}

impl ChartViewModel {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            range: RangeSelection::default(),
            options: ChartOptions::default(),
            series: None,
            state: LoadState::Idle,
            assembler: ChartAssembler::default(),
            currency_prefix: "$".to_string(),
            chart: OnceCell::new(),
        }
    }

    pub fn from_config(symbol: Symbol, config: &EngineConfig) -> Self {
        Self {
            options: config.chart_options(),
            assembler: config.assembler(),
            currency_prefix: config.currency_prefix.clone(),
            ..Self::new(symbol)
        }
    }

    pub fn with_assembler(mut self, assembler: ChartAssembler, currency_prefix: impl Into<String>) -> Self {
        self.assembler = assembler;
        self.currency_prefix = currency_prefix.into();
        self.invalidate();
        self
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn range(&self) -> RangeSelection {
        self.range
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    /// Switch range and return the query the caller should fetch.
    ///
    /// The current series keeps its own granularity until the response
    /// for `query` is applied.
    pub fn select_range(&mut self, range: RangeSelection, now: DateTime<Utc>) -> ResolvedQuery {
        let query = resolve(range, now);
        self.range = range;
        self.state = LoadState::Loading(query);
        query
    }

    /// A new symbol discards the current series.
    pub fn select_symbol(&mut self, symbol: Symbol) {
        if symbol == self.symbol {
            return;
        }
        self.symbol = symbol;
        self.series = None;
        self.state = LoadState::Idle;
        self.invalidate();
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        self.options.kind = kind;
        self.invalidate();
    }

    pub fn toggle_volume(&mut self) {
        self.options.show_volume = !self.options.show_volume;
        self.invalidate();
    }

    pub fn set_value_field(&mut self, value_field: ValueField) {
        self.options.value_field = value_field;
        self.invalidate();
    }

    pub fn set_indicators(&mut self, windows: impl IntoIterator<Item = usize>) {
        self.options.indicators = windows.into_iter().collect();
        self.invalidate();
    }

    /// Accept a fetched series. Responses for a stale query or another
    /// symbol are dropped and `false` is returned.
    pub fn apply_series(&mut self, query: &ResolvedQuery, series: Series) -> bool {
        let expected = matches!(&self.state, LoadState::Loading(pending) if pending == query);
        if !expected || series.symbol() != &self.symbol {
            crate::log_debug!(
                LogComponent::Presentation("ChartViewModel"),
                "dropping stale series for {} ({} to {})",
                series.symbol(),
                query.from_param(),
                query.to_param()
            );
            return false;
        }
        self.series = Some(series);
        self.options.granularity = query.granularity;
        self.state = LoadState::Ready;
        self.invalidate();
        true
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        crate::log_warn!(LogComponent::Presentation("ChartViewModel"), "load failed: {}", message);
        self.series = None;
        self.state = LoadState::Failed(message);
        self.invalidate();
    }

    /// Current chart, rebuilt only after an input changed.
    pub fn chart(&self) -> &ChartOutcome {
        self.chart.get_or_init(|| match &self.series {
            Some(series) => self.assembler.build_chart(series, &self.options),
            None => ChartOutcome::NoData,
        })
    }

    pub fn metadata_panel(&self) -> Option<MetadataPanel> {
        MetadataPanel::from_series(self.series.as_ref()?, &self.currency_prefix)
    }

    pub fn is_chart_cached(&self) -> bool {
        self.chart.get().is_some()
    }

    fn invalidate(&mut self) {
        self.chart.take();
    }
}
