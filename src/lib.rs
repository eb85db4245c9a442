use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

pub use config::EngineConfig;
pub use domain::chart::{ChartOptions, ChartOutcome, ChartSpec, build_chart, build_economic_chart};
pub use domain::market_data::{RangeSelection, ResolvedQuery, moving_average, resolve};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install the console logger, wall-clock time provider and default renderers.
///
/// Returns `false` if the runtime was already initialized.
pub fn initialize() -> bool {
    initialize_with(&EngineConfig::default())
}

pub fn initialize_with(config: &EngineConfig) -> bool {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return false;
    }

    domain::logging::init_logger(Arc::new(infrastructure::ConsoleLogger::new(config.log_level)));
    domain::logging::init_time_provider(Arc::new(infrastructure::SystemTimeProvider::new()));
    infrastructure::rendering::register_defaults();

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!(
            "chart engine ready, renderers: {}",
            infrastructure::rendering::renderer_names().join(", ")
        ),
    );
    true
}

/// Undo [`initialize`]. Returns `false` if nothing was installed.
pub fn shutdown() -> bool {
    if !INITIALIZED.swap(false, Ordering::SeqCst) {
        return false;
    }

    get_logger().info(LogComponent::Presentation("Shutdown"), "chart engine stopping");
    infrastructure::rendering::clear_renderers();
    domain::logging::reset_logger();
    domain::logging::reset_time_provider();
    true
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}
