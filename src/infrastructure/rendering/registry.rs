//! Process-wide lookup of renderers by name.

use super::{ChartJsRenderer, ChartRenderer, TextRenderer};
use crate::domain::errors::{RenderingError, RenderingResult};
use crate::domain::logging::LogComponent;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

static RENDERERS: Lazy<RwLock<HashMap<&'static str, Arc<dyn ChartRenderer>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Register `renderer` under its own name, replacing any previous entry.
pub fn register_renderer(renderer: Arc<dyn ChartRenderer>) {
    if let Ok(mut renderers) = RENDERERS.write() {
        crate::log_debug!(
            LogComponent::Infrastructure("Registry"),
            "registering renderer '{}'",
            renderer.name()
        );
        renderers.insert(renderer.name(), renderer);
    }
}

/// Install the built-in Chart.js and text renderers.
pub fn register_defaults() {
    register_renderer(Arc::new(ChartJsRenderer::new()));
    register_renderer(Arc::new(TextRenderer::new()));
}

pub fn renderer(name: &str) -> RenderingResult<Arc<dyn ChartRenderer>> {
    RENDERERS
        .read()
        .ok()
        .and_then(|renderers| renderers.get(name).cloned())
        .ok_or_else(|| RenderingError::UnknownRenderer(name.to_string()))
}

/// Sorted names of the registered renderers.
pub fn renderer_names() -> Vec<&'static str> {
    let mut names: Vec<_> = RENDERERS
        .read()
        .map(|renderers| renderers.keys().copied().collect())
        .unwrap_or_default();
    names.sort_unstable();
    names
}

pub fn clear_renderers() {
    if let Ok(mut renderers) = RENDERERS.write() {
        renderers.clear();
    }
}
