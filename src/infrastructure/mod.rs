pub mod dto;
pub mod memory_repository;
pub mod rendering;
pub mod services;

pub use memory_repository::{InMemoryEconomicData, InMemoryMarketData};
pub use rendering::{ChartJsRenderer, ChartRenderer, RenderOutput, TextRenderer};
pub use services::{ConsoleLogger, MemoryLogger, SystemTimeProvider};
