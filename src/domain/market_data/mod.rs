//! Market data aggregate: samples, series, range resolution and indicators.

pub mod entities;
pub mod indicator_engine;
pub mod range;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use indicator_engine::*;
pub use range::*;
pub use value_objects::*;
