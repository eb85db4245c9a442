//! Chart aggregate: render contract, styling value objects and the assembler.

pub mod entities;
pub mod format;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::{ChartAssembler, build_chart, build_economic_chart};
pub use value_objects::*;
