pub mod metadata_panel;
pub mod view_model;

pub use metadata_panel::{MetadataPanel, Trend};
pub use view_model::{ChartViewModel, LoadState};
