pub mod assessment;
pub mod heatmap;
pub mod response;
pub mod snapshot;
pub mod template;
