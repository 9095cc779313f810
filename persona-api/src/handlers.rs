pub mod dataset;
pub mod predict;
