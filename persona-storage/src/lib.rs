pub mod dataset;
pub mod error;

pub use dataset::*;
pub use error::*;
