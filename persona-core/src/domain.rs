pub mod assessment;
pub mod dataset;
pub mod personality;

pub use assessment::*;
pub use dataset::*;
pub use personality::*;
