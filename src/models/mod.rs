pub mod analysis;
pub mod tier;

pub use analysis::*;
pub use tier::*;
