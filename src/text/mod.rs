pub mod sentences;
pub mod similarity;

pub use sentences::*;
pub use similarity::*;
