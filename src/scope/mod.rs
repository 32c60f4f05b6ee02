pub mod classifier;
pub mod merge;
pub mod parser;
pub mod types;

pub use classifier::classify;
pub use merge::{Merged, merge};
pub use parser::{Markers, parse};
pub use types::*;
