mod merge;
mod store;

pub use merge::*;
pub use store::*;
