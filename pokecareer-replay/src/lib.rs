extern crate alloc;

mod engine;
mod frame;
mod state;

pub use engine::*;
pub use frame::*;
pub use state::*;
