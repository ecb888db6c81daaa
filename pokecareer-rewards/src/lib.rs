extern crate alloc;

mod grade;
mod inspiration;
mod rarity;

pub use grade::*;
pub use inspiration::*;
pub use rarity::*;
