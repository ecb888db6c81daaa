extern crate alloc;

mod battle;
mod career;
mod grade;
mod inspiration;
mod stat;
mod type_color;

pub use battle::*;
pub use career::*;
pub use grade::*;
pub use inspiration::*;
pub use stat::*;
pub use type_color::*;
