mod fake_service;
mod fixtures;
mod rng;

pub use fake_service::*;
pub use fixtures::*;
pub use rng::*;
