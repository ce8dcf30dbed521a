#[macro_use]
pub(crate) mod util;
#[macro_use]
pub mod error;
pub mod game;
pub mod player;
pub mod primitives;
pub mod rules;
