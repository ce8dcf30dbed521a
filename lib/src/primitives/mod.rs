pub mod card;
pub mod cardvector;
pub mod deck;
pub mod eplayerindex;
pub mod hand;
pub mod trick;

pub use self::{card::*, deck::*, eplayerindex::*, hand::*, trick::*};
