pub mod playergreedy;
pub mod playerhuman;

pub use self::{playergreedy::*, playerhuman::*};
