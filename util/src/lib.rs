#[macro_use]
pub mod if_dbg_else;
pub use self::if_dbg_else::*;
#[macro_use]
pub mod verify;
pub use self::verify::*;
#[macro_use]
pub mod if_then;
pub mod logging;
pub use self::logging::init_logging;
pub mod parser;
pub use self::parser::*;
