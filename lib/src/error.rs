use failure::Fail;

/// Error taxonomy of the engine. `InvalidCard` is recoverable (re-prompt a
/// human, reject a malformed token); `IllegalMove` signals a violated
/// protocol (an agent returned a card outside its legal set, or a caller
/// drove the state machine out of order) and must abort the current game.
#[derive(Debug, Fail)]
pub enum VJassError {
    #[fail(display = "invalid card: {}", _0)]
    InvalidCard(String),
    #[fail(display = "illegal move: {}", _0)]
    IllegalMove(String),
}

#[macro_export]
macro_rules! bail_illegal {($($arg:tt)*) => {
    return Err($crate::error::VJassError::IllegalMove(format!($($arg)*)))
}}
