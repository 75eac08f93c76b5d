use sandlot_protocol::ParseError;
use thiserror::Error;

use crate::types::CountBaseState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A play was applied to a state that should already have been rotated
    #[error("Invalid state for next play: {state}")]
    InvalidState { state: CountBaseState },

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl From<ParseError> for GameError {
    fn from(err: ParseError) -> Self {
        GameError::MalformedInput(err.to_string())
    }
}
