use colorexpr::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("No color edit session is open")]
    NoActiveSession,
}

pub type Result<T> = std::result::Result<T, PickerError>;
