use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("The given source doesn't provide a correct boolean. Source: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, LiteralError>;
