mod error;
mod value;

pub mod repl;

pub use error::{LiteralError, Result};
pub use value::{InvalidToken, JsonBoolean};
