mod boolean;

pub use boolean::{InvalidToken, JsonBoolean};
