use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid unit syntax at byte {pos}: {message}")]
    Syntax { pos: usize, message: &'static str },

    #[error("incompatible units: '{from}' vs '{to}'")]
    IncompatibleUnits { from: String, to: String },
}
