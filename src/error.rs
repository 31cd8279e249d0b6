use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Malformed input: expected {expected}, got '{token}'")]
    MalformedInput { expected: &'static str, token: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("End of input")]
    EndOfInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
