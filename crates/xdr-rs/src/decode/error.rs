use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("{field} exceeds size limit; {size} > {limit}")]
    ElementSizeExceeded {
        field: &'static str,
        size: i64,
        limit: i64,
    },
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
