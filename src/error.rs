use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0} is not a finite number")]
    NotFinite(f64),
    #[error("block size mismatch: expected {expected} samples, got {found}")]
    BlockSize { expected: usize, found: usize },
    #[error("unknown pitch name: {0:?}")]
    UnknownPitch(String),
}
