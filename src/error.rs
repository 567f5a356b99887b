use crypto_hash::HashError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShatSumError {
    #[error(transparent)]
    Hash(#[from] HashError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
