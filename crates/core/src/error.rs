#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type RelayResult<T> = std::result::Result<T, RelayError>;
