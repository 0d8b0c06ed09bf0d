use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown exposure key: {0}")]
    UnknownExposureKey(String),
}
