use thiserror::Error;

use crate::catalog::UnknownFinding;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error(transparent)]
    UnknownFinding(#[from] UnknownFinding),
}
