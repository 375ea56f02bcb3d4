use thiserror::Error;

use crate::core::SkipId;

pub type SelectorResult<T> = Result<T, SelectorError>;

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("catalog request failed: {0}")]
    CatalogRequest(String),

    #[error("catalog request returned status {status}")]
    CatalogStatus { status: u16 },

    #[error("catalog payload could not be decoded: {0}")]
    CatalogDecode(String),

    #[error("skip id {0} is not in the loaded catalog")]
    UnknownSkip(SkipId),

    #[error("invalid view frame: {0}")]
    InvalidFrame(String),

    #[error("render output failed: {0}")]
    RenderIo(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
