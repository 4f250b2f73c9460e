use thiserror::Error;

pub mod directory;
pub mod geocode;
pub mod locate;

/// A failure while talking to an external service.
///
/// Gateway errors never escape the resolution chain: each strategy absorbs
/// them into a decline and the chain falls through to the next strategy.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(anyhow::Error),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Response(anyhow::Error),
}
