use alloy::transports::TransportError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Required context is missing, e.g. the chain id or a rollup creator address.
    #[error("Configuration Error: {0}")]
    Configuration(String),
    /// The function name or its arguments do not match the contract interface.
    #[error("Encoding Error: {0}")]
    Encoding(String),
    #[error("Alloy Transport Error: {0}")]
    RemoteCall(#[from] TransportError),
    #[error("Decoding Error: {0}")]
    Decode(#[from] alloy::sol_types::Error),
}

impl Error {
    /// Whether the error was raised locally before anything was sent to the node.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Encoding(_))
    }
}
