use derive_more::Display;
use derive_new::new;
use thiserror::Error;

#[derive(new, Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
/// An error produced by the transport.
pub struct TransportError {
    #[new(into)]
    msg: String,
}

impl TransportError {
    /// Creates the error returned when an operation is issued on a closed transport.
    #[must_use]
    pub fn closed() -> Self {
        Self::new("Transport is closed")
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}
