//! Error types for the atom-xml codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
  #[error("malformed XML at byte {position}: {reason}")]
  Malformed { position: u64, reason: String },

  #[error("invalid RFC 3339 date in <{element}>: {value:?}")]
  TemporalFormat {
    element: String,
    value:   String,
    /// `None` when chrono accepted text outside the RFC 3339 grammar.
    #[source]
    source:  Option<chrono::ParseError>,
  },

  #[error("expected root element <{expected}>, found <{found}>")]
  UnexpectedRoot { expected: &'static str, found: String },

  #[error("element nesting exceeds maximum of {0} levels")]
  DepthExceeded(usize),
}

#[derive(Debug, Error)]
pub enum EncodeError {
  #[error("cannot encode value: {0}")]
  Unrepresentable(String),
}

pub type Result<T, E = DecodeError> = std::result::Result<T, E>;
