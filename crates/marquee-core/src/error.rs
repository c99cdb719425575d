//! Error types for marquee.
//!
//! One unified error type with explicit variants for transport, protocol,
//! decoding and input validation failures. Views never surface these to the
//! user directly; they collapse every variant into a fixed failure message.

use std::fmt;
use thiserror::Error;

/// The unified error type for marquee operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or filesystem transport errors.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The movie API answered with a non-success status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body could not be decoded into movie records.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors (invalid URL, empty identifier).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Local catalog could not be read.
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
}

/// A non-success response from the movie API.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if any.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Returns true for 404 responses, usually a wrong movies path.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// The response body did not have a recognised movie list shape.
#[derive(Debug, Error)]
#[error("malformed movie list: {message}")]
pub struct DecodeError {
    pub message: String,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(DecodeError::from(err))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid movie API URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid movie identifier.
    #[error("invalid movie id '{value}': {reason}")]
    MovieId { value: String, reason: String },
}
