/*!
 * Error types for the tag service client
 */

use thiserror::Error;

/// Errors that can occur while talking to the tag service
#[derive(Error, Debug)]
pub enum TagError {
    /// Could not open or connect the session
    #[error("Connection to {endpoint} failed: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: zmq::Error,
    },

    /// Sending a request failed
    #[error("Request error: {0}")]
    Send(zmq::Error),

    /// Receiving a reply failed
    #[error("Reply error: {0}")]
    Receive(zmq::Error),

    /// No reply arrived within the configured timeout
    #[error("No reply from the tag service for {0}")]
    NoReply(String),

    /// Request could not be encoded
    #[error("JSON error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Specialized Result type for tag service operations
pub type TagResult<T> = Result<T, TagError>;
