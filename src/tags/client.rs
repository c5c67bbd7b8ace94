/*!
 * Request/reply session with the tag service
 */

use std::time::Duration;

use super::error::{TagError, TagResult};
use super::request::TagRequest;

/// Default address of the tag service
pub const DEFAULT_ENDPOINT: &str = "tcp://localhost:64107";

/// Trait for tag writers
pub trait TagService {
    /// Send one request and wait for its reply
    fn set_tags(&mut self, request: &TagRequest) -> TagResult<String>;
}

/// ZeroMQ REQ client, connected once per run
pub struct ZmqTagClient {
    socket: zmq::Socket,
    _context: zmq::Context,
    endpoint: String,
}

impl ZmqTagClient {
    /// Connect to `endpoint`; without a timeout every receive blocks until a reply arrives
    pub fn connect(endpoint: &str, reply_timeout: Option<Duration>) -> TagResult<Self> {
        let connect_error = |source| TagError::Connect {
            endpoint: endpoint.to_string(),
            source,
        };

        let context = zmq::Context::new();
        let socket = context.socket(zmq::REQ).map_err(connect_error)?;
        socket.set_linger(0).map_err(connect_error)?;
        if let Some(timeout) = reply_timeout {
            let millis = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
            socket.set_rcvtimeo(millis).map_err(connect_error)?;
        }
        socket.connect(endpoint).map_err(connect_error)?;
        log::debug!("Connected to tag service at {}", endpoint);

        Ok(Self {
            socket,
            _context: context,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TagService for ZmqTagClient {
    fn set_tags(&mut self, request: &TagRequest) -> TagResult<String> {
        let payload = request.to_json()?;
        self.socket
            .send(payload.as_str(), 0)
            .map_err(TagError::Send)?;

        match self.socket.recv_string(0) {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(bytes)) => Ok(String::from_utf8_lossy(&bytes).to_string()),
            Err(zmq::Error::EAGAIN) => Err(TagError::NoReply(request.file.clone())),
            Err(e) => Err(TagError::Receive(e)),
        }
    }
}

/// Tag service double that records requests and answers immediately
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingTagService {
    pub requests: Vec<TagRequest>,
    /// Fail the request with this 1-based index
    pub fail_at: Option<usize>,
}

#[cfg(test)]
impl TagService for RecordingTagService {
    fn set_tags(&mut self, request: &TagRequest) -> TagResult<String> {
        self.requests.push(request.clone());
        if self.fail_at == Some(self.requests.len()) {
            return Err(TagError::NoReply(request.file.clone()));
        }
        Ok("OK".to_string())
    }
}
