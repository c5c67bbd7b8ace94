/*!
 * Tag writing through the external tag service
 *
 * Every copied file gets exactly one `settags` request; the reply must arrive
 * before the next file is copied.
 */

mod client;
mod error;
mod request;

pub use client::{TagService, ZmqTagClient, DEFAULT_ENDPOINT};
pub use error::{TagError, TagResult};
pub use request::{TagOptions, TagRequest, Tags, SET_TAGS};

#[cfg(test)]
pub(crate) use client::RecordingTagService;
