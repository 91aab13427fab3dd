//! Atom (RFC 4287) XML codec for [`atom_core`] types.
//!
//! Pure and synchronous: every operation maps an in-memory value to bytes or
//! back, with no I/O and no shared state.
//!
//! # Quick start
//!
//! ```no_run
//! use atom_core::{Feed, Person, Text, Uri};
//!
//! let feed = Feed {
//!   id: Uri::new("urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6"),
//!   title: Text::plain("Example Feed"),
//!   authors: vec![Person::named("John Doe")],
//!   ..Feed::default()
//! };
//! let document = atom_xml::feed_to_document(&feed).unwrap();
//! let back = atom_xml::decode_feed(&document).unwrap();
//! assert_eq!(back.title.body, "Example Feed");
//! ```

pub mod config;
pub mod datetime;
pub mod error;
mod field;
mod schema;
mod tree;
mod writer;

pub use config::{DecodeConfig, EncodeConfig, Indent};
pub use error::{DecodeError, EncodeError, Result};

use atom_core::{Entry, Feed};
use tracing::debug;

use crate::{field::XmlElement, writer::Encoder};

/// The declaration written in front of a document.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

// ─── Feed documents ───────────────────────────────────────────────────────────

/// Encode `feed` as a `<feed>` element, without the XML declaration.
pub fn encode_feed(feed: &Feed) -> Result<Vec<u8>, EncodeError> {
  encode_feed_with(feed, &EncodeConfig::default())
}

pub fn encode_feed_with(
  feed: &Feed,
  config: &EncodeConfig,
) -> Result<Vec<u8>, EncodeError> {
  let out = encode_root(feed, "feed", config)?;
  debug!(entries = feed.entries.len(), bytes = out.len(), "encoded feed");
  Ok(out)
}

/// Decode a `<feed>` document. Any error aborts the whole decode.
pub fn decode_feed(bytes: &[u8]) -> Result<Feed> {
  decode_feed_with(bytes, &DecodeConfig::default())
}

pub fn decode_feed_with(bytes: &[u8], config: &DecodeConfig) -> Result<Feed> {
  let feed: Feed = decode_root(bytes, "feed", config)?;
  debug!(entries = feed.entries.len(), bytes = bytes.len(), "decoded feed");
  Ok(feed)
}

/// [`XML_HEADER`] followed by [`encode_feed`]'s output.
pub fn feed_to_document(feed: &Feed) -> Result<Vec<u8>, EncodeError> {
  feed_to_document_with(feed, &EncodeConfig::default())
}

pub fn feed_to_document_with(
  feed: &Feed,
  config: &EncodeConfig,
) -> Result<Vec<u8>, EncodeError> {
  Ok(with_header(encode_feed_with(feed, config)?))
}

// ─── Entry documents ──────────────────────────────────────────────────────────

/// Encode a standalone `<entry>` element (RFC 4287 §4.1.2).
pub fn encode_entry(entry: &Entry) -> Result<Vec<u8>, EncodeError> {
  let out = encode_root(entry, "entry", &EncodeConfig::default())?;
  debug!(bytes = out.len(), "encoded entry");
  Ok(out)
}

/// Decode a standalone `<entry>` document.
pub fn decode_entry(bytes: &[u8]) -> Result<Entry> {
  let entry: Entry = decode_root(bytes, "entry", &DecodeConfig::default())?;
  debug!(bytes = bytes.len(), "decoded entry");
  Ok(entry)
}

/// [`XML_HEADER`] followed by [`encode_entry`]'s output.
pub fn entry_to_document(entry: &Entry) -> Result<Vec<u8>, EncodeError> {
  Ok(with_header(encode_entry(entry)?))
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn encode_root<T: XmlElement>(
  value: &T,
  name: &str,
  config: &EncodeConfig,
) -> Result<Vec<u8>, EncodeError> {
  let mut enc = Encoder::new(config)?;
  value.encode(name, &mut enc)?;
  Ok(enc.into_inner())
}

fn decode_root<T: XmlElement>(
  bytes: &[u8],
  name: &'static str,
  config: &DecodeConfig,
) -> Result<T> {
  let src = std::str::from_utf8(bytes).map_err(|e| DecodeError::Malformed {
    position: e.valid_up_to() as u64,
    reason:   format!("invalid UTF-8: {e}"),
  })?;
  let src = src.strip_prefix('\u{feff}').unwrap_or(src);

  let root = tree::parse(src, config)?;
  if root.local_name() != name {
    return Err(DecodeError::UnexpectedRoot {
      expected: name,
      found:    root.name,
    });
  }
  T::decode(&root)
}

fn with_header(body: Vec<u8>) -> Vec<u8> {
  let mut out = Vec::with_capacity(XML_HEADER.len() + body.len());
  out.extend_from_slice(XML_HEADER.as_bytes());
  out.extend_from_slice(&body);
  out
}
