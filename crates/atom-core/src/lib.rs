//! Typed data model for the Atom Syndication Format (RFC 4287).
//!
//! This crate only describes the shape of a feed. It has no XML dependency;
//! conversion to and from the wire format lives in `atom-xml`.

pub mod common;
pub mod datetime;
pub mod feed;
pub mod metadata;
pub mod person;
pub mod text;

pub use common::{Attribute, CommonAttributes};
pub use datetime::Datetime;
pub use feed::{Entry, Feed, Source};
pub use metadata::{Category, Generator, Link, Uri};
pub use person::Person;
pub use text::{Content, Text, TextKind};

/// The Atom namespace URI.
pub const NAMESPACE: &str = "http://www.w3.org/2005/Atom";
