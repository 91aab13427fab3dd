//! Small metadata elements: `category`, `link`, `generator` and the
//! URI-valued `id` / `icon` / `logo`.

use serde::{Deserialize, Serialize};

use crate::common::CommonAttributes;

// ─── Category ─────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Category {
  pub term:   String,
  pub scheme: Option<String>,
  pub label:  Option<String>,
  pub common: CommonAttributes,
}

impl Category {
  pub fn term(term: impl Into<String>) -> Self {
    Self {
      term: term.into(),
      ..Self::default()
    }
  }
}

// ─── Link ─────────────────────────────────────────────────────────────────────

/// A reference to a related resource.
///
/// `link` is declared empty by RFC 4287 but foreign markup may appear inside
/// it; whatever is there is kept verbatim in `content`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Link {
  pub href:       String,
  pub rel:        Option<String>,
  /// The `type` attribute (an advisory media type).
  pub media_type: Option<String>,
  pub hreflang:   Option<String>,
  pub length:     Option<String>,
  pub content:    String,
  pub common:     CommonAttributes,
}

impl Link {
  pub fn href(href: impl Into<String>) -> Self {
    Self {
      href: href.into(),
      ..Self::default()
    }
  }
}

// ─── Generator ────────────────────────────────────────────────────────────────

/// The agent used to generate a feed.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Generator {
  pub uri:     Option<String>,
  pub version: Option<String>,
  pub body:    String,
  pub common:  CommonAttributes,
}

// ─── Uri ──────────────────────────────────────────────────────────────────────

/// An element whose character data is a single IRI.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Uri {
  pub value:  String,
  pub common: CommonAttributes,
}

impl Uri {
  pub fn new(value: impl Into<String>) -> Self {
    Self {
      value:  value.into(),
      common: CommonAttributes::default(),
    }
  }
}
