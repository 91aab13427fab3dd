//! Text constructs (`title`, `subtitle`, `summary`, `rights`) and `content`.
//!
//! Bodies are kept as the raw inner markup of the element: an `html` body
//! holds the escaped form (`A &lt;em&gt;lot&lt;/em&gt;`) and an `xhtml` body
//! holds the literal child markup. Nothing is escaped or unescaped on either
//! side of the codec.

use serde::{Deserialize, Serialize};

use crate::common::CommonAttributes;

/// The `type` discriminator of a text construct or `content` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
  Text,
  Html,
  Xhtml,
  /// Any other value; for `content` this is usually a media type.
  Other(String),
}

impl TextKind {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Text => "text",
      Self::Html => "html",
      Self::Xhtml => "xhtml",
      Self::Other(s) => s.as_str(),
    }
  }
}

impl From<&str> for TextKind {
  fn from(s: &str) -> Self {
    match s {
      "text" => Self::Text,
      "html" => Self::Html,
      "xhtml" => Self::Xhtml,
      other => Self::Other(other.to_string()),
    }
  }
}

/// A human-readable text construct. An absent `kind` means plain text.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Text {
  pub kind:   Option<TextKind>,
  pub body:   String,
  pub common: CommonAttributes,
}

impl Text {
  /// A text construct with no `type` attribute.
  pub fn plain(body: impl Into<String>) -> Self {
    Self {
      body: body.into(),
      ..Self::default()
    }
  }

  pub fn html(body: impl Into<String>) -> Self {
    Self {
      kind: Some(TextKind::Html),
      body: body.into(),
      ..Self::default()
    }
  }
}

/// The `content` of an entry, either inline or referenced through `src`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Content {
  pub kind:   Option<TextKind>,
  /// IRI of out-of-line content; the body is then expected to be empty.
  pub src:    Option<String>,
  pub body:   String,
  pub common: CommonAttributes,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kind_from_str() {
    assert_eq!(TextKind::from("html"), TextKind::Html);
    assert_eq!(TextKind::from("xhtml"), TextKind::Xhtml);
    assert_eq!(
      TextKind::from("image/png"),
      TextKind::Other("image/png".to_string())
    );
    assert_eq!(TextKind::from("image/png").as_str(), "image/png");
  }

  #[test]
  fn kind_serde_lowercase() {
    let json = serde_json::to_string(&TextKind::Xhtml).unwrap();
    assert_eq!(json, "\"xhtml\"");
  }
}
