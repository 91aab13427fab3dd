//! Codec settings.
//!
//! Both structs deserialise with every field defaulted, so a host can embed
//! them in its own configuration file and override only what it needs.

use serde::Deserialize;

/// Default nesting limit for [`DecodeConfig::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Output settings. The default writes compact, unindented XML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
  /// Pretty-print with this indentation. Elements carrying text are kept
  /// on one line, so indented output decodes to the same value.
  pub indent: Option<Indent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Indent {
  /// Must be an ASCII character.
  pub char: char,
  pub size: usize,
}

impl Default for Indent {
  fn default() -> Self { Self { char: ' ', size: 2 } }
}

/// Input settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
  /// Maximum element nesting depth, counting the root as 1.
  pub max_depth: usize,
}

impl Default for DecodeConfig {
  fn default() -> Self {
    Self {
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_object_uses_defaults() {
    let enc: EncodeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(enc, EncodeConfig::default());
    assert!(enc.indent.is_none());

    let dec: DecodeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(dec.max_depth, DEFAULT_MAX_DEPTH);
  }

  #[test]
  fn partial_indent() {
    let enc: EncodeConfig =
      serde_json::from_str(r#"{ "indent": { "size": 4 } }"#).unwrap();
    assert_eq!(enc.indent, Some(Indent { char: ' ', size: 4 }));
  }
}
