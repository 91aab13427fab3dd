//! Attributes shared by every Atom element.
//!
//! RFC 4287 §2 allows `xml:base` and `xml:lang` on any element, and foreign
//! markup may add attributes of its own. Everything the schema does not name
//! is kept in an ordered bag so it survives a decode → encode round trip.

use serde::{Deserialize, Serialize};

/// A single attribute carried verbatim: qualified name and unescaped value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
  /// Qualified name as written in the document, e.g. `xmlns:dc`.
  pub name:  String,
  pub value: String,
}

impl Attribute {
  pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name:  name.into(),
      value: value.into(),
    }
  }
}

/// `xml:base`, `xml:lang` and any attribute the schema does not recognise.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct CommonAttributes {
  /// `xml:base`
  pub base:       Option<String>,
  /// `xml:lang`
  pub lang:       Option<String>,
  /// Unrecognised attributes in document order.
  pub attributes: Vec<Attribute>,
}

impl CommonAttributes {
  /// Look up an attribute from the open bag by qualified name.
  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|a| a.name == name)
      .map(|a| a.value.as_str())
  }

  /// Set an attribute in the open bag. An existing entry keeps its position.
  pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
    let name = name.into();
    let value = value.into();
    match self.attributes.iter_mut().find(|a| a.name == name) {
      Some(existing) => existing.value = value,
      None => self.attributes.push(Attribute { name, value }),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.base.is_none() && self.lang.is_none() && self.attributes.is_empty()
  }
}
