//! Person constructs (`author`, `contributor`).

use serde::{Deserialize, Serialize};

use crate::common::CommonAttributes;

/// An author or contributor. Only `name` is required.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Person {
  pub name:   String,
  pub uri:    Option<String>,
  pub email:  Option<String>,
  pub common: CommonAttributes,
}

impl Person {
  pub fn named(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }
}
