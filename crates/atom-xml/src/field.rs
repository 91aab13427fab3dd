//! The generic walker behind the field tables in [`crate::schema`].
//!
//! Each table row names a *role* (`attr`, `opt_child`, `innerxml`, …), a
//! struct field and an XML name. [`xml_element!`] expands a table into an
//! [`XmlElement`] impl that calls the matching functions in [`role`] for
//! every row: attributes are written first, then `xml:base`, `xml:lang` and
//! the open attribute bag, then the body in declaration order.
//!
//! Types whose mapping cannot be expressed as a table implement
//! [`XmlElement`] by hand (see [`crate::datetime`]).

use atom_core::{CommonAttributes, TextKind};
use quick_xml::events::BytesStart;

use crate::{
  error::{EncodeError, Result},
  tree::Element,
  writer::Encoder,
};

/// A value that is written as one XML element.
pub(crate) trait XmlElement: Sized {
  /// Write `self` as an element called `name`.
  fn encode(&self, name: &str, enc: &mut Encoder) -> Result<(), EncodeError>;

  fn decode(element: &Element<'_>) -> Result<Self>;
}

/// A value that is written as an attribute.
pub(crate) trait AttrValue {
  fn to_attr(&self) -> &str;
  fn from_attr(value: &str) -> Self;
}

impl AttrValue for String {
  fn to_attr(&self) -> &str { self }

  fn from_attr(value: &str) -> Self { value.to_string() }
}

impl AttrValue for TextKind {
  fn to_attr(&self) -> &str { self.as_str() }

  fn from_attr(value: &str) -> Self { TextKind::from(value) }
}

/// Expand a field table into an [`XmlElement`] impl.
///
/// ```ignore
/// xml_element!(Category {
///   attr     term:   "term",
///   opt_attr scheme: "scheme",
/// });
/// ```
///
/// Every type must also have a `common: CommonAttributes` field.
macro_rules! xml_element {
  ($ty:ident { $( $role:ident $field:ident : $tag:literal ),* $(,)? }) => {
    impl $crate::field::XmlElement for $ty {
      fn encode(
        &self,
        name: &str,
        enc: &mut $crate::writer::Encoder,
      ) -> ::std::result::Result<(), $crate::error::EncodeError> {
        let mut start = ::quick_xml::events::BytesStart::new(name);
        $( $crate::field::role::$role::write_attr(&self.$field, $tag, &mut start); )*
        $crate::field::common::write(&self.common, &mut start);
        enc.open(start)?;
        $( $crate::field::role::$role::write_body(&self.$field, $tag, enc)?; )*
        enc.close(name)
      }

      fn decode(
        element: &$crate::tree::Element<'_>,
      ) -> $crate::error::Result<Self> {
        Ok(Self {
          $( $field: $crate::field::role::$role::read(element, $tag)?, )*
          common: $crate::field::common::read(element, |attr: &str| {
            false $( || $crate::field::role::$role::claims(attr, $tag) )*
          }),
        })
      }
    }
  };
}

pub(crate) use xml_element;

// ─── Common attributes ────────────────────────────────────────────────────────

pub(crate) mod common {
  use super::*;

  pub fn write(common: &CommonAttributes, start: &mut BytesStart<'_>) {
    if let Some(base) = &common.base {
      start.push_attribute(("xml:base", base.as_str()));
    }
    if let Some(lang) = &common.lang {
      start.push_attribute(("xml:lang", lang.as_str()));
    }
    for attr in &common.attributes {
      start.push_attribute((attr.name.as_str(), attr.value.as_str()));
    }
  }

  /// Collect every attribute not `claimed` by the element's table.
  pub fn read(
    element: &Element<'_>,
    claimed: impl Fn(&str) -> bool,
  ) -> CommonAttributes {
    let mut common = CommonAttributes::default();
    for attr in &element.attributes {
      match attr.name.as_str() {
        "xml:base" => common.base = Some(attr.value.clone()),
        "xml:lang" => common.lang = Some(attr.value.clone()),
        name if claimed(name) => {}
        _ => common.attributes.push(attr.clone()),
      }
    }
    common
  }
}

// ─── Roles ────────────────────────────────────────────────────────────────────

/// One module per role. Every module exposes the same four functions so the
/// macro can dispatch on the role name alone.
pub(crate) mod role {
  use super::*;

  /// Shared no-op halves for roles that only live in the attribute list or
  /// only in the body.
  mod none {
    use super::*;

    pub fn claims(_attr: &str, _tag: &str) -> bool { false }

    pub fn write_attr<T>(_value: &T, _tag: &str, _start: &mut BytesStart<'_>) {}

    pub fn write_body<T>(
      _value: &T,
      _tag: &str,
      _enc: &mut Encoder,
    ) -> Result<(), EncodeError> {
      Ok(())
    }
  }

  /// Required attribute; written even when empty.
  pub mod attr {
    pub use super::none::write_body;
    use super::*;

    pub fn claims(attr: &str, tag: &str) -> bool { attr == tag }

    pub fn write_attr<T: AttrValue>(
      value: &T,
      tag: &str,
      start: &mut BytesStart<'_>,
    ) {
      start.push_attribute((tag, value.to_attr()));
    }

    pub fn read<T: AttrValue + Default>(
      element: &Element<'_>,
      tag: &str,
    ) -> Result<T> {
      Ok(element.attribute(tag).map(T::from_attr).unwrap_or_default())
    }
  }

  /// Optional attribute; omitted when `None`.
  pub mod opt_attr {
    pub use super::{attr::claims, none::write_body};
    use super::*;

    pub fn write_attr<T: AttrValue>(
      value: &Option<T>,
      tag: &str,
      start: &mut BytesStart<'_>,
    ) {
      if let Some(value) = value {
        start.push_attribute((tag, value.to_attr()));
      }
    }

    pub fn read<T: AttrValue>(
      element: &Element<'_>,
      tag: &str,
    ) -> Result<Option<T>> {
      Ok(element.attribute(tag).map(T::from_attr))
    }
  }

  /// Required child holding only character data; written even when empty.
  pub mod text {
    pub use super::none::{claims, write_attr};
    use super::*;

    pub fn write_body(
      value: &str,
      tag: &str,
      enc: &mut Encoder,
    ) -> Result<(), EncodeError> {
      enc.text_element(tag, value)
    }

    pub fn read(element: &Element<'_>, tag: &str) -> Result<String> {
      Ok(element.last_child(tag).map(Element::text).unwrap_or_default())
    }
  }

  /// Optional child holding only character data.
  pub mod opt_text {
    pub use super::none::{claims, write_attr};
    use super::*;

    pub fn write_body(
      value: &Option<String>,
      tag: &str,
      enc: &mut Encoder,
    ) -> Result<(), EncodeError> {
      match value {
        Some(value) => enc.text_element(tag, value),
        None => Ok(()),
      }
    }

    pub fn read(element: &Element<'_>, tag: &str) -> Result<Option<String>> {
      Ok(element.last_child(tag).map(Element::text))
    }
  }

  /// Required child element; a missing one decodes to its default.
  pub mod child {
    pub use super::none::{claims, write_attr};
    use super::*;

    pub fn write_body<T: XmlElement>(
      value: &T,
      tag: &str,
      enc: &mut Encoder,
    ) -> Result<(), EncodeError> {
      value.encode(tag, enc)
    }

    pub fn read<T: XmlElement + Default>(
      element: &Element<'_>,
      tag: &str,
    ) -> Result<T> {
      match element.last_child(tag) {
        Some(child) => T::decode(child),
        None => Ok(T::default()),
      }
    }
  }

  /// Optional child element. `Some(T::default())` is written as an empty
  /// element, `None` is not written at all.
  pub mod opt_child {
    pub use super::none::{claims, write_attr};
    use super::*;

    pub fn write_body<T: XmlElement>(
      value: &Option<T>,
      tag: &str,
      enc: &mut Encoder,
    ) -> Result<(), EncodeError> {
      match value {
        Some(value) => value.encode(tag, enc),
        None => Ok(()),
      }
    }

    pub fn read<T: XmlElement>(
      element: &Element<'_>,
      tag: &str,
    ) -> Result<Option<T>> {
      element.last_child(tag).map(T::decode).transpose()
    }
  }

  /// Repeated child elements, order preserved.
  pub mod children {
    pub use super::none::{claims, write_attr};
    use super::*;

    pub fn write_body<T: XmlElement>(
      values: &[T],
      tag: &str,
      enc: &mut Encoder,
    ) -> Result<(), EncodeError> {
      values.iter().try_for_each(|value| value.encode(tag, enc))
    }

    pub fn read<T: XmlElement>(
      element: &Element<'_>,
      tag: &str,
    ) -> Result<Vec<T>> {
      element.children_named(tag).map(T::decode).collect()
    }
  }

  /// The element's own character data, escaped on write.
  pub mod chardata {
    pub use super::none::{claims, write_attr};
    use super::*;

    pub fn write_body(
      value: &str,
      _tag: &str,
      enc: &mut Encoder,
    ) -> Result<(), EncodeError> {
      enc.text(value)
    }

    pub fn read(element: &Element<'_>, _tag: &str) -> Result<String> {
      Ok(element.text())
    }
  }

  /// The element's inner markup, copied verbatim in both directions.
  pub mod innerxml {
    pub use super::none::{claims, write_attr};
    use super::*;

    pub fn write_body(
      value: &str,
      _tag: &str,
      enc: &mut Encoder,
    ) -> Result<(), EncodeError> {
      enc.raw(value)
    }

    pub fn read(element: &Element<'_>, _tag: &str) -> Result<String> {
      Ok(element.inner.to_string())
    }
  }
}
