//! A minimal element tree built from quick-xml events.
//!
//! The tree keeps exactly what the field tables need: qualified names,
//! attributes in document order, child elements and character data, and the
//! verbatim inner markup of every element (for `innerxml` fields). It
//! borrows the inner markup from the source string, so an `Element<'a>` never
//! outlives the input.

use atom_core::Attribute;
use quick_xml::{
  Reader,
  events::{BytesStart, Event},
};
use tracing::trace;

use crate::{
  config::DecodeConfig,
  error::{DecodeError, Result},
};

// ─── Tree ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element<'a> {
  /// Qualified name as written, e.g. `atom:feed`.
  pub name:       String,
  /// Attributes with unescaped values, in document order.
  pub attributes: Vec<Attribute>,
  pub children:   Vec<Node<'a>>,
  /// Everything between the start and end tag, untouched.
  pub inner:      &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node<'a> {
  Element(Element<'a>),
  /// Unescaped character data (text or CDATA).
  Text(String),
}

impl<'a> Element<'a> {
  fn open(name: String, attributes: Vec<Attribute>) -> Self {
    Self {
      name,
      attributes,
      children: Vec::new(),
      inner: "",
    }
  }

  pub fn local_name(&self) -> &str { local_name(&self.name) }

  pub fn attribute(&self, name: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|a| a.name == name)
      .map(|a| a.value.as_str())
  }

  /// Child elements whose local name is `local`, in document order.
  pub fn children_named<'s>(
    &'s self,
    local: &'s str,
  ) -> impl Iterator<Item = &'s Element<'a>> + 's {
    self.children.iter().filter_map(move |node| match node {
      Node::Element(e) if e.local_name() == local => Some(e),
      _ => None,
    })
  }

  /// The last child element named `local`. Repeated singular elements
  /// overwrite each other, so the last one is authoritative.
  pub fn last_child<'s>(&'s self, local: &'s str) -> Option<&'s Element<'a>> {
    self.children_named(local).last()
  }

  /// Concatenated character data of the direct children.
  pub fn text(&self) -> String {
    self
      .children
      .iter()
      .filter_map(|node| match node {
        Node::Text(t) => Some(t.as_str()),
        Node::Element(_) => None,
      })
      .collect()
  }
}

/// Strip a `prefix:` from a qualified name.
pub(crate) fn local_name(name: &str) -> &str {
  match name.rfind(':') {
    Some(pos) => &name[pos + 1..],
    None => name,
  }
}

// ─── Parser ───────────────────────────────────────────────────────────────────

/// Parse `src` into its root element.
pub(crate) fn parse<'a>(
  src: &'a str,
  config: &DecodeConfig,
) -> Result<Element<'a>> {
  let mut reader = Reader::from_str(src);
  // Open elements with the byte offset where their inner markup starts.
  let mut stack: Vec<(Element<'a>, usize)> = Vec::new();
  let mut root: Option<Element<'a>> = None;

  loop {
    let before = reader.buffer_position() as usize;
    let event = reader
      .read_event()
      .map_err(|e| malformed(reader.error_position() as u64, e))?;

    match event {
      Event::Start(ref e) => {
        check_depth(stack.len(), config)?;
        let element = open_element(e, &reader)?;
        stack.push((element, reader.buffer_position() as usize));
      }
      Event::Empty(ref e) => {
        check_depth(stack.len(), config)?;
        let element = open_element(e, &reader)?;
        attach(&mut stack, &mut root, element, before)?;
      }
      Event::End(_) => {
        let Some((mut element, start)) = stack.pop() else {
          return Err(malformed(before as u64, "unmatched end tag"));
        };
        element.inner = &src[start..before];
        trace!(element = %element.name, depth = stack.len(), "parsed element");
        attach(&mut stack, &mut root, element, before)?;
      }
      Event::Text(ref t) => match stack.last_mut() {
        Some((parent, _)) => {
          let text = t.unescape().map_err(|e| malformed(before as u64, e))?;
          parent.children.push(Node::Text(text.into_owned()));
        }
        None if t.iter().all(u8::is_ascii_whitespace) => {}
        None => {
          return Err(malformed(before as u64, "text outside the root element"));
        }
      },
      Event::CData(ref c) => match stack.last_mut() {
        Some((parent, _)) => {
          let text =
            std::str::from_utf8(c).map_err(|e| malformed(before as u64, e))?;
          parent.children.push(Node::Text(text.to_string()));
        }
        None => {
          return Err(malformed(before as u64, "CDATA outside the root element"));
        }
      },
      Event::Eof => break,
      // Declaration, comments, processing instructions, doctype.
      _ => {}
    }
  }

  if let Some((open, _)) = stack.last() {
    return Err(malformed(
      src.len() as u64,
      format!("unclosed element <{}>", open.name),
    ));
  }

  root.ok_or_else(|| malformed(0, "document has no root element"))
}

fn check_depth(open: usize, config: &DecodeConfig) -> Result<()> {
  if open >= config.max_depth {
    return Err(DecodeError::DepthExceeded(config.max_depth));
  }
  Ok(())
}

fn open_element<'a>(
  start: &BytesStart<'_>,
  reader: &Reader<&'a [u8]>,
) -> Result<Element<'a>> {
  let position = reader.buffer_position() as u64;
  let name = std::str::from_utf8(start.name().as_ref())
    .map_err(|e| malformed(position, e))?
    .to_string();

  let mut attributes = Vec::new();
  for attr in start.attributes() {
    let attr = attr.map_err(|e| malformed(position, e))?;
    let key = std::str::from_utf8(attr.key.as_ref())
      .map_err(|e| malformed(position, e))?;
    let value = attr
      .decode_and_unescape_value(reader.decoder())
      .map_err(|e| malformed(position, e))?;
    attributes.push(Attribute::new(key, value.into_owned()));
  }

  Ok(Element::open(name, attributes))
}

fn attach<'a>(
  stack: &mut [(Element<'a>, usize)],
  root: &mut Option<Element<'a>>,
  element: Element<'a>,
  position: usize,
) -> Result<()> {
  if let Some((parent, _)) = stack.last_mut() {
    parent.children.push(Node::Element(element));
  } else if root.is_none() {
    *root = Some(element);
  } else {
    return Err(malformed(
      position as u64,
      format!("second root element <{}>", element.name),
    ));
  }
  Ok(())
}

fn malformed(position: u64, reason: impl std::fmt::Display) -> DecodeError {
  DecodeError::Malformed {
    position,
    reason: reason.to_string(),
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn parse_default(src: &str) -> Result<Element<'_>> {
    parse(src, &DecodeConfig::default())
  }

  #[test]
  fn captures_inner_markup_verbatim() {
    let src = r#"<content type="xhtml"><div xmlns="http://www.w3.org/1999/xhtml"><p>a &amp; <b>b</b></p></div></content>"#;
    let root = parse_default(src).unwrap();
    assert_eq!(root.name, "content");
    assert_eq!(
      root.inner,
      r#"<div xmlns="http://www.w3.org/1999/xhtml"><p>a &amp; <b>b</b></p></div>"#
    );
    assert_eq!(root.attribute("type"), Some("xhtml"));
  }

  #[test]
  fn text_is_unescaped() {
    let root =
      parse_default("<title>a &lt;b&gt; <![CDATA[<c>]]></title>").unwrap();
    assert_eq!(root.text(), "a <b> <c>");
    assert_eq!(root.inner, "a &lt;b&gt; <![CDATA[<c>]]>");
  }

  #[test]
  fn empty_element_has_empty_inner() {
    let root = parse_default(r#"<feed><link href="x"/></feed>"#).unwrap();
    let link = root.last_child("link").unwrap();
    assert_eq!(link.inner, "");
    assert_eq!(link.attribute("href"), Some("x"));
  }

  #[test]
  fn children_matched_by_local_name() {
    let root = parse_default(
      r#"<a:feed xmlns:a="http://www.w3.org/2005/Atom"><a:id>1</a:id><a:id>2</a:id></a:feed>"#,
    )
    .unwrap();
    assert_eq!(root.local_name(), "feed");
    assert_eq!(root.children_named("id").count(), 2);
    assert_eq!(root.last_child("id").unwrap().text(), "2");
    assert_eq!(
      root.attributes,
      vec![Attribute::new("xmlns:a", "http://www.w3.org/2005/Atom")]
    );
  }

  #[test]
  fn skips_declaration_and_comments() {
    let src = "<?xml version=\"1.0\"?>\n<!-- c --><feed><!-- d --></feed>\n";
    let root = parse_default(src).unwrap();
    assert_eq!(root.name, "feed");
    assert!(root.children.is_empty());
    assert_eq!(root.inner, "<!-- d -->");
  }

  #[test]
  fn mismatched_end_tag_is_malformed() {
    let err = parse_default("<feed><id></feed>").unwrap_err();
    assert!(matches!(err, DecodeError::Malformed { .. }), "{err}");
  }

  #[test]
  fn unclosed_element_is_malformed() {
    let err = parse_default("<feed><id>x</id>").unwrap_err();
    assert!(matches!(err, DecodeError::Malformed { .. }), "{err}");
  }

  #[test]
  fn character_data_outside_root_is_malformed() {
    for src in ["<![CDATA[junk]]><feed></feed>", "<feed></feed><![CDATA[ ]]>"] {
      let err = parse_default(src).unwrap_err();
      assert!(matches!(err, DecodeError::Malformed { .. }), "{err}");
    }
    assert!(parse_default("\n<feed></feed>\n").is_ok());
  }

  #[test]
  fn second_root_is_malformed() {
    let err = parse_default("<feed></feed><feed></feed>").unwrap_err();
    assert!(matches!(err, DecodeError::Malformed { .. }), "{err}");
  }

  #[test]
  fn empty_input_has_no_root() {
    let err = parse_default("").unwrap_err();
    assert!(matches!(err, DecodeError::Malformed { .. }), "{err}");
  }

  #[test]
  fn depth_limit() {
    let config = DecodeConfig { max_depth: 2 };
    assert!(parse("<a><b></b></a>", &config).is_ok());
    let err = parse("<a><b><c/></b></a>", &config).unwrap_err();
    assert!(matches!(err, DecodeError::DepthExceeded(2)), "{err}");
  }

  #[test]
  fn local_name_strips_prefix() {
    assert_eq!(local_name("atom:feed"), "feed");
    assert_eq!(local_name("feed"), "feed");
  }
}
