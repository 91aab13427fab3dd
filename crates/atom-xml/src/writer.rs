//! Thin wrapper around quick-xml's [`Writer`] used by the field tables.

use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::{config::EncodeConfig, error::EncodeError};

pub(crate) struct Encoder {
  writer: Writer<Vec<u8>>,
}

impl Encoder {
  pub fn new(config: &EncodeConfig) -> Result<Self, EncodeError> {
    let writer = match config.indent {
      Some(indent) => {
        let byte = u8::try_from(indent.char)
          .ok()
          .filter(u8::is_ascii)
          .ok_or_else(|| {
            EncodeError::Unrepresentable(format!(
              "indent character {:?} is not ASCII",
              indent.char
            ))
          })?;
        Writer::new_with_indent(Vec::new(), byte, indent.size)
      }
      None => Writer::new(Vec::new()),
    };
    Ok(Self { writer })
  }

  pub fn open(&mut self, start: BytesStart<'_>) -> Result<(), EncodeError> {
    self.write(Event::Start(start))
  }

  pub fn close(&mut self, name: &str) -> Result<(), EncodeError> {
    self.write(Event::End(BytesEnd::new(name)))
  }

  /// Character data, escaped.
  ///
  /// An empty text event is still written: it stops the indenter from
  /// breaking the line before the end tag, so `<id></id>` stays empty.
  pub fn text(&mut self, text: &str) -> Result<(), EncodeError> {
    self.write(Event::Text(BytesText::new(text)))
  }

  /// Markup written exactly as given. Empty markup is handled as in
  /// [`Encoder::text`].
  pub fn raw(&mut self, markup: &str) -> Result<(), EncodeError> {
    self.write(Event::Text(BytesText::from_escaped(markup)))
  }

  /// `<name>text</name>`, written even when `text` is empty.
  pub fn text_element(
    &mut self,
    name: &str,
    text: &str,
  ) -> Result<(), EncodeError> {
    self.open(BytesStart::new(name))?;
    self.text(text)?;
    self.close(name)
  }

  pub fn into_inner(self) -> Vec<u8> { self.writer.into_inner() }

  fn write(&mut self, event: Event<'_>) -> Result<(), EncodeError> {
    self
      .writer
      .write_event(event)
      .map_err(|e| EncodeError::Unrepresentable(e.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Indent;

  fn written(enc: Encoder) -> String {
    String::from_utf8(enc.into_inner()).unwrap()
  }

  #[test]
  fn empty_element_is_not_self_closing() {
    let mut enc = Encoder::new(&EncodeConfig::default()).unwrap();
    enc.text_element("id", "").unwrap();
    assert_eq!(written(enc), "<id></id>");
  }

  #[test]
  fn text_is_escaped_raw_is_not() {
    let mut enc = Encoder::new(&EncodeConfig::default()).unwrap();
    enc.open(BytesStart::new("a")).unwrap();
    enc.text("1 < 2 & 3").unwrap();
    enc.raw("<b>bold</b>").unwrap();
    enc.close("a").unwrap();
    assert_eq!(written(enc), "<a>1 &lt; 2 &amp; 3<b>bold</b></a>");
  }

  #[test]
  fn indented_empty_elements_stay_empty() {
    let mut enc = Encoder::new(&EncodeConfig {
      indent: Some(Indent::default()),
    })
    .unwrap();
    enc.open(BytesStart::new("feed")).unwrap();
    enc.text_element("id", "").unwrap();
    enc.open(BytesStart::new("title")).unwrap();
    enc.raw("").unwrap();
    enc.close("title").unwrap();
    enc.close("feed").unwrap();
    assert_eq!(
      written(enc),
      "<feed>\n  <id></id>\n  <title></title>\n</feed>"
    );
  }

  #[test]
  fn non_ascii_indent_is_rejected() {
    let config = EncodeConfig {
      indent: Some(Indent { char: 'é', size: 1 }),
    };
    assert!(matches!(
      Encoder::new(&config),
      Err(EncodeError::Unrepresentable(_))
    ));
  }
}
