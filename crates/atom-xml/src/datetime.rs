//! Date constructs are the one element without a field table: the body is an
//! instant formatted with a fixed RFC 3339 profile rather than a string.

use atom_core::Datetime;
use chrono::{DateTime, FixedOffset, SecondsFormat, Timelike};
use quick_xml::events::BytesStart;

use crate::{
  error::{DecodeError, EncodeError, Result},
  field::{XmlElement, common},
  tree::Element,
  writer::Encoder,
};

/// Whole seconds, `Z` for UTC, `±hh:mm` otherwise.
pub fn format(value: &DateTime<FixedOffset>) -> String {
  value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse RFC 3339 text. No other format is tried.
///
/// chrono's RFC 3339 parser also takes a space between date and time and a
/// `:60` leap second; both are rejected here.
pub fn parse(element: &str, text: &str) -> Result<DateTime<FixedOffset>> {
  let invalid = |source: Option<chrono::ParseError>| {
    DecodeError::TemporalFormat {
      element: element.to_string(),
      value: text.to_string(),
      source,
    }
  };

  if !matches!(text.as_bytes().get(10), Some(b'T' | b't')) {
    return Err(invalid(None));
  }
  let value =
    DateTime::parse_from_rfc3339(text).map_err(|e| invalid(Some(e)))?;
  // Leap seconds come back as a nanosecond count past one second.
  if value.nanosecond() >= 1_000_000_000 {
    return Err(invalid(None));
  }
  Ok(value)
}

impl XmlElement for Datetime {
  fn encode(&self, name: &str, enc: &mut Encoder) -> Result<(), EncodeError> {
    let mut start = BytesStart::new(name);
    common::write(&self.common, &mut start);
    enc.open(start)?;
    enc.text(&format(&self.value))?;
    enc.close(name)
  }

  fn decode(element: &Element<'_>) -> Result<Self> {
    Ok(Self {
      value:  parse(element.local_name(), &element.text())?,
      common: common::read(element, |_| false),
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};

  use super::*;

  #[test]
  fn formats_utc_with_z() {
    let value = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
    assert_eq!(format(&value.fixed_offset()), "2009-11-10T23:00:00Z");
  }

  #[test]
  fn formats_zero_instant() {
    assert_eq!(format(&Datetime::zero()), "0001-01-01T00:00:00Z");
  }

  #[test]
  fn keeps_explicit_offset() {
    let value = parse("published", "2003-12-13T08:29:29-04:00").unwrap();
    assert_eq!(format(&value), "2003-12-13T08:29:29-04:00");
  }

  #[test]
  fn drops_fractional_seconds() {
    let value = parse("updated", "2005-07-31T12:29:29.123Z").unwrap();
    assert_eq!(format(&value), "2005-07-31T12:29:29Z");
  }

  #[test]
  fn accepts_lowercase_separators() {
    let value = parse("updated", "2003-12-13t18:30:02z").unwrap();
    assert_eq!(format(&value), "2003-12-13T18:30:02Z");
  }

  #[test]
  fn rejects_other_formats() {
    for text in [
      "not-a-date",
      "2003-12-13",
      "Sat, 13 Dec 2003 18:30:02 GMT",
      "",
      "2003-12-13 18:30:02Z",
      "2016-12-31T23:59:60Z",
      "2016-12-31T23:59:60.5+01:00",
    ] {
      let err = parse("updated", text).unwrap_err();
      match err {
        DecodeError::TemporalFormat { element, value, .. } => {
          assert_eq!(element, "updated");
          assert_eq!(value, text);
        }
        other => panic!("unexpected error: {other}"),
      }
    }
  }
}
