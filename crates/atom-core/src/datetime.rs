//! Date constructs (`updated`, `published`).

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::CommonAttributes;

/// An RFC 3339 instant. The original offset is kept so that
/// `2003-12-13T08:29:29-04:00` re-encodes with `-04:00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datetime {
  pub value:  DateTime<FixedOffset>,
  pub common: CommonAttributes,
}

impl Datetime {
  pub fn new(value: impl Into<DateTime<FixedOffset>>) -> Self {
    Self {
      value:  value.into(),
      common: CommonAttributes::default(),
    }
  }

  /// The zero instant, `0001-01-01T00:00:00Z`.
  pub fn zero() -> DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(1, 1, 1)
      .and_then(|d| d.and_hms_opt(0, 0, 0))
      .map(|dt| dt.and_utc().fixed_offset())
      .unwrap_or_default()
  }

  pub fn is_zero(&self) -> bool { self.value == Self::zero() }

  /// The instant converted to UTC.
  pub fn to_utc(&self) -> DateTime<Utc> { self.value.with_timezone(&Utc) }
}

impl Default for Datetime {
  fn default() -> Self { Self::new(Self::zero()) }
}

impl From<DateTime<Utc>> for Datetime {
  fn from(value: DateTime<Utc>) -> Self { Self::new(value) }
}

impl From<DateTime<FixedOffset>> for Datetime {
  fn from(value: DateTime<FixedOffset>) -> Self { Self::new(value) }
}

#[cfg(test)]
mod tests {
  use chrono::{Datelike, TimeZone, Timelike};

  use super::*;

  #[test]
  fn default_is_year_one() {
    let dt = Datetime::default();
    assert!(dt.is_zero());
    assert_eq!(dt.value.year(), 1);
    assert_eq!(dt.value.month(), 1);
    assert_eq!(dt.value.day(), 1);
    assert_eq!(dt.value.hour(), 0);
    assert_eq!(dt.value.offset().local_minus_utc(), 0);
  }

  #[test]
  fn keeps_offset() {
    let offset = FixedOffset::west_opt(4 * 3600).unwrap();
    let value = offset.with_ymd_and_hms(2003, 12, 13, 8, 29, 29).unwrap();
    let dt = Datetime::new(value);
    assert_eq!(dt.value.offset().local_minus_utc(), -4 * 3600);
    assert_eq!(
      dt.to_utc(),
      Utc.with_ymd_and_hms(2003, 12, 13, 12, 29, 29).unwrap()
    );
    assert!(!dt.is_zero());
  }
}
