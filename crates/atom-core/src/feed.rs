//! The top-level containers: `feed`, `entry` and an entry's `source`.
//!
//! Field order matches the order elements are written in; the codec relies
//! on the declaration order in `atom-xml`, not on this struct, but the two
//! are kept in step.

use serde::{Deserialize, Serialize};

use crate::{
  common::CommonAttributes,
  datetime::Datetime,
  metadata::{Category, Generator, Link, Uri},
  person::Person,
  text::{Content, Text},
};

/// An Atom feed document.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Feed {
  pub authors:      Vec<Person>,
  pub categories:   Vec<Category>,
  pub contributors: Vec<Person>,
  pub generator:    Option<Generator>,
  pub icon:         Option<Uri>,
  pub id:           Uri,
  pub links:        Vec<Link>,
  pub logo:         Option<Uri>,
  pub rights:       Option<Text>,
  pub subtitle:     Option<Text>,
  pub title:        Text,
  pub updated:      Datetime,
  pub entries:      Vec<Entry>,
  pub common:       CommonAttributes,
}

/// A single item of a feed, or a standalone entry document.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Entry {
  pub authors:      Vec<Person>,
  pub categories:   Vec<Category>,
  pub content:      Option<Content>,
  pub contributors: Vec<Person>,
  pub id:           Uri,
  pub links:        Vec<Link>,
  pub published:    Option<Datetime>,
  pub rights:       Option<Text>,
  pub source:       Option<Source>,
  pub summary:      Option<Text>,
  pub title:        Text,
  pub updated:      Datetime,
  pub common:       CommonAttributes,
}

/// Metadata of the feed an entry was copied from. Every field is optional.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Source {
  pub authors:      Vec<Person>,
  pub categories:   Vec<Category>,
  pub contributors: Vec<Person>,
  pub generator:    Option<Generator>,
  pub icon:         Option<Uri>,
  pub id:           Option<Uri>,
  pub links:        Vec<Link>,
  pub logo:         Option<Uri>,
  pub rights:       Option<Text>,
  pub subtitle:     Option<Text>,
  pub title:        Option<Text>,
  pub updated:      Option<Datetime>,
  pub common:       CommonAttributes,
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};

  use super::*;

  #[test]
  fn serde_json_round_trip() {
    let feed = Feed {
      id: Uri::new("urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6"),
      title: Text::plain("Example Feed"),
      updated: Datetime::from(
        Utc.with_ymd_and_hms(2003, 12, 13, 18, 30, 2).unwrap(),
      ),
      authors: vec![Person::named("John Doe")],
      entries: vec![Entry {
        title: Text::plain("Atom-Powered Robots Run Amok"),
        ..Entry::default()
      }],
      ..Feed::default()
    };

    let json = serde_json::to_string(&feed).unwrap();
    let back: Feed = serde_json::from_str(&json).unwrap();
    assert_eq!(back, feed);
  }
}
