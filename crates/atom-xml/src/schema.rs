//! Field tables: how every `atom-core` type maps onto XML.
//!
//! Rows are written in output order. Required elements (`id`, `title`,
//! `updated`, a person's `name`) and required attributes (`term`, `href`)
//! are always emitted, even when empty.

use atom_core::{
  Category, Content, Entry, Feed, Generator, Link, Person, Source, Text, Uri,
};

use crate::field::xml_element;

xml_element!(Feed {
  children  authors:      "author",
  children  categories:   "category",
  children  contributors: "contributor",
  opt_child generator:    "generator",
  opt_child icon:         "icon",
  child     id:           "id",
  children  links:        "link",
  opt_child logo:         "logo",
  opt_child rights:       "rights",
  opt_child subtitle:     "subtitle",
  child     title:        "title",
  child     updated:      "updated",
  children  entries:      "entry",
});

xml_element!(Entry {
  children  authors:      "author",
  children  categories:   "category",
  opt_child content:      "content",
  children  contributors: "contributor",
  child     id:           "id",
  children  links:        "link",
  opt_child published:    "published",
  opt_child rights:       "rights",
  opt_child source:       "source",
  opt_child summary:      "summary",
  child     title:        "title",
  child     updated:      "updated",
});

xml_element!(Source {
  children  authors:      "author",
  children  categories:   "category",
  children  contributors: "contributor",
  opt_child generator:    "generator",
  opt_child icon:         "icon",
  opt_child id:           "id",
  children  links:        "link",
  opt_child logo:         "logo",
  opt_child rights:       "rights",
  opt_child subtitle:     "subtitle",
  opt_child title:        "title",
  opt_child updated:      "updated",
});

xml_element!(Person {
  text     name:  "name",
  opt_text uri:   "uri",
  opt_text email: "email",
});

xml_element!(Category {
  attr     term:   "term",
  opt_attr scheme: "scheme",
  opt_attr label:  "label",
});

xml_element!(Link {
  attr     href:       "href",
  opt_attr rel:        "rel",
  opt_attr media_type: "type",
  opt_attr hreflang:   "hreflang",
  opt_attr length:     "length",
  innerxml content:    "$value",
});

xml_element!(Content {
  opt_attr kind: "type",
  opt_attr src:  "src",
  innerxml body: "$value",
});

xml_element!(Text {
  opt_attr kind: "type",
  innerxml body: "$value",
});

xml_element!(Generator {
  opt_attr uri:     "uri",
  opt_attr version: "version",
  chardata body:    "$text",
});

xml_element!(Uri {
  chardata value: "$text",
});
