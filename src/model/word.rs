use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::example::Example;

/// A word document as fetched from the store. Only the fields the minimizer
/// touches are declared; everything else (headword, word class, attributes,
/// pronunciation, ...) rides along in `extra` untouched.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<DefinitionEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,

    // Legacy singular field still present on older stored documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialects: Option<Vec<Dialect>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenses: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_terms: Option<Vec<LinkedTermRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stems: Option<Vec<LinkedTermRef>>,

    // Audit fields, never exposed through the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypernyms: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyponyms: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A definition is stored either as a bare gloss string or as a structured
/// object. The shape is decided once here, at the deserialization boundary.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum DefinitionEntry {
    Text(String),
    Structured(Definition),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub igbo_definitions: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsibidi: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dialect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A related-term or stem reference: a bare token, a partial linked record,
/// or whatever odd shape (null, etc.) older documents carry. Anything that
/// is not a string or an object passes through the minimizer untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum LinkedTermRef {
    Token(String),
    Record(LinkedRecord),
    Other(Value),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LinkedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
