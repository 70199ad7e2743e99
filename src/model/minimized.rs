//! Output contracts of the response shapers. Serialize-only: each type is a
//! structural subset of its input counterpart in [`crate::model::word`], so a
//! field the pruning rules drop simply has no slot to reappear in.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::example::AudioPronunciation;
use crate::model::word::{Definition, Dialect};

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MinimizedWord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<MinimizedDefinitionEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<MinimizedExample>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialects: Option<DialectsField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenses: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_terms: Option<Vec<MinimizedTermRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stems: Option<Vec<MinimizedTermRef>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of a minimized `definitions` sequence. `Untouched` carries the
/// v1 passthrough, where structured definitions keep all their fields.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum MinimizedDefinitionEntry {
    Text(String),
    Minimized(MinimizedDefinition),
    Untouched(Definition),
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MinimizedDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsibidi: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MinimizedExample {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciations: Option<Vec<AudioPronunciation>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsibidi: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum DialectsField {
    // v1: the sequence is passed through exactly as stored.
    Untouched(Vec<Dialect>),
    Minimized(Vec<MinimizedDialect>),
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MinimizedDialect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum MinimizedTermRef {
    Token(String),
    Record(MinimizedLinkedRecord),
    Other(Value),
}

/// Projection of a linked record down to the keys the API exposes.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct MinimizedLinkedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,
}
