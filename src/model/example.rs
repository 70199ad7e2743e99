use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An example sentence attached to a word. Declared fields are the ones the
/// response shapers drop or rewrite; the sentence text itself (igbo, english,
/// `_id`, ...) rides along in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_words: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciations: Option<Vec<AudioPronunciation>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_definitions_schemas: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsibidi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioPronunciation {
    #[serde(default)]
    pub audio: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
