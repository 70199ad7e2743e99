use serde::Serialize;

use crate::model::example::Example;
use crate::model::minimized::MinimizedWord;

/// Body shape the HTTP layer serializes for word lookups.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordResponseData {
    pub words: Vec<MinimizedWord>,
    pub content_length: usize,
}

impl WordResponseData {
    pub fn new(words: Vec<MinimizedWord>) -> Self {
        let content_length = words.len();
        WordResponseData {
            words,
            content_length,
        }
    }
}

/// Body shape the HTTP layer serializes for example lookups.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleResponseData {
    pub examples: Vec<Example>,
    pub content_length: usize,
}

impl ExampleResponseData {
    pub fn new(examples: Vec<Example>) -> Self {
        let content_length = examples.len();
        ExampleResponseData {
            examples,
            content_length,
        }
    }
}
