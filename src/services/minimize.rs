use std::time::Instant;

use crate::model::example::Example;
use crate::model::minimized::{
    DialectsField, MinimizedDefinition, MinimizedDefinitionEntry, MinimizedDialect,
    MinimizedExample, MinimizedLinkedRecord, MinimizedTermRef, MinimizedWord,
};
use crate::model::version::ApiVersion;
use crate::model::word::{DefinitionEntry, Dialect, LinkedTermRef, WordRecord};

/// Strips internal-only and redundant fields from word records before they
/// are embedded in an API response. Order- and length-preserving; the input
/// slice is never touched.
pub fn minimize_words(words: &[WordRecord], version: ApiVersion) -> Vec<MinimizedWord> {
    let started = Instant::now();

    let minimized: Vec<MinimizedWord> = words
        .iter()
        .map(|word| minimize_word(word.clone(), version))
        .collect();

    tracing::debug!(
        words = minimized.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "minimize_words"
    );

    minimized
}

fn minimize_word(word: WordRecord, version: ApiVersion) -> MinimizedWord {
    // hypernyms, hyponyms, updatedAt and createdAt have no slot in the
    // output type, so they are dropped by not being carried over.
    let definitions = word.definitions.map(|defs| match version {
        ApiVersion::V2 => defs.into_iter().map(minimize_definition).collect(),
        ApiVersion::V1 => defs.into_iter().map(pass_through_definition).collect(),
    });

    let (examples, example) = match word.examples {
        Some(examples) if !examples.is_empty() => (
            Some(examples.into_iter().map(minimize_example).collect()),
            word.example,
        ),
        // No example content: the legacy singular `example` field goes too.
        other => (other.map(|_| Vec::new()), None),
    };

    let tenses = word.tenses.filter(|t| t.values().any(|v| !v.is_empty()));

    let dialects = match version {
        ApiVersion::V2 => word
            .dialects
            .filter(|d| !d.is_empty())
            .map(|d| DialectsField::Minimized(d.into_iter().map(minimize_dialect).collect())),
        ApiVersion::V1 => word.dialects.map(DialectsField::Untouched),
    };

    MinimizedWord {
        definitions,
        examples,
        example,
        dialects,
        tenses,
        variations: word.variations.filter(|v| !v.is_empty()),
        related_terms: minimize_term_refs(word.related_terms),
        stems: minimize_term_refs(word.stems),
        extra: word.extra,
    }
}

fn minimize_definition(entry: DefinitionEntry) -> MinimizedDefinitionEntry {
    match entry {
        DefinitionEntry::Text(text) => MinimizedDefinitionEntry::Text(text),
        DefinitionEntry::Structured(def) => {
            MinimizedDefinitionEntry::Minimized(MinimizedDefinition {
                nsibidi: non_empty(def.nsibidi),
                extra: def.extra,
            })
        }
    }
}

fn pass_through_definition(entry: DefinitionEntry) -> MinimizedDefinitionEntry {
    match entry {
        DefinitionEntry::Text(text) => MinimizedDefinitionEntry::Text(text),
        DefinitionEntry::Structured(def) => MinimizedDefinitionEntry::Untouched(def),
    }
}

fn minimize_example(example: Example) -> MinimizedExample {
    MinimizedExample {
        pronunciations: example.pronunciations,
        nsibidi: non_empty(example.nsibidi),
        extra: example.extra,
    }
}

fn minimize_dialect(dialect: Dialect) -> MinimizedDialect {
    MinimizedDialect {
        pronunciation: non_empty(dialect.pronunciation),
        extra: dialect.extra,
    }
}

fn minimize_term_refs(terms: Option<Vec<LinkedTermRef>>) -> Option<Vec<MinimizedTermRef>> {
    terms
        .filter(|t| !t.is_empty())
        .map(|t| t.into_iter().map(minimize_term_ref).collect())
}

fn minimize_term_ref(term: LinkedTermRef) -> MinimizedTermRef {
    match term {
        LinkedTermRef::Token(token) => MinimizedTermRef::Token(token),
        LinkedTermRef::Record(record) => MinimizedTermRef::Record(MinimizedLinkedRecord {
            word: record.word,
            id: record.id,
            object_id: record.object_id,
        }),
        LinkedTermRef::Other(value) => MinimizedTermRef::Other(value),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
