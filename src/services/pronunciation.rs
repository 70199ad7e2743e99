use serde_json::Value;

use crate::model::example::Example;

/// Reshapes examples for the examples endpoint: the `pronunciations` array is
/// collapsed into the single `pronunciation` audio string clients expect. The
/// first recorded pronunciation wins; no recording yields an empty string.
pub fn flatten_pronunciations(examples: &[Example]) -> Vec<Example> {
    examples
        .iter()
        .cloned()
        .map(|mut example| {
            let audio = example
                .pronunciations
                .as_ref()
                .and_then(|p| p.first())
                .map(|p| p.audio.clone())
                .unwrap_or_default();
            example.pronunciation = Some(Value::String(audio));
            example.pronunciations = None;
            example
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn example(v: serde_json::Value) -> Example {
        serde_json::from_value(v).expect("example fixture must deserialize")
    }

    #[test]
    fn first_recorded_audio_becomes_the_pronunciation() {
        let out = flatten_pronunciations(&[example(json!({
            "igbo": "ọ na-aga",
            "pronunciations": [
                { "audio": "first-uri", "speaker": "s1" },
                { "audio": "second-uri" }
            ]
        }))]);
        let out = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(out.get("pronunciation"), Some(&json!("first-uri")));
        assert!(out.get("pronunciations").is_none());
    }

    #[test]
    fn missing_recordings_yield_an_empty_pronunciation() {
        let out = flatten_pronunciations(&[example(json!({ "igbo": "ute" }))]);
        let out = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(out.get("pronunciation"), Some(&json!("")));

        let out = flatten_pronunciations(&[example(json!({ "pronunciations": [] }))]);
        let out = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(out.get("pronunciation"), Some(&json!("")));
    }
}
