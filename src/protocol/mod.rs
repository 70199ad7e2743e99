use serde_json::{json, Value};

use crate::model::example::Example;
use crate::model::version::ApiVersion;
use crate::model::word::WordRecord;
use crate::services::response::{ExampleResponseData, WordResponseData};
use crate::services::{minimize, pronunciation};

mod command;
use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload<'a>(req: &'a Value) -> &'a Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn get_version(payload: &Value) -> ApiVersion {
    payload
        .get("version")
        .and_then(|v| v.as_str())
        .map(ApiVersion::parse)
        .unwrap_or_default()
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn parse_words_from_payload(payload: &Value) -> Result<Vec<WordRecord>, String> {
    let arr = payload
        .get("words")
        .and_then(|v| v.as_array())
        .ok_or_else(|| "payload.words must be an array".to_string())?;

    let mut words: Vec<WordRecord> = Vec::with_capacity(arr.len());

    for (i, v) in arr.iter().cloned().enumerate() {
        match serde_json::from_value::<WordRecord>(v) {
            Ok(w) => words.push(w),
            Err(e) => return Err(format!("invalid word at index {}: {}", i, e)),
        }
    }

    Ok(words)
}

fn parse_examples_from_payload(payload: &Value) -> Result<Vec<Example>, String> {
    let arr = payload
        .get("examples")
        .and_then(|v| v.as_array())
        .ok_or_else(|| "payload.examples must be an array".to_string())?;

    let mut examples: Vec<Example> = Vec::with_capacity(arr.len());

    for (i, v) in arr.iter().cloned().enumerate() {
        match serde_json::from_value::<Example>(v) {
            Ok(e) => examples.push(e),
            Err(e) => return Err(format!("invalid example at index {}: {}", i, e)),
        }
    }

    Ok(examples)
}

pub fn handle(input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let payload = get_payload(&req);

    match Command::from(get_cmd(&req)) {
        Command::Ping => ok(id, json!({ "message": "okwu-core alive" })),

        Command::MinimizeWords => {
            let words = match parse_words_from_payload(payload) {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };
            let version = get_version(payload);
            let minimized = minimize::minimize_words(&words, version);
            let data = WordResponseData::new(minimized);
            ok(id, serde_json::to_value(data).unwrap_or(json!({})))
        }

        Command::FormatExamples => {
            let examples = match parse_examples_from_payload(payload) {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };
            let formatted = pronunciation::flatten_pronunciations(&examples);
            let data = ExampleResponseData::new(formatted);
            ok(id, serde_json::to_value(data).unwrap_or(json!({})))
        }

        Command::Unknown => err(id, "unknown command"),
    }
}
