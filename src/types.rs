use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record of the public events feed.
///
/// Only the envelope is typed; `payload` stays a raw JSON value because its
/// shape depends on `kind` and is decoded by the matching formatter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub repo: Repo,
    #[serde(default)]
    pub payload: Value,
}

impl Event {
    /// Builds an event from one feed record.
    ///
    /// Fields that are missing, `null` or of the wrong shape fall back to
    /// their defaults, so a malformed record formats to nothing instead of
    /// failing the whole feed.
    pub fn from_value(record: &Value) -> Self {
        let kind = record
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let repo = record
            .get("repo")
            .and_then(|r| Repo::deserialize(r).ok())
            .unwrap_or_default();
        let payload = record.get("payload").cloned().unwrap_or_default();
        Event {
            kind,
            repo,
            payload,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub name: String,
}

/// A formatted event as emitted by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityLine {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: String,
    pub summary: String,
}

impl ActivityLine {
    pub fn new(event: &Event, summary: String) -> Self {
        ActivityLine {
            kind: event.kind.clone(),
            repo: event.repo.name.clone(),
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_envelope_fields_default_to_empty() {
        let e: Event = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(e.kind, "");
        assert_eq!(e.repo.name, "");
        assert!(e.payload.is_null());
    }

    #[test]
    fn odd_records_fall_back_to_defaults() {
        let records: Vec<Value> = serde_json::from_str(
            r#"[
                {"type":null,"repo":{"name":"x/y"}},
                {"type":"WatchEvent","repo":null,"payload":[]},
                {"type":7,"repo":{"name":42}},
                "not an object",
                null
            ]"#,
        )
        .unwrap();
        let events: Vec<Event> = records.iter().map(Event::from_value).collect();
        assert_eq!(events[0].kind, "");
        assert_eq!(events[0].repo.name, "x/y");
        assert_eq!(events[1].kind, "WatchEvent");
        assert_eq!(events[1].repo.name, "");
        assert!(events[1].payload.is_array());
        assert_eq!(events[2].kind, "");
        assert_eq!(events[2].repo.name, "");
        for e in &events[3..] {
            assert_eq!(e.kind, "");
            assert!(e.payload.is_null());
        }
    }

    #[test]
    fn well_formed_record_matches_derive() {
        let v: Value = serde_json::from_str(
            r#"{"type":"ForkEvent","repo":{"name":"a/b"},"payload":{"forkee":{"full_name":"c/b"}}}"#,
        )
        .unwrap();
        let lenient = Event::from_value(&v);
        let strict: Event = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(lenient.kind, strict.kind);
        assert_eq!(lenient.repo.name, strict.repo.name);
        assert_eq!(lenient.payload, strict.payload);
    }

    #[test]
    fn json_uses_type_key() {
        let e: Event =
            serde_json::from_str(r#"{"type":"WatchEvent","repo":{"name":"a/b"}}"#).unwrap();
        let line = ActivityLine::new(&e, "Started watching a/b".to_string());
        let s = serde_json::to_string(&line).unwrap();
        assert!(s.contains("\"type\":\"WatchEvent\""));
        assert!(s.contains("\"repo\":\"a/b\""));
        assert!(s.contains("\"summary\":\"Started watching a/b\""));
    }
}
