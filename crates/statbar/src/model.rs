use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Widget kind as tagged by the service. Report payloads historically omit
/// the field, so `Item::kind` stays optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Countdown,
    Chart,
    Location,
    Report,
}

/// Item identifiers arrive as either a JSON string or an integer depending
/// on the service version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One widget instance as returned by the service. Immutable once fetched;
/// everything derived (local time, diff, formatted value) is computed at
/// render time.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub kind: Option<Kind>,
    #[serde(default, alias = "name")]
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub more: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub meta: BTreeMap<String, serde_json::Value>,
}

impl Item {
    /// String form of the id, used for mute bookkeeping.
    pub fn id_key(&self) -> String {
        self.id.to_string()
    }

    pub fn hidden(&self) -> bool {
        self.meta
            .get("hide")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    /// Unit code for a chart value: the `unit` field, else a `meta` hint.
    pub fn unit_hint(&self) -> Option<&str> {
        match self.unit.as_deref() {
            Some(u) if !u.trim().is_empty() => Some(u),
            _ => self
                .meta
                .get("unit")
                .and_then(serde_json::Value::as_str)
                .filter(|u| !u.trim().is_empty()),
        }
    }
}

/// The service wraps every listing in `{"results": [...]}`; nothing else in
/// the envelope is consumed.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub results: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_string_and_int_ids() {
        let env: Envelope = serde_json::from_str(
            r#"{"results": [
                {"id": 7, "kind": "chart", "label": "CPU", "value": 0.73, "unit": "percent"},
                {"id": "abc", "kind": "countdown", "label": "Launch",
                 "created": "2026-09-01T12:00:00Z", "description": "T-0"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(env.results.len(), 2);
        assert_eq!(env.results[0].id_key(), "7");
        assert_eq!(env.results[1].id_key(), "abc");
        assert_eq!(env.results[0].kind, Some(Kind::Chart));
        assert!(env.results[1].created.is_some());
    }

    #[test]
    fn report_item_without_kind_uses_name_alias() {
        let item: Item = serde_json::from_str(
            r#"{"id": 1, "name": "Daily summary", "date": "2026-08-30", "url": "/report/1"}"#,
        )
        .unwrap();
        assert_eq!(item.kind, None);
        assert_eq!(item.label, "Daily summary");
        assert_eq!(item.date.as_deref(), Some("2026-08-30"));
    }

    #[test]
    fn meta_hide_flag_and_unit_hint() {
        let item: Item = serde_json::from_str(
            r#"{"id": 2, "kind": "chart", "label": "Disk", "value": 10,
                "meta": {"hide": true, "unit": "gigabyte"}}"#,
        )
        .unwrap();
        assert!(item.hidden());
        assert_eq!(item.unit_hint(), Some("gigabyte"));
    }
}
