//! Event audience labels, the decode shim and the visibility filter.
//!
//! The backend persists the audience set as a JSON-encoded string and has
//! been observed encoding it twice (a string containing a JSON string).
//! [`normalize_audience`] tolerates zero, one or two levels of encoding —
//! never more — and degrades to the empty set on anything malformed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use campus_core::Role;

use crate::EventRecord;

/// One audience label.
///
/// Exactly three labels are canonical; anything else is preserved as
/// [`Audience::Other`] so a round trip does not lose data, but unrecognized
/// labels never influence filtering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Audience {
    Students,
    Teachers,
    GeneralPublic,
    Other(String),
}

impl Audience {
    pub fn as_str(&self) -> &str {
        match self {
            Audience::Students => "students",
            Audience::Teachers => "teachers",
            Audience::GeneralPublic => "general_public",
            Audience::Other(label) => label,
        }
    }

    /// Map a stored label onto a canonical variant. The legacy client wrote
    /// Spanish display labels; both generations are accepted.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "students" | "Estudiantes" => Audience::Students,
            "teachers" | "Profesores" => Audience::Teachers,
            "general_public" | "Público general" => Audience::GeneralPublic,
            other => Audience::Other(other.to_string()),
        }
    }
}

impl core::fmt::Display for Audience {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Audience {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Audience {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Audience::from_label(&raw))
    }
}

/// Materialize the audience set from its raw stored value.
///
/// Decoding steps, in order:
/// 1. a JSON array is taken as-is;
/// 2. a JSON string is parsed once; if that yields another string it is
///    parsed a second time (the double-encoding shim) — parsing never goes
///    deeper than two levels;
/// 3. everything else, and any parse failure, yields the empty set. The
///    failure is logged, not surfaced: a malformed audience must not break
///    the event list.
pub fn normalize_audience(raw: &Value) -> BTreeSet<Audience> {
    let value = match raw {
        Value::Array(_) => raw.clone(),
        Value::Null => return BTreeSet::new(),
        Value::String(text) => match decode_levels(text) {
            Some(value) => value,
            None => {
                warn!(raw = %text, "audience field is not decodable JSON, treating as empty");
                return BTreeSet::new();
            }
        },
        other => {
            warn!(raw = %other, "audience field has unexpected shape, treating as empty");
            return BTreeSet::new();
        }
    };

    let Value::Array(items) = value else {
        warn!("audience field did not decode to a sequence, treating as empty");
        return BTreeSet::new();
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .map(Audience::from_label)
        .collect()
}

// At most two parses: one for the normal string encoding, one more for the
// observed double encoding.
fn decode_levels(text: &str) -> Option<Value> {
    let once = serde_json::from_str::<Value>(text).ok()?;
    match once {
        Value::String(inner) => serde_json::from_str::<Value>(&inner).ok(),
        other => Some(other),
    }
}

/// Filter `events` down to those visible to `role`, preserving input order.
///
/// Administrators see everything. Teachers see events aimed at teachers or
/// the general public, students those aimed at students or the general
/// public. An absent or unrecognized role falls back to the unfiltered list.
pub fn visible_events(role: Option<Role>, events: Vec<EventRecord>) -> Vec<EventRecord> {
    let required: &[Audience] = match role {
        Some(Role::Administrator) => return events,
        Some(Role::Teacher) => &[Audience::Teachers, Audience::GeneralPublic],
        Some(Role::Student) => &[Audience::Students, Audience::GeneralPublic],
        None => {
            debug!("no viewer role, serving the unfiltered event list");
            return events;
        }
    };

    events
        .into_iter()
        .filter(|event| required.iter().any(|label| event.audience.contains(label)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labels(set: &BTreeSet<Audience>) -> Vec<&str> {
        set.iter().map(Audience::as_str).collect()
    }

    #[test]
    fn plain_array_passes_through() {
        let raw = json!(["students", "teachers"]);
        let set = normalize_audience(&raw);
        assert_eq!(labels(&set), ["students", "teachers"]);
    }

    #[test]
    fn single_encoded_string_decodes() {
        let raw = Value::String(r#"["students","general_public"]"#.to_string());
        let set = normalize_audience(&raw);
        assert_eq!(labels(&set), ["students", "general_public"]);
    }

    #[test]
    fn double_encoded_string_decodes() {
        let once = serde_json::to_string(&json!(["students", "teachers"])).unwrap();
        // The stored value is the JSON encoding of the already-encoded text.
        let raw = Value::String(serde_json::to_string(&once).unwrap());
        let set = normalize_audience(&raw);
        assert_eq!(labels(&set), ["students", "teachers"]);
    }

    #[test]
    fn single_and_double_encoding_agree() {
        let source = json!(["students", "teachers"]);
        let once = Value::String(serde_json::to_string(&source).unwrap());
        let twice = Value::String(serde_json::to_string(&once.as_str().unwrap()).unwrap());
        assert_eq!(normalize_audience(&once), normalize_audience(&twice));
    }

    #[test]
    fn triple_encoding_is_not_unwound() {
        let source = json!(["students"]);
        let mut text = serde_json::to_string(&source).unwrap();
        for _ in 0..2 {
            text = serde_json::to_string(&text).unwrap();
        }
        // Two parses still leave a string, so the result is empty.
        assert!(normalize_audience(&Value::String(text)).is_empty());
    }

    #[test]
    fn malformed_inputs_yield_empty_set() {
        for raw in [
            Value::String("not json".to_string()),
            Value::String("{\"oops\":1}".to_string()),
            json!(42),
            json!({"a": 1}),
            Value::Null,
        ] {
            assert!(normalize_audience(&raw).is_empty(), "raw = {raw}");
        }
    }

    #[test]
    fn legacy_spanish_labels_map_to_canonical() {
        let raw = json!(["Estudiantes", "Profesores", "Público general"]);
        let set = normalize_audience(&raw);
        assert_eq!(labels(&set), ["students", "teachers", "general_public"]);
    }

    #[test]
    fn unknown_labels_are_preserved() {
        let raw = json!(["students", "alumni"]);
        let set = normalize_audience(&raw);
        assert!(set.contains(&Audience::Other("alumni".to_string())));
    }

    fn event_with(labels: &[Audience]) -> EventRecord {
        let mut event = EventRecord::empty();
        event.audience = labels.iter().cloned().collect();
        event
    }

    #[test]
    fn visibility_matrix() {
        let make = || {
            vec![
                event_with(&[Audience::Students]),
                event_with(&[Audience::Teachers]),
                event_with(&[Audience::GeneralPublic]),
                event_with(&[]),
            ]
        };

        let student_view = visible_events(Some(Role::Student), make());
        assert_eq!(student_view.len(), 2);
        assert!(student_view[0].audience.contains(&Audience::Students));
        assert!(student_view[1].audience.contains(&Audience::GeneralPublic));

        let teacher_view = visible_events(Some(Role::Teacher), make());
        assert_eq!(teacher_view.len(), 2);
        assert!(teacher_view[0].audience.contains(&Audience::Teachers));
        assert!(teacher_view[1].audience.contains(&Audience::GeneralPublic));

        assert_eq!(visible_events(Some(Role::Administrator), make()).len(), 4);
        assert_eq!(visible_events(None, make()).len(), 4);
    }

    #[test]
    fn unknown_labels_do_not_grant_visibility() {
        let events = vec![event_with(&[Audience::Other("alumni".to_string())])];
        assert!(visible_events(Some(Role::Student), events).is_empty());
    }
}
