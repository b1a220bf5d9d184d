//! Academic event wire model.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use campus_core::{EventId, UserId};

use crate::audience::{Audience, normalize_audience};

/// An academic event as exchanged with the backend.
///
/// Field names on the wire are the backend's Spanish ones. The audience set
/// is serialized as a JSON-encoded string (one level — what the backend
/// expects on submission) and deserialized through [`normalize_audience`],
/// which also unwinds the stored double encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,

    #[serde(rename = "nombre_evento")]
    pub name: String,

    #[serde(rename = "tipo_evento")]
    pub kind: String,

    #[serde(rename = "fecha_realizacion", default)]
    pub date: Option<NaiveDate>,

    #[serde(rename = "hora_inicio", with = "time_of_day", default)]
    pub start_time: Option<NaiveTime>,

    #[serde(rename = "hora_fin", with = "time_of_day", default)]
    pub end_time: Option<NaiveTime>,

    #[serde(rename = "lugar")]
    pub place: String,

    #[serde(rename = "audiencia", with = "encoded_audience", default)]
    pub audience: BTreeSet<Audience>,

    #[serde(rename = "programa_educativo", default)]
    pub education_program: String,

    #[serde(rename = "responsable", default)]
    pub manager: Option<UserId>,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "cupo_maximo", default)]
    pub capacity: Option<u32>,
}

impl EventRecord {
    /// Canonical empty record used to seed a creation form: every field at
    /// its zero value and an empty audience set.
    pub fn empty() -> Self {
        Self {
            id: None,
            name: String::new(),
            kind: String::new(),
            date: None,
            start_time: None,
            end_time: None,
            place: String::new(),
            audience: BTreeSet::new(),
            education_program: String::new(),
            manager: None,
            description: String::new(),
            capacity: None,
        }
    }
}

/// Audience set as a JSON-string-encoded array on the wire.
mod encoded_audience {
    use super::*;
    use serde::{Deserializer, Serializer, ser::Error as _};

    pub fn serialize<S: Serializer>(
        set: &BTreeSet<Audience>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let labels: Vec<&str> = set.iter().map(Audience::as_str).collect();
        let encoded = serde_json::to_string(&labels).map_err(S::Error::custom)?;
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeSet<Audience>, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(normalize_audience(&raw.unwrap_or(Value::Null)))
    }
}

/// Times of day arrive either as `HH:MM:SS` (backend) or `HH:MM` (form).
mod time_of_day {
    use super::*;
    use serde::{Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format("%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw else { return Ok(None) };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid time of day {trimmed:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_record_has_zero_values() {
        let event = EventRecord::empty();
        assert!(event.id.is_none());
        assert!(event.name.is_empty());
        assert!(event.audience.is_empty());
        assert!(event.capacity.is_none());
        assert!(event.start_time.is_none());
    }

    #[test]
    fn serializes_audience_as_encoded_string() {
        let mut event = EventRecord::empty();
        event.name = "Semana de la computacion".to_string();
        event.audience.insert(Audience::Students);
        event.audience.insert(Audience::GeneralPublic);

        let value = serde_json::to_value(&event).unwrap();
        let audiencia = value["audiencia"].as_str().unwrap();
        let decoded: Vec<String> = serde_json::from_str(audiencia).unwrap();
        assert_eq!(decoded, ["students", "general_public"]);
    }

    #[test]
    fn deserializes_backend_shape() {
        let body = json!({
            "id": 12,
            "nombre_evento": "Taller de Rust",
            "tipo_evento": "Taller",
            "fecha_realizacion": "2026-09-15",
            "hora_inicio": "10:00:00",
            "hora_fin": "12:30:00",
            "lugar": "Aula Magna",
            "audiencia": "[\"students\",\"teachers\"]",
            "programa_educativo": "Ingeniería en Ciencias de la Computación",
            "responsable": 4,
            "descripcion": "Introduccion al lenguaje",
            "cupo_maximo": 40
        });

        let event: EventRecord = serde_json::from_value(body).unwrap();
        assert_eq!(event.id, Some(EventId::new(12)));
        assert_eq!(event.date, Some(NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()));
        assert_eq!(
            event.start_time,
            Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        );
        assert_eq!(event.manager, Some(UserId::new(4)));
        assert!(event.audience.contains(&Audience::Students));
        assert!(event.audience.contains(&Audience::Teachers));
    }

    #[test]
    fn accepts_form_style_times_without_seconds() {
        let body = json!({
            "nombre_evento": "x", "tipo_evento": "", "fecha_realizacion": null,
            "hora_inicio": "09:30", "hora_fin": "", "lugar": "",
            "audiencia": "[]", "programa_educativo": "", "responsable": null,
            "descripcion": "", "cupo_maximo": null
        });
        let event: EventRecord = serde_json::from_value(body).unwrap();
        assert_eq!(
            event.start_time,
            Some(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        );
        assert_eq!(event.end_time, None);
    }

    #[test]
    fn double_encoded_audience_survives_deserialization() {
        let inner = serde_json::to_string(&json!(["students"])).unwrap();
        let outer = serde_json::to_string(&inner).unwrap();
        let body = json!({
            "nombre_evento": "x", "tipo_evento": "", "fecha_realizacion": null,
            "hora_inicio": null, "hora_fin": null, "lugar": "",
            "audiencia": outer,
            "programa_educativo": "", "responsable": null,
            "descripcion": "", "cupo_maximo": null
        });
        let event: EventRecord = serde_json::from_value(body).unwrap();
        assert!(event.audience.contains(&Audience::Students));
    }

    #[test]
    fn malformed_audience_degrades_to_empty() {
        let body = json!({
            "nombre_evento": "x", "tipo_evento": "", "fecha_realizacion": null,
            "hora_inicio": null, "hora_fin": null, "lugar": "",
            "audiencia": "oops not json",
            "programa_educativo": "", "responsable": null,
            "descripcion": "", "cupo_maximo": null
        });
        let event: EventRecord = serde_json::from_value(body).unwrap();
        assert!(event.audience.is_empty());
    }
}
