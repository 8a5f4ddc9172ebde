#![forbid(unsafe_code)]

//! Journal entries as delivered by the remote entries API.

use moodring_style::MoodSource;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// One journal entry.
///
/// `mood` is the comma-separated label list attached by the remote mood
/// analysis; it may be absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: PrimitiveDateTime,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<PrimitiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl MoodSource for JournalEntry {
    fn mood_field(&self) -> Option<&str> {
        self.mood.as_deref()
    }
}

/// `YYYY-MM-DD HH:MM:SS` on output; space or `T` separated, with optional
/// fractional seconds, on input.
pub mod timestamp {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::PrimitiveDateTime;
    use time::macros::format_description;

    pub fn parse(raw: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
        let raw = raw.trim();
        let spaced = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        let spaced_frac =
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");
        let iso = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
        let iso_frac =
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

        PrimitiveDateTime::parse(raw, spaced)
            .or_else(|_| PrimitiveDateTime::parse(raw, spaced_frac))
            .or_else(|_| PrimitiveDateTime::parse(raw, iso))
            .or_else(|_| PrimitiveDateTime::parse(raw, iso_frac))
    }

    pub fn format(value: &PrimitiveDateTime) -> Result<String, time::error::Format> {
        value.format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
    }

    pub fn serialize<S: Serializer>(
        value: &PrimitiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let text = format(value).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PrimitiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|err| D::Error::custom(format!("invalid timestamp {raw:?}: {err}")))
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::PrimitiveDateTime;

        pub fn serialize<S: Serializer>(
            value: &Option<PrimitiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<PrimitiveDateTime>, D::Error> {
            use serde::de::Error as _;
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw)
                    .map(Some)
                    .map_err(|err| D::Error::custom(format!("invalid timestamp {raw:?}: {err}"))),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn deserializes_api_payload() {
        let json = r#"{
            "id": 7,
            "title": "Morning pages",
            "content": "Coffee and sunshine.",
            "mood": "happy,grateful",
            "created_at": "2024-03-02 08:15:00",
            "updated_at": "2024-03-02T09:00:00.123456",
            "user_id": 3
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.mood.as_deref(), Some("happy,grateful"));
        assert_eq!(entry.created_at, datetime!(2024-03-02 08:15:00));
        assert_eq!(
            entry.updated_at.map(|t| t.replace_nanosecond(0).unwrap()),
            Some(datetime!(2024-03-02 09:00:00))
        );
        assert_eq!(entry.user_id, Some(3));
    }

    #[test]
    fn null_and_missing_moods_are_none() {
        let with_null = r#"{"id":1,"title":"a","content":"b","mood":null,"created_at":"2024-01-01 00:00:00"}"#;
        let missing = r#"{"id":1,"title":"a","content":"b","created_at":"2024-01-01T00:00:00"}"#;
        let a: JournalEntry = serde_json::from_str(with_null).unwrap();
        let b: JournalEntry = serde_json::from_str(missing).unwrap();
        assert_eq!(a.mood, None);
        assert_eq!(a, b);
        assert_eq!(a.mood_field(), None);
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let json = r#"{"id":1,"title":"a","content":"b","created_at":"yesterday"}"#;
        let err = serde_json::from_str::<JournalEntry>(json).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
    }

    #[test]
    fn serializes_spaced_timestamp() {
        let entry = JournalEntry {
            id: 2,
            title: "t".into(),
            content: "c".into(),
            mood: Some("calm".into()),
            created_at: datetime!(2023-12-31 23:59:01),
            updated_at: None,
            user_id: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["created_at"], "2023-12-31 23:59:01");
        assert!(json.get("updated_at").is_none());
    }
}
