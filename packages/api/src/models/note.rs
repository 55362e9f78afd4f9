use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A note owned by the current user.
///
/// Wire names are camelCase (`createdAt`, `updatedAt`) with RFC 3339 timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creation date as shown on a note card, e.g. `Oct 18, 2026`, in the
    /// viewer's local time zone.
    pub fn created_label(&self) -> String {
        self.created_label_in(&Local)
    }

    pub fn created_label_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display,
    {
        self.created_at
            .with_timezone(tz)
            .format("%b %-d, %Y")
            .to_string()
    }

    /// Card body text; empty notes read `No content`.
    pub fn preview(&self) -> &str {
        if self.content.trim().is_empty() {
            "No content"
        } else {
            &self.content
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn test_decode_camel_case() {
        let note: Note = serde_json::from_str(
            r#"{
                "id": "n1",
                "title": "Groceries",
                "content": "milk",
                "createdAt": "2026-10-18T09:30:00.000Z",
                "updatedAt": "2026-10-18T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(note.id, "n1");
        assert_eq!(note.created_label_in(&Utc), "Oct 18, 2026");
        assert_eq!(note.preview(), "milk");
    }

    #[test]
    fn test_empty_content_preview() {
        let note: Note = serde_json::from_str(
            r#"{"id":"n2","title":"t","createdAt":"2026-01-05T00:00:00Z","updatedAt":"2026-01-05T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(note.content, "");
        assert_eq!(note.preview(), "No content");
        assert_eq!(note.created_label_in(&Utc), "Jan 5, 2026");
    }

    #[test]
    fn test_label_uses_viewer_day() {
        let note: Note = serde_json::from_str(
            r#"{"id":"n3","title":"late","createdAt":"2026-10-18T23:30:00Z","updatedAt":"2026-10-18T23:30:00Z"}"#,
        )
        .unwrap();
        let berlin = FixedOffset::east_opt(2 * 3600).unwrap();
        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();
        assert_eq!(note.created_label_in(&berlin), "Oct 19, 2026");
        assert_eq!(note.created_label_in(&new_york), "Oct 18, 2026");
    }
}
