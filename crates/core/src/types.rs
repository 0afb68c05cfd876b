use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ACTOR, DEFAULT_ORIGIN};

/// Severity of a recorded event
///
/// Serialized in lowercase (`"info"`, `"warning"`, ...) to match the
/// persisted snapshot format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Success,
    ];

    /// Human-readable label, as shown in tables and CSV exports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Success => "Success",
        }
    }
}

/// Kind of activity an event describes
///
/// Serialized in snake_case under the wire field `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    PageAccess,
    DataChange,
    SystemConfig,
    UserAction,
}

impl LogCategory {
    pub const ALL: [LogCategory; 4] = [
        LogCategory::PageAccess,
        LogCategory::DataChange,
        LogCategory::SystemConfig,
        LogCategory::UserAction,
    ];

    /// Human-readable label, as shown in tables and CSV exports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LogCategory::PageAccess => "Page Access",
            LogCategory::DataChange => "Data Change",
            LogCategory::SystemConfig => "System Config",
            LogCategory::UserAction => "User Action",
        }
    }
}

/// One immutable record of an application event
///
/// Wire field names (`type`, `user`, `ip`) match the snapshot format the
/// original dashboard persisted, so existing snapshots load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    #[serde(rename = "type")]
    pub category: LogCategory,
    #[serde(rename = "user")]
    pub actor: String,
    pub description: String,
    #[serde(default)]
    pub details: String,
    #[serde(rename = "ip")]
    pub origin: String,
}

impl LogEntry {
    /// Whether the entry carries a details payload
    #[must_use]
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }
}

/// Builder for the optional parts of a `record` call
///
/// Keeps recording call sites readable without positional optionals:
/// level, category, and description are mandatory; details, actor, and
/// origin fall back to the entry defaults when unset or empty.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub level: LogLevel,
    pub category: LogCategory,
    pub description: String,
    pub details: Option<String>,
    pub actor: Option<String>,
    pub origin: Option<String>,
}

impl EventDraft {
    pub fn new(level: LogLevel, category: LogCategory, description: impl Into<String>) -> Self {
        Self {
            level,
            category,
            description: description.into(),
            details: None,
            actor: None,
            origin: None,
        }
    }

    /// Attach a free-text or JSON-as-text payload
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Name the originating user or subsystem
    #[must_use]
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Record the caller identity (IP address or equivalent)
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Materialize the draft into an entry with an allocated id and timestamp
    #[must_use]
    pub fn into_entry(self, id: u64, timestamp: DateTime<Utc>) -> LogEntry {
        LogEntry {
            id,
            timestamp,
            level: self.level,
            category: self.category,
            actor: self
                .actor
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| DEFAULT_ACTOR.to_string()),
            description: self.description,
            details: self.details.unwrap_or_default(),
            origin: self
                .origin
                .filter(|o| !o.is_empty())
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> LogEntry {
        EventDraft::new(LogLevel::Warning, LogCategory::DataChange, "model updated")
            .with_details("{\"model\":\"M-102\"}")
            .with_actor("admin")
            .with_origin("10.0.0.8")
            .into_entry(7, Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap())
    }

    #[test]
    fn wire_format_uses_renamed_fields() {
        let value = serde_json::to_value(sample_entry()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "timestamp",
            "level",
            "type",
            "user",
            "description",
            "details",
            "ip",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(obj["level"], "warning");
        assert_eq!(obj["type"], "data_change");
        assert_eq!(obj["user"], "admin");
        assert_eq!(obj["ip"], "10.0.0.8");
    }

    #[test]
    fn wire_format_round_trips() {
        let entry = sample_entry();
        let raw = serde_json::to_string(&entry).unwrap();
        let back: LogEntry = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn missing_details_deserializes_as_empty() {
        let raw = r#"{
            "id": 1,
            "timestamp": "2025-03-14T09:26:53Z",
            "level": "info",
            "type": "page_access",
            "user": "System",
            "description": "opened dashboard",
            "ip": "127.0.0.1"
        }"#;
        let entry: LogEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.details, "");
        assert!(!entry.has_details());
    }

    #[test]
    fn draft_applies_defaults_for_missing_and_empty_fields() {
        let entry = EventDraft::new(LogLevel::Info, LogCategory::PageAccess, "opened page")
            .with_actor("")
            .into_entry(1, Utc::now());
        assert_eq!(entry.actor, DEFAULT_ACTOR);
        assert_eq!(entry.origin, DEFAULT_ORIGIN);
        assert_eq!(entry.details, "");
    }

    #[test]
    fn labels_cover_every_variant() {
        for level in LogLevel::ALL {
            assert!(!level.label().is_empty());
        }
        for category in LogCategory::ALL {
            assert!(!category.label().is_empty());
        }
        assert_eq!(LogCategory::SystemConfig.label(), "System Config");
    }
}
