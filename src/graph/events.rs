// Calendar event schema — the subset of Graph event fields we read.
//
// Every field is optional. Real calendars contain events with missing
// subjects, empty bodies, no location, and timestamps of varying precision;
// absence degrades to placeholder text downstream, never to an error.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One calendar event as returned by Microsoft Graph (or a local export).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarEvent {
    pub subject: Option<String>,
    pub body_preview: Option<String>,
    pub attendees: Vec<Attendee>,
    pub start: Option<EventDateTime>,
    pub end: Option<EventDateTime>,
    pub location: Option<Location>,
    pub organizer: Option<Recipient>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attendee {
    pub email_address: Option<EmailAddress>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDateTime {
    pub date_time: Option<String>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipient {
    pub email_address: Option<EmailAddress>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailAddress {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl CalendarEvent {
    /// Subject, defaulting to "Untitled" when absent or empty.
    pub fn subject_or_untitled(&self) -> &str {
        match self.subject.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "Untitled",
        }
    }

    /// Whether a non-empty subject is present (half of the richness
    /// predicate; the other half is the attendee count).
    pub fn has_subject(&self) -> bool {
        self.subject.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }

    /// Raw start timestamp string, if any.
    pub fn start_date_time(&self) -> Option<&str> {
        self.start.as_ref()?.date_time.as_deref()
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location
            .as_ref()?
            .display_name
            .as_deref()
            .filter(|n| !n.is_empty())
    }

    pub fn organizer_address(&self) -> Option<&str> {
        self.organizer
            .as_ref()?
            .email_address
            .as_ref()?
            .address
            .as_deref()
            .filter(|a| !a.is_empty())
    }

    pub fn organizer_name(&self) -> Option<&str> {
        self.organizer
            .as_ref()?
            .email_address
            .as_ref()?
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
    }

    /// "Name (email)" when both are known, either alone otherwise,
    /// "Unknown" when neither is.
    pub fn organizer_display(&self) -> String {
        match (self.organizer_name(), self.organizer_address()) {
            (Some(name), Some(address)) => format!("{name} ({address})"),
            (Some(name), None) => name.to_string(),
            (None, Some(address)) => address.to_string(),
            (None, None) => "Unknown".to_string(),
        }
    }
}

/// Parse a calendar export in any of the shapes seen in the wild: a bare
/// array of events, `{"events": [...]}`, `{"value": [...]}` (the Graph
/// page shape), or a single event object.
pub fn parse_events_json(data: serde_json::Value) -> Result<Vec<CalendarEvent>> {
    let list = match data {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => {
            if let Some(serde_json::Value::Array(items)) = map.remove("events") {
                items
            } else if let Some(serde_json::Value::Array(items)) = map.remove("value") {
                items
            } else {
                vec![serde_json::Value::Object(map)]
            }
        }
        _ => anyhow::bail!(
            "Could not parse calendar data: expected an array or an object with an 'events' key"
        ),
    };

    list.into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| anyhow::anyhow!("Malformed event: {e}"))
        })
        .collect()
}
