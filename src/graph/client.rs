// Microsoft Graph client — authenticated calendar reads over HTTPS.
//
// A thin reqwest wrapper: one generic GET helper plus the paginated
// calendar-events fetch. All algorithmic work happens downstream.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::events::CalendarEvent;

/// Default Microsoft Graph API endpoint.
pub const DEFAULT_GRAPH_ENDPOINT: &str = "https://graph.microsoft.com/v1.0";

/// Authenticated Graph client for calendar reads.
pub struct GraphClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

/// One page of calendar events, with the continuation link Graph uses for
/// pagination.
#[derive(Deserialize)]
struct EventsPage {
    #[serde(default)]
    value: Vec<CalendarEvent>,
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
}

impl GraphClient {
    pub fn new(base_url: &str, access_token: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("workback/0.1 (meeting-value-estimation)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// GET an absolute URL with auth headers and deserialize the response.
    /// Graph timestamps are requested in UTC so downstream parsing sees one
    /// timezone.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<T> {
        debug!(url = url, "Graph GET request");

        let mut request = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header("Prefer", "outlook.timezone=\"UTC\"");
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request.send().await.context("Graph request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Graph returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .context("Failed to deserialize Graph response")
    }

    /// Fetch calendar events from the last `days_back` days, following
    /// pagination until the window is exhausted.
    pub async fn fetch_calendar_events(&self, days_back: i64) -> Result<Vec<CalendarEvent>> {
        let end = Utc::now();
        let start = end - Duration::days(days_back);

        let filter = format!(
            "start/dateTime ge '{}' and end/dateTime le '{}'",
            start.format("%Y-%m-%dT%H:%M:%S"),
            end.format("%Y-%m-%dT%H:%M:%S"),
        );

        let first_url = format!("{}/me/calendar/events", self.base_url);
        let params = [
            ("$filter", filter.as_str()),
            (
                "$select",
                "subject,bodyPreview,start,end,attendees,organizer,location",
            ),
            ("$top", "100"),
        ];

        let mut events = Vec::new();
        let mut page: EventsPage = self.get_json(&first_url, Some(&params)).await?;

        loop {
            events.extend(page.value);
            debug!(total = events.len(), "Fetched event page");

            match page.next_link {
                // nextLink already carries the filter and select params.
                Some(next) => page = self.get_json(&next, None).await?,
                None => break,
            }
        }

        Ok(events)
    }
}
