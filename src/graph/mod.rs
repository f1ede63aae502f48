// Microsoft Graph calendar source — auth, fetch, and the event schema.
//
// Everything in here is a thin wrapper: the scoring engine consumes
// CalendarEvent values and does not care where they came from (Graph API
// or a local JSON export).

pub mod auth;
pub mod client;
pub mod events;
