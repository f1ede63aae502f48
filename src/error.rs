// Systemic error kinds that abort a run.
//
// Per-meeting problems (a malformed date, a missing subject or location)
// degrade to placeholder text at the meeting boundary and never appear here.
// Only two failures escalate: the embedding model can't be used at all, or
// the calendar window contained nothing to analyze.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The embedding model could not be loaded or invoked. Nothing
    /// downstream can run without embeddings, so this is fatal whether it
    /// happens at classifier construction or on a per-meeting call.
    #[error("embedding model unavailable: {0}")]
    ModelUnavailable(String),

    /// The calendar fetch (or local file) produced no meetings at all.
    /// Distinct from "fewer than 5 rich meetings", which only shrinks the
    /// featured bucket and emits a diagnostic.
    #[error("no meetings found to analyze")]
    NoMeetings,
}
