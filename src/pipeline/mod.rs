// Meeting analysis pipeline: score -> select -> assemble prompt entries.
//
// Single-pass and stateless between invocations. Per-meeting problems are
// absorbed at the meeting boundary; only an empty input or a dead embedder
// abort the run.

pub mod prompts;
pub mod score;
pub mod select;

use anyhow::Result;

use crate::error::EngineError;
use crate::graph::events::CalendarEvent;
use crate::pipeline::prompts::PromptEntry;
use crate::scoring::classifier::MeetingClassifier;

/// Run the full pipeline over fetched meetings and return the assembled
/// prompt entries (synthetic + featured + candidates, continuously
/// numbered).
///
/// Fails with [`EngineError::NoMeetings`] when the input is empty — before
/// any scoring or bucketing happens. A non-empty input where nothing
/// qualifies still produces a (synthetic-only) package.
pub async fn run(
    classifier: &MeetingClassifier,
    meetings: Vec<CalendarEvent>,
    user_email: &str,
    concurrency: usize,
) -> Result<Vec<PromptEntry>> {
    if meetings.is_empty() {
        return Err(EngineError::NoMeetings.into());
    }

    let scored = score::score_events(
        classifier,
        meetings,
        score::MIN_ATTENDEES_FOR_ANALYSIS,
        Some(user_email),
        concurrency,
    )
    .await?;

    let selection = select::select(scored);
    Ok(prompts::build_prompt_entries(&selection))
}
