// Scoring pass — classify and estimate value for every meeting.
//
// Meetings are independent, so they're scored concurrently with
// buffer_unordered; results are re-sorted by input position afterwards so
// the selection step's stable-sort tie behavior sees the original order.

use anyhow::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::debug;

use crate::graph::events::CalendarEvent;
use crate::scoring::anchors::MeetingCategory;
use crate::scoring::classifier::MeetingClassifier;

/// Meetings with fewer attendees than this are noise (1:1s, solo blocks)
/// and are skipped by the `run` pipeline before scoring.
pub const MIN_ATTENDEES_FOR_ANALYSIS: usize = 2;

/// The calendar owner's relationship to a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Organizer,
    Participant,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Organizer => "organizer",
            UserRole::Participant => "participant",
        }
    }
}

/// A meeting plus everything the scoring engine derived for it.
#[derive(Debug, Clone)]
pub struct ScoredMeeting {
    pub event: CalendarEvent,
    pub category: MeetingCategory,
    pub confidence: f64,
    pub score: f64,
    pub reasoning: String,
    pub role: UserRole,
}

/// Score every event with at least `min_attendees` attendees.
///
/// `user_email`, when given, drives organizer/participant role detection;
/// without it every meeting is treated as participant. Output preserves
/// input order. Embedder failures are systemic and abort the batch;
/// there are no per-meeting recoverable errors at this stage.
pub async fn score_events(
    classifier: &MeetingClassifier,
    events: Vec<CalendarEvent>,
    min_attendees: usize,
    user_email: Option<&str>,
    concurrency: usize,
) -> Result<Vec<ScoredMeeting>> {
    let eligible: Vec<CalendarEvent> = events
        .into_iter()
        .filter(|event| {
            let keep = event.attendee_count() >= min_attendees;
            if !keep {
                debug!(
                    subject = event.subject_or_untitled(),
                    attendees = event.attendee_count(),
                    "Skipping small meeting"
                );
            }
            keep
        })
        .collect();

    if eligible.is_empty() {
        return Ok(Vec::new());
    }

    let pb = ProgressBar::new(eligible.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Scoring [{bar:30}] {pos}/{len} ({eta})")
            .expect("valid template"),
    );

    let results: Vec<(usize, Result<ScoredMeeting, crate::error::EngineError>)> =
        stream::iter(eligible.into_iter().enumerate().map(|(index, event)| {
            let pb = pb.clone();
            async move {
                let assessment = classifier
                    .assess(
                        event.subject_or_untitled(),
                        event.body_preview.as_deref(),
                        event.attendee_count(),
                    )
                    .await;
                pb.inc(1);

                let scored = assessment.map(|a| {
                    let role = match (user_email, event.organizer_address()) {
                        (Some(user), Some(organizer))
                            if organizer.eq_ignore_ascii_case(user) =>
                        {
                            UserRole::Organizer
                        }
                        _ => UserRole::Participant,
                    };
                    ScoredMeeting {
                        event,
                        category: a.category,
                        confidence: a.confidence,
                        score: a.score,
                        reasoning: a.reasoning,
                        role,
                    }
                });
                (index, scored)
            }
        }))
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    pb.finish_and_clear();

    // Restore input order — buffer_unordered yields in completion order.
    let mut indexed: Vec<(usize, ScoredMeeting)> = results
        .into_iter()
        .map(|(index, result)| result.map(|scored| (index, scored)))
        .collect::<Result<_, _>>()?;
    indexed.sort_by_key(|(index, _)| *index);

    Ok(indexed.into_iter().map(|(_, scored)| scored).collect())
}
