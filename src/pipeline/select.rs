// Selection and ranking — sort, filter, and partition scored meetings.
//
// Sort is stable and descending by score, so tied meetings keep their
// input order (chronological or API-pagination order — not normalized
// further). Only "rich" meetings qualify for the output buckets.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::warn;

use crate::pipeline::score::ScoredMeeting;

/// Top-of-list bucket size.
pub const FEATURED_LIMIT: usize = 5;
/// Runner-up bucket size (positions 6-20 of the qualifying list).
pub const CANDIDATE_LIMIT: usize = 15;

/// The two real-meeting output buckets. Disjoint by construction, both
/// drawn from the richness-filtered, score-sorted sequence.
#[derive(Debug, Default)]
pub struct Selection {
    pub featured: Vec<ScoredMeeting>,
    pub candidates: Vec<ScoredMeeting>,
}

/// Richness predicate: enough metadata to make a useful prompt. Meetings
/// failing this are excluded from every output bucket.
pub fn is_rich(meeting: &ScoredMeeting) -> bool {
    meeting.event.attendee_count() >= 2 && meeting.event.has_subject()
}

/// Partition scored meetings into Featured (top 5) and Candidates (next 15).
///
/// Duplicates collapse to their highest-scored instance: there is no stable
/// event id across source formats, so identity is the subject string plus
/// the attendee count. Fewer than 5 qualifying meetings is not an error —
/// the featured bucket is simply shorter and a diagnostic is emitted.
pub fn select(mut scored: Vec<ScoredMeeting>) -> Selection {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
    });

    let mut seen: HashSet<(String, usize)> = HashSet::new();
    let mut rich: Vec<ScoredMeeting> = scored
        .into_iter()
        .filter(is_rich)
        .filter(|meeting| {
            seen.insert((
                meeting.event.subject_or_untitled().to_string(),
                meeting.event.attendee_count(),
            ))
        })
        .collect();

    if rich.len() < FEATURED_LIMIT {
        warn!(
            qualifying = rich.len(),
            needed = FEATURED_LIMIT,
            "Fewer rich meetings than the featured bucket size"
        );
        println!(
            "Warning: only {} meetings with rich metadata (wanted {}).",
            rich.len(),
            FEATURED_LIMIT
        );
    }

    let rest = rich.split_off(rich.len().min(FEATURED_LIMIT));
    let candidates = rest.into_iter().take(CANDIDATE_LIMIT).collect();

    Selection {
        featured: rich,
        candidates,
    }
}
