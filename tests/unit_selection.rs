// Unit tests for the selection pipeline and prompt entry assembly.
//
// These exercise pure functions: no embedder, no network — scored meetings
// are built directly.

mod common;

use common::{event, scored};
use workback::pipeline::prompts::{
    build_prompt_entries, SYNTHETIC_REASONING, SYNTHETIC_SCENARIOS, SYNTHETIC_SCORE,
};
use workback::pipeline::select::{is_rich, select, Selection, CANDIDATE_LIMIT, FEATURED_LIMIT};

// ============================================================
// Richness predicate
// ============================================================

#[test]
fn rich_requires_two_attendees_and_a_subject() {
    assert!(is_rich(&scored("Planning", 2, 50.0)));
    assert!(!is_rich(&scored("Planning", 1, 50.0)));

    let mut untitled = scored("x", 5, 50.0);
    untitled.event.subject = None;
    assert!(!is_rich(&untitled));

    let mut empty = scored("x", 5, 50.0);
    empty.event.subject = Some(String::new());
    assert!(!is_rich(&empty));
}

// ============================================================
// Sorting and partitioning
// ============================================================

#[test]
fn sorts_by_score_descending() {
    let selection = select(vec![
        scored("low", 3, 10.0),
        scored("high", 3, 90.0),
        scored("mid", 3, 50.0),
    ]);

    let subjects: Vec<&str> = selection
        .featured
        .iter()
        .map(|m| m.event.subject_or_untitled())
        .collect();
    assert_eq!(subjects, vec!["high", "mid", "low"]);
}

#[test]
fn tied_scores_keep_input_order() {
    let selection = select(vec![
        scored("first", 3, 42.0),
        scored("second", 3, 42.0),
        scored("third", 3, 42.0),
    ]);

    let subjects: Vec<&str> = selection
        .featured
        .iter()
        .map(|m| m.event.subject_or_untitled())
        .collect();
    assert_eq!(subjects, vec!["first", "second", "third"]);
}

#[test]
fn buckets_are_disjoint_and_bounded() {
    // 30 rich meetings, descending scores: top 5 featured, next 15
    // candidates, the last 10 dropped.
    let meetings: Vec<_> = (0..30)
        .map(|i| scored(&format!("m{i}"), 4, 100.0 - i as f64))
        .collect();
    let selection = select(meetings);

    assert_eq!(selection.featured.len(), FEATURED_LIMIT);
    assert_eq!(selection.candidates.len(), CANDIDATE_LIMIT);

    let featured: Vec<String> = selection
        .featured
        .iter()
        .map(|m| m.event.subject_or_untitled().to_string())
        .collect();
    assert_eq!(featured, vec!["m0", "m1", "m2", "m3", "m4"]);

    for candidate in &selection.candidates {
        assert!(
            !featured.contains(&candidate.event.subject_or_untitled().to_string()),
            "featured and candidate buckets overlap"
        );
    }
    assert_eq!(
        selection.candidates[0].event.subject_or_untitled(),
        "m5"
    );
}

#[test]
fn poor_meetings_are_excluded_entirely() {
    let selection = select(vec![
        scored("rich", 3, 10.0),
        scored("solo", 1, 99.0), // highest score, but not rich
    ]);

    assert_eq!(selection.featured.len(), 1);
    assert_eq!(selection.featured[0].event.subject_or_untitled(), "rich");
    assert!(selection.candidates.is_empty());
}

#[test]
fn fewer_than_five_rich_meetings_shrinks_featured() {
    let selection = select(vec![scored("only", 3, 70.0)]);
    assert_eq!(selection.featured.len(), 1);
    assert!(selection.candidates.is_empty());
}

#[test]
fn duplicates_collapse_to_highest_scored_instance() {
    // Recurring meeting: same subject, same attendee count, three instances.
    let selection = select(vec![
        scored("Weekly Steering", 6, 40.0),
        scored("Weekly Steering", 6, 55.0),
        scored("Weekly Steering", 6, 48.0),
        scored("Other", 3, 10.0),
    ]);

    assert_eq!(selection.featured.len(), 2);
    assert_eq!(
        selection.featured[0].event.subject_or_untitled(),
        "Weekly Steering"
    );
    assert_eq!(selection.featured[0].score, 55.0);
}

#[test]
fn same_subject_different_attendee_count_is_not_a_duplicate() {
    let selection = select(vec![
        scored("Planning", 6, 50.0),
        scored("Planning", 9, 45.0),
    ]);
    assert_eq!(selection.featured.len(), 2);
}

#[test]
fn empty_input_yields_empty_buckets() {
    let selection = select(Vec::new());
    assert!(selection.featured.is_empty());
    assert!(selection.candidates.is_empty());
}

// ============================================================
// Entry assembly — numbering, buckets, placeholders
// ============================================================

#[test]
fn entries_are_numbered_continuously_across_buckets() {
    let selection = Selection {
        featured: vec![scored("f1", 3, 80.0), scored("f2", 3, 70.0)],
        candidates: vec![scored("c1", 3, 60.0)],
    };
    let entries = build_prompt_entries(&selection);

    assert_eq!(entries.len(), SYNTHETIC_SCENARIOS.len() + 3);
    let ids: Vec<usize> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, (1..=entries.len()).collect::<Vec<_>>());
}

#[test]
fn synthetic_entries_always_lead_with_fixed_score() {
    let entries = build_prompt_entries(&Selection::default());

    assert_eq!(entries.len(), 5);
    for entry in &entries {
        assert!(entry.is_synthetic);
        assert!(entry.auto_selected);
        assert_eq!(entry.value_score, SYNTHETIC_SCORE);
        assert_eq!(entry.reasoning, SYNTHETIC_REASONING);
        assert_eq!(entry.status, "not-started");
        assert!(!entry.selected);
    }
    assert_eq!(
        entries[0].title,
        "Board of Directors Quarterly Strategy Review"
    );
}

#[test]
fn featured_are_auto_selected_and_candidates_are_not() {
    let selection = Selection {
        featured: vec![scored("f1", 3, 80.0)],
        candidates: vec![scored("c1", 3, 60.0)],
    };
    let entries = build_prompt_entries(&selection);

    let f1 = entries.iter().find(|e| e.title == "f1").unwrap();
    assert!(f1.auto_selected);
    assert!(!f1.is_synthetic);

    let c1 = entries.iter().find(|e| e.title == "c1").unwrap();
    assert!(!c1.auto_selected);
    assert!(!c1.is_synthetic);
}

#[test]
fn prompt_carries_meeting_details() {
    let selection = Selection {
        featured: vec![scored("FY26 Budget Summit", 8, 75.0)],
        candidates: vec![],
    };
    let entries = build_prompt_entries(&selection);
    let entry = entries.iter().find(|e| !e.is_synthetic).unwrap();

    assert!(entry.prompt.contains("FY26 Budget Summit"));
    assert!(entry.prompt.contains("March 01, 2025"));
    assert!(entry.prompt.contains('8'));
    assert_eq!(entry.meeting_date, "March 01, 2025 at 10:00 AM");
    // No location or organizer in the fixture — placeholders fill in.
    assert_eq!(entry.location, "Teams Meeting");
    assert_eq!(entry.organizer, "Unknown");
    assert!(entry.prompt.contains("the scheduled location"));
}

#[test]
fn malformed_start_degrades_to_placeholders() {
    let mut meeting = scored("Mystery Meeting", 3, 50.0);
    meeting.event.start = event(Some("x"), 0, Some("not-a-date")).start;

    let selection = Selection {
        featured: vec![meeting],
        candidates: vec![],
    };
    let entries = build_prompt_entries(&selection);
    let entry = entries.iter().find(|e| !e.is_synthetic).unwrap();

    assert!(entry.prompt.contains("the scheduled date and time"));
    assert_eq!(entry.meeting_date, "not-a-date");
}

#[test]
fn missing_start_degrades_to_unknown() {
    let mut meeting = scored("No Date", 3, 50.0);
    meeting.event.start = None;

    let selection = Selection {
        featured: vec![meeting],
        candidates: vec![],
    };
    let entries = build_prompt_entries(&selection);
    let entry = entries.iter().find(|e| !e.is_synthetic).unwrap();

    assert_eq!(entry.meeting_date, "Unknown");
    assert!(entry.prompt.contains("the scheduled date and time"));
}

#[test]
fn entries_serialize_with_camel_case_fields() {
    let entries = build_prompt_entries(&Selection::default());
    let json = serde_json::to_value(&entries[0]).unwrap();

    for key in [
        "id",
        "title",
        "category",
        "complexity",
        "leadTime",
        "description",
        "attendees",
        "userRole",
        "valueScore",
        "reasoning",
        "autoSelected",
        "isSynthetic",
        "prompt",
        "expectedTools",
        "status",
        "selected",
        "meetingDate",
        "location",
        "organizer",
    ] {
        assert!(json.get(key).is_some(), "missing field {key}");
    }
    assert_eq!(json["userRole"], "organizer");
    assert_eq!(json["complexity"], "high");
}
