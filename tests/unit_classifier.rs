// Unit tests for the classifier and value estimator, driven through a
// deterministic stub embedder.
//
// The anchored stub maps each category anchor to its own basis vector, so
// a context preset along one axis classifies to exactly that category with
// a known similarity.

mod common;

use std::sync::Arc;

use common::{anchored_stub, basis, FailingEmbedder, HIGH_ANCHOR_AXIS, LOW_ANCHOR_AXIS};
use workback::error::EngineError;
use workback::scoring::anchors::MeetingCategory;
use workback::scoring::classifier::MeetingClassifier;

// ============================================================
// Classification — anchor selection and context composition
// ============================================================

#[tokio::test]
async fn classifies_to_the_nearest_anchor() {
    // Axis 5 belongs to ProjectKickoff (position 5 in the fixed order).
    let stub = anchored_stub().with(
        "Meeting: Alpha Kickoff. Team alignment. 9 attendees",
        basis(5),
    );
    let classifier = MeetingClassifier::new(Arc::new(stub)).await.unwrap();

    let (category, confidence) = classifier
        .classify("Alpha Kickoff", Some("Team alignment"), 9)
        .await
        .unwrap();

    // Hitting the preset proves the composite context string was built as
    // "Meeting: {title}. {description}. {n} attendees".
    assert_eq!(category, MeetingCategory::ProjectKickoff);
    assert!((confidence - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn omits_absent_context_parts() {
    let stub = anchored_stub().with("Meeting: Standalone", basis(3));
    let classifier = MeetingClassifier::new(Arc::new(stub)).await.unwrap();

    let (category, _) = classifier.classify("Standalone", None, 0).await.unwrap();
    assert_eq!(category, MeetingCategory::ExecutivePresentation);
}

#[tokio::test]
async fn ties_break_toward_the_first_category() {
    // Every anchor embeds to the same vector, so every similarity ties.
    let mut stub = common::StubEmbedder::new();
    for category in MeetingCategory::ALL {
        stub = stub.with(category.anchor_text(), basis(0));
    }
    let stub = stub
        .with(
            workback::scoring::anchors::HIGH_VALUE_ANCHOR,
            basis(HIGH_ANCHOR_AXIS),
        )
        .with(
            workback::scoring::anchors::LOW_VALUE_ANCHOR,
            basis(LOW_ANCHOR_AXIS),
        )
        .with("Meeting: Tie", basis(0));

    let classifier = MeetingClassifier::new(Arc::new(stub)).await.unwrap();
    let (category, _) = classifier.classify("Tie", None, 0).await.unwrap();

    assert_eq!(category, MeetingCategory::ALL[0]);
    assert_eq!(category, MeetingCategory::QuarterlyBusinessReview);
}

// ============================================================
// Determinism and bounds
// ============================================================

#[tokio::test]
async fn identical_inputs_produce_identical_outputs() {
    let classifier = MeetingClassifier::new(Arc::new(anchored_stub()))
        .await
        .unwrap();

    let first = classifier
        .assess("Roadmap Review", Some("H2 planning"), 7)
        .await
        .unwrap();
    let second = classifier
        .assess("Roadmap Review", Some("H2 planning"), 7)
        .await
        .unwrap();

    assert_eq!(first.category, second.category);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.score, second.score);
    assert_eq!(first.reasoning, second.reasoning);
}

#[tokio::test]
async fn confidence_stays_in_unit_interval() {
    // Context anti-aligned with every category anchor: all similarities
    // are negative, so best similarity is negative too.
    let mut anti = vec![0.0; common::STUB_DIM];
    for slot in anti.iter_mut().take(8) {
        *slot = -1.0;
    }
    let stub = anchored_stub().with("Meeting: Hostile", anti);
    let classifier = MeetingClassifier::new(Arc::new(stub)).await.unwrap();

    for (title, description, attendees) in [
        ("Hostile", None, 0),
        ("Weekly sync", Some("status"), 2),
        ("Something else entirely", None, 400),
    ] {
        let (_, confidence) = classifier
            .classify(title, description, attendees)
            .await
            .unwrap();
        assert!(
            (0.0..=1.0).contains(&confidence),
            "confidence out of range for {title}: {confidence}"
        );
    }
}

#[tokio::test]
async fn score_stays_in_bounds_for_extreme_contexts() {
    // Pointed toward the high-value pole and away from the low-value pole,
    // plus a max attendee boost: the pre-clamp score lands well above 100.
    let mut extreme = vec![0.0; common::STUB_DIM];
    extreme[HIGH_ANCHOR_AXIS] = 1.0;
    extreme[LOW_ANCHOR_AXIS] = -1.0;
    let stub = anchored_stub()
        .with("Meeting: Everything. 1000 attendees", extreme.clone())
        .with("Meeting: Nothing", extreme.iter().map(|v| -v).collect::<Vec<_>>());
    let classifier = MeetingClassifier::new(Arc::new(stub)).await.unwrap();

    let (high, _) = classifier
        .estimate("Everything", None, 1000)
        .await
        .unwrap();
    assert!((0.0..=100.0).contains(&high));
    assert_eq!(high, 100.0);

    let (low, _) = classifier.estimate("Nothing", None, 0).await.unwrap();
    assert!((0.0..=100.0).contains(&low));
    assert_eq!(low, 0.0);
}

// ============================================================
// Estimation reasoning
// ============================================================

#[tokio::test]
async fn reasoning_reports_similarities_and_boost() {
    // Context aligned with the high pole, orthogonal to the low pole.
    let mut context = vec![0.0; common::STUB_DIM];
    context[HIGH_ANCHOR_AXIS] = 1.0;
    let stub = anchored_stub().with("Meeting: Launch Review. 50 attendees", context);
    let classifier = MeetingClassifier::new(Arc::new(stub)).await.unwrap();

    let (_, reasoning) = classifier.estimate("Launch Review", None, 50).await.unwrap();
    assert!(reasoning.contains("high-value concepts: 1.00"));
    assert!(reasoning.contains("low-value: 0.00"));
    assert!(reasoning.contains("Boosted by high attendee count (50)"));
    assert!(reasoning.contains("Calibrated from raw score"));
}

// ============================================================
// Model failure
// ============================================================

#[tokio::test]
async fn construction_fails_as_model_unavailable() {
    let err = MeetingClassifier::new(Arc::new(FailingEmbedder))
        .await
        .err()
        .expect("construction should fail without an embedder");
    assert!(matches!(err, EngineError::ModelUnavailable(_)));
}
