// Shared test helpers — a deterministic stub embedder and fixture builders.
//
// The stub returns preset vectors for known texts and falls back to a
// hash-derived pseudo-embedding otherwise, so every test run sees identical
// vectors without touching the real model.

#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use workback::embedding::traits::TextEmbedder;
use workback::graph::events::{Attendee, CalendarEvent, EventDateTime};
use workback::pipeline::score::{ScoredMeeting, UserRole};
use workback::scoring::anchors::{MeetingCategory, HIGH_VALUE_ANCHOR, LOW_VALUE_ANCHOR};

/// Dimension of stub vectors. Big enough that the preset basis vectors
/// (8 categories + 2 value poles) all fit with room to spare.
pub const STUB_DIM: usize = 32;

/// Basis index used for the high-value anchor in `anchored_stub`.
pub const HIGH_ANCHOR_AXIS: usize = 10;
/// Basis index used for the low-value anchor in `anchored_stub`.
pub const LOW_ANCHOR_AXIS: usize = 11;

pub struct StubEmbedder {
    presets: HashMap<String, Vec<f64>>,
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self {
            presets: HashMap::new(),
        }
    }

    pub fn with(mut self, text: impl Into<String>, vector: Vec<f64>) -> Self {
        self.presets.insert(text.into(), vector);
        self
    }
}

#[async_trait]
impl TextEmbedder for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f64>> {
        Ok(self
            .presets
            .get(text)
            .cloned()
            .unwrap_or_else(|| hash_vector(text)))
    }
}

/// An embedder that always fails, for model-unavailable tests.
pub struct FailingEmbedder;

#[async_trait]
impl TextEmbedder for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f64>> {
        anyhow::bail!("inference backend is down")
    }
}

/// Deterministic pseudo-embedding from the text bytes: FNV-1a seed, LCG
/// fill. Never the zero vector.
pub fn hash_vector(text: &str) -> Vec<f64> {
    let mut seed: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in text.bytes() {
        seed ^= byte as u64;
        seed = seed.wrapping_mul(0x0000_0100_0000_01b3);
    }

    let mut state = seed | 1;
    (0..STUB_DIM)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 33) as f64 / u32::MAX as f64) - 0.5
        })
        .collect()
}

/// Unit vector along one axis.
pub fn basis(index: usize) -> Vec<f64> {
    let mut v = vec![0.0; STUB_DIM];
    v[index] = 1.0;
    v
}

/// Stub where every category anchor gets its own basis vector (by position
/// in `MeetingCategory::ALL`) and the value poles get two more axes.
/// Meeting contexts without presets fall back to hash vectors.
pub fn anchored_stub() -> StubEmbedder {
    let mut stub = StubEmbedder::new();
    for (i, category) in MeetingCategory::ALL.iter().enumerate() {
        stub = stub.with(category.anchor_text(), basis(i));
    }
    stub
        .with(HIGH_VALUE_ANCHOR, basis(HIGH_ANCHOR_AXIS))
        .with(LOW_VALUE_ANCHOR, basis(LOW_ANCHOR_AXIS))
}

/// Build an event with `attendees` empty attendee records.
pub fn event(subject: Option<&str>, attendees: usize, start: Option<&str>) -> CalendarEvent {
    CalendarEvent {
        subject: subject.map(|s| s.to_string()),
        attendees: vec![Attendee::default(); attendees],
        start: start.map(|s| EventDateTime {
            date_time: Some(s.to_string()),
            time_zone: None,
        }),
        ..CalendarEvent::default()
    }
}

/// Build a scored meeting directly, for selection tests that don't need a
/// classifier.
pub fn scored(subject: &str, attendees: usize, score: f64) -> ScoredMeeting {
    ScoredMeeting {
        event: event(Some(subject), attendees, Some("2025-03-01T10:00:00Z")),
        category: MeetingCategory::QuarterlyBusinessReview,
        confidence: 0.8,
        score,
        reasoning: format!("test reasoning for {subject}"),
        role: UserRole::Participant,
    }
}
