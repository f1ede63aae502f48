// Value estimation math — similarity projection, attendee boost, calibration.
//
// Everything here is pure arithmetic over two anchor similarities, so it
// tests without an embedder. The classifier supplies the similarities.

use crate::scoring::anchors::{CALIBRATION_INTERCEPT, CALIBRATION_SLOPE};

/// Sublinear reward for larger meetings: log10(n) / 10, capped at +0.2
/// (the cap is reached at 100 attendees). Zero attendees means no boost.
pub fn attendee_boost(attendee_count: usize) -> f64 {
    if attendee_count == 0 {
        return 0.0;
    }
    ((attendee_count.max(1) as f64).log10() / 10.0).min(0.2)
}

/// Project the similarity difference onto [0, 1] nominal range:
/// (high - low + 1) / 2. Closer to the high-value anchor than the low-value
/// anchor lands above 0.5.
pub fn raw_value(high_sim: f64, low_sim: f64) -> f64 {
    (high_sim - low_sim + 1.0) / 2.0
}

/// Affine recalibration against the reference scoring distribution,
/// clamped back into [0, 100].
pub fn calibrate(score: f64) -> f64 {
    (CALIBRATION_SLOPE * score + CALIBRATION_INTERCEPT).clamp(0.0, 100.0)
}

/// Full estimate from the two anchor similarities: returns the calibrated
/// 0-100 score and the human-readable reasoning string.
pub fn estimate_from_similarities(
    high_sim: f64,
    low_sim: f64,
    attendee_count: usize,
) -> (f64, String) {
    let raw = raw_value(high_sim, low_sim);
    let boost = attendee_boost(attendee_count);
    let final_score = ((raw + boost) * 100.0).clamp(0.0, 100.0);
    let calibrated = calibrate(final_score);

    let mut reasoning = format!(
        "Semantic similarity to high-value concepts: {high_sim:.2} vs low-value: {low_sim:.2}."
    );
    if attendee_count > 20 {
        reasoning.push_str(&format!(
            " Boosted by high attendee count ({attendee_count})."
        ));
    }
    reasoning.push_str(&format!(" Calibrated from raw score {final_score:.1}."));

    (calibrated, reasoning)
}
