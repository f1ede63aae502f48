// Meeting classifier — nearest-anchor classification and value estimation.
//
// At construction, every category anchor and both value poles are embedded
// once; the vectors live for the process lifetime and are never mutated.
// Per meeting, the composite context string is embedded and compared against
// the anchors by cosine similarity.

use std::sync::Arc;

use tracing::{debug, info};

use crate::embedding::similarity::cosine_similarity;
use crate::embedding::traits::TextEmbedder;
use crate::error::EngineError;
use crate::scoring::anchors::{MeetingCategory, HIGH_VALUE_ANCHOR, LOW_VALUE_ANCHOR};
use crate::scoring::value;

/// Everything the scoring pass derives for one meeting.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub category: MeetingCategory,
    /// Nearest-anchor similarity mapped into [0, 1].
    pub confidence: f64,
    /// Calibrated value score in [0, 100].
    pub score: f64,
    pub reasoning: String,
}

/// Nearest-anchor meeting classifier with calibrated value estimation.
pub struct MeetingClassifier {
    embedder: Arc<dyn TextEmbedder>,
    category_anchors: Vec<(MeetingCategory, Vec<f64>)>,
    high_value_anchor: Vec<f64>,
    low_value_anchor: Vec<f64>,
}

impl MeetingClassifier {
    /// Build the classifier by embedding all anchor texts.
    ///
    /// Any embedding failure here means the model is unusable, which is
    /// fatal for the whole run.
    pub async fn new(embedder: Arc<dyn TextEmbedder>) -> Result<Self, EngineError> {
        let mut category_anchors = Vec::with_capacity(MeetingCategory::ALL.len());
        for category in MeetingCategory::ALL {
            let vector = embedder.embed(&category.anchor_text()).await.map_err(|e| {
                EngineError::ModelUnavailable(format!(
                    "failed to embed anchor for {category}: {e}"
                ))
            })?;
            category_anchors.push((category, vector));
        }

        let high_value_anchor = embedder
            .embed(HIGH_VALUE_ANCHOR)
            .await
            .map_err(|e| EngineError::ModelUnavailable(format!("high-value anchor: {e}")))?;
        let low_value_anchor = embedder
            .embed(LOW_VALUE_ANCHOR)
            .await
            .map_err(|e| EngineError::ModelUnavailable(format!("low-value anchor: {e}")))?;

        info!(
            categories = category_anchors.len(),
            "Anchor embeddings ready"
        );

        Ok(Self {
            embedder,
            category_anchors,
            high_value_anchor,
            low_value_anchor,
        })
    }

    /// Compose the context string shared by classification and valuation:
    /// "Meeting: {title}" + ". {description}" + ". {n} attendees", with the
    /// optional parts dropped when absent or empty.
    pub fn build_context(title: &str, description: Option<&str>, attendee_count: usize) -> String {
        let mut context = format!("Meeting: {title}");
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            context.push_str(". ");
            context.push_str(description);
        }
        if attendee_count > 0 {
            context.push_str(&format!(". {attendee_count} attendees"));
        }
        context
    }

    async fn embed_context(
        &self,
        title: &str,
        description: Option<&str>,
        attendee_count: usize,
    ) -> Result<Vec<f64>, EngineError> {
        let context = Self::build_context(title, description, attendee_count);
        self.embedder
            .embed(&context)
            .await
            .map_err(|e| EngineError::ModelUnavailable(format!("failed to embed meeting: {e}")))
    }

    /// Classify a meeting into one of the eight categories.
    ///
    /// Returns the category and a confidence in [0, 1]. Always succeeds for
    /// a working embedder: the category set is non-empty by construction.
    pub async fn classify(
        &self,
        title: &str,
        description: Option<&str>,
        attendee_count: usize,
    ) -> Result<(MeetingCategory, f64), EngineError> {
        let embedding = self
            .embed_context(title, description, attendee_count)
            .await?;
        Ok(self.classify_embedding(&embedding))
    }

    /// Estimate a meeting's calibrated 0-100 value score with reasoning.
    pub async fn estimate(
        &self,
        title: &str,
        description: Option<&str>,
        attendee_count: usize,
    ) -> Result<(f64, String), EngineError> {
        let embedding = self
            .embed_context(title, description, attendee_count)
            .await?;
        Ok(self.estimate_embedding(&embedding, attendee_count))
    }

    /// Classify and estimate in one pass. Both consume the identical
    /// context string, so one embedding serves both — the observable
    /// outputs match separate classify/estimate calls exactly.
    pub async fn assess(
        &self,
        title: &str,
        description: Option<&str>,
        attendee_count: usize,
    ) -> Result<Assessment, EngineError> {
        let embedding = self
            .embed_context(title, description, attendee_count)
            .await?;

        let (category, confidence) = self.classify_embedding(&embedding);
        let (score, reasoning) = self.estimate_embedding(&embedding, attendee_count);

        debug!(
            title = title,
            category = category.as_str(),
            confidence = format!("{confidence:.2}"),
            score = format!("{score:.1}"),
            "Assessed meeting"
        );

        Ok(Assessment {
            category,
            confidence,
            score,
            reasoning,
        })
    }

    /// Nearest anchor wins; ties break toward the earliest category in the
    /// fixed enumeration order (strict > keeps the first maximum).
    fn classify_embedding(&self, embedding: &[f64]) -> (MeetingCategory, f64) {
        let mut best_category = self.category_anchors[0].0;
        let mut best_sim = f64::NEG_INFINITY;

        for (category, anchor) in &self.category_anchors {
            let sim = cosine_similarity(embedding, anchor);
            if sim > best_sim {
                best_sim = sim;
                best_category = *category;
            }
        }

        // Map cosine's [-1, 1] into a [0, 1] confidence.
        let confidence = ((best_sim + 1.0) / 2.0).clamp(0.0, 1.0);
        (best_category, confidence)
    }

    fn estimate_embedding(&self, embedding: &[f64], attendee_count: usize) -> (f64, String) {
        let high_sim = cosine_similarity(embedding, &self.high_value_anchor);
        let low_sim = cosine_similarity(embedding, &self.low_value_anchor);
        value::estimate_from_similarities(high_sim, low_sim, attendee_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_title_only() {
        assert_eq!(
            MeetingClassifier::build_context("Weekly Sync", None, 0),
            "Meeting: Weekly Sync"
        );
    }

    #[test]
    fn context_with_description() {
        assert_eq!(
            MeetingClassifier::build_context("Kickoff", Some("Project alpha"), 0),
            "Meeting: Kickoff. Project alpha"
        );
    }

    #[test]
    fn context_empty_description_is_dropped() {
        assert_eq!(
            MeetingClassifier::build_context("Kickoff", Some(""), 3),
            "Meeting: Kickoff. 3 attendees"
        );
    }

    #[test]
    fn context_with_all_parts() {
        assert_eq!(
            MeetingClassifier::build_context("QBR", Some("Q4 numbers"), 12),
            "Meeting: QBR. Q4 numbers. 12 attendees"
        );
    }
}
