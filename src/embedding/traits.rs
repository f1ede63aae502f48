// Embedder trait — the swap-ready abstraction.
//
// Classification and value estimation both reduce to "embed this text and
// compare vectors", so the engine depends on this trait rather than on any
// particular model. The default implementation is a local ONNX model.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for converting text into a fixed-length embedding vector.
///
/// Implementations must be deterministic: identical text always produces
/// the identical vector. Classification stability and test reproducibility
/// both depend on this. The vector dimensionality is fixed for the process
/// lifetime.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Embed a single text into a dense vector.
    async fn embed(&self, text: &str) -> Result<Vec<f64>>;

    /// Embed multiple texts, returning vectors in the same order.
    /// Default implementation calls embed sequentially — implementations
    /// can override for true batch inference.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }
}
