// Annotation package generation — splices the entry data into the
// interactive HTML template and writes a single self-contained file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::pipeline::prompts::PromptEntry;

/// The annotation page, embedded at compile time.
const TEMPLATE: &str = include_str!("../../templates/annotator.html");

/// Marker in the template where the entry data gets injected.
const DATA_MARKER: &str = "const PROMPTS_DATA = [];";
/// Marker for the "generated for" header line.
const HEADER_MARKER: &str = "{{GENERATED_FOR}}";

/// Render the package and write it to `<output_dir>/workback_<user>.html`.
/// Returns the written path.
pub fn generate_package(
    entries: &[PromptEntry],
    user_email: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    if !TEMPLATE.contains(DATA_MARKER) {
        anyhow::bail!("Annotation template is missing the data marker");
    }

    let json = serde_json::to_string_pretty(entries)
        .context("Failed to serialize prompt entries")?;

    let header = format!(
        "Generated for: {} | {}",
        user_email,
        Local::now().format("%B %d, %Y")
    );

    let html = TEMPLATE
        .replace(DATA_MARKER, &format!("const PROMPTS_DATA = {json};"))
        .replace(HEADER_MARKER, &header);

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let user_part = user_email.split('@').next().unwrap_or(user_email);
    let output_path = output_dir.join(format!("workback_{user_part}.html"));

    std::fs::write(&output_path, html)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Ok(output_path)
}
