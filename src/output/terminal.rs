// Colored terminal output for the assembled package.
//
// This module handles all terminal-specific formatting: colors and the
// ranked summary table. The main.rs display calls delegate here.

use colored::Colorize;

use crate::pipeline::prompts::PromptEntry;

/// Display the assembled entries as a ranked table with bucket counts.
pub fn display_package_summary(entries: &[PromptEntry]) {
    if entries.is_empty() {
        println!("No entries assembled.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Annotation Package ({} entries) ===", entries.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<44} {:>6}  {:<28} {:>5}",
        "Id".dimmed(),
        "Title".dimmed(),
        "Score".dimmed(),
        "Category".dimmed(),
        "Attn".dimmed(),
    );
    println!("  {}", "-".repeat(94).dimmed());

    for entry in entries {
        let marker = if entry.is_synthetic {
            "S".cyan().to_string()
        } else if entry.auto_selected {
            "F".green().to_string()
        } else {
            "c".dimmed().to_string()
        };

        println!(
            "  {:>3}{} {:<44} {:>6.1}  {:<28} {:>5}",
            entry.id,
            marker,
            crate::output::truncate_chars(&entry.title, 42),
            entry.value_score,
            crate::output::truncate_chars(&entry.category, 26),
            entry.attendees,
        );
    }

    println!();

    let synthetic = entries.iter().filter(|e| e.is_synthetic).count();
    let featured = entries
        .iter()
        .filter(|e| !e.is_synthetic && e.auto_selected)
        .count();
    let candidates = entries
        .iter()
        .filter(|e| !e.is_synthetic && !e.auto_selected)
        .count();

    println!(
        "  {} synthetic, {} featured, {} candidates",
        synthetic.to_string().cyan(),
        featured.to_string().green().bold(),
        candidates,
    );
}
