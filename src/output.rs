//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` (pure, no
//! I/O) and a `print_*` wrapper that writes to stdout. The statistics block
//! keeps the original product's shape: total completed, then per subtype the
//! remaining counts broken down by tier — VC tiers by name, NC tiers by name
//! and respect value.

use crate::catalog::{Catalog, Variant};
use crate::compose::RenderedCard;
use crate::export::ExportedFile;
use crate::stats::ProjectStats;

/// Capitalize a subtype name for display ("alpha" → "Alpha").
fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Format the completion statistics block.
///
/// VC subtypes with nothing remaining collapse to a single "None" line; the
/// NC block always prints the full tier ladder.
pub fn format_stats(stats: &ProjectStats, variant: Variant) -> Vec<String> {
    let mut lines = vec![
        format!("Cards created: {}", stats.completed),
        String::new(),
        "You still need to make cards:".to_string(),
    ];
    for subtype in &stats.subtypes {
        let title = title_case(subtype.subtype.name());
        match variant {
            Variant::Vc => {
                if subtype.remaining == 0 {
                    lines.push(format!(" {title}: None"));
                    continue;
                }
                lines.push(format!(" {title}: {}", subtype.remaining));
                for tier in &subtype.tiers {
                    lines.push(format!(" - {}: {}", tier.label, tier.remaining));
                }
            }
            Variant::Nc => {
                lines.push(format!(" {title}: {}", subtype.remaining));
                for tier in &subtype.tiers {
                    lines.push(format!(
                        " - {} - {}: {}",
                        tier.label, tier.respect, tier.remaining
                    ));
                }
            }
        }
    }
    lines
}

pub fn print_stats(stats: &ProjectStats, variant: Variant) {
    for line in format_stats(stats, variant) {
        println!("{line}");
    }
}

/// Format the card table: number, name, description, type, respect.
pub fn format_card_list(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<6} {:<20} {:<10} {:>7}  {}",
        "Number", "Name", "Type", "Respect", "Description"
    )];
    for card in &catalog.cards {
        lines.push(format!(
            "{:<6} {:<20} {:<10} {:>7}  {}",
            card.number,
            card.name.as_deref().unwrap_or("-"),
            card.subtype.name(),
            card.respect,
            card.description.as_deref().unwrap_or("-"),
        ));
    }
    lines
}

pub fn print_card_list(catalog: &Catalog) {
    for line in format_card_list(catalog) {
        println!("{line}");
    }
}

/// Format the export summary: one line per written file.
pub fn format_export(files: &[ExportedFile]) -> Vec<String> {
    if files.is_empty() {
        return vec!["No completed cards to export".to_string()];
    }
    let mut lines = Vec::new();
    for file in files {
        lines.push(format!(
            "{} cards → {}",
            file.cards,
            file.path.display()
        ));
    }
    lines
}

pub fn print_export(files: &[ExportedFile]) {
    for line in format_export(files) {
        println!("{line}");
    }
}

/// Format the render summary: one line per written asset.
pub fn format_render(rendered: &[RenderedCard]) -> Vec<String> {
    if rendered.is_empty() {
        return vec!["No completed cards to render".to_string()];
    }
    let mut lines = Vec::new();
    for card in rendered {
        lines.push(format!(
            "{} {} → {}",
            card.number,
            card.name,
            card.path.display()
        ));
    }
    lines.push(format!("Rendered {} cards", rendered.len()));
    lines
}

pub fn print_render(rendered: &[RenderedCard]) {
    for line in format_render(rendered) {
        println!("{line}");
    }
}
