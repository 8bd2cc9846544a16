//! Card numbering and output asset naming.
//!
//! Card numbers are 1-based ordinals zero-padded to three digits — `001`
//! through `100` for a typical run. The padding is display width, not a cap:
//! runs past 999 widen naturally (`1000`, `1001`, ...) rather than truncate.
//!
//! Rendered assets are named `{number}_{NAME}_{respect}.png`, where `NAME` is
//! the card's export name uppercased with spaces turned into underscores,
//! e.g. `004_FOREST_SPIRIT_3000.png`.

/// Format a 0-based ordinal as a 1-based, zero-padded card number.
///
/// `0 → "001"`, `9 → "010"`, `99 → "100"`, `999 → "1000"`.
pub fn format_number(index: u32) -> String {
    format!("{:03}", index + 1)
}

/// Uppercase a display name and replace spaces with underscores.
pub fn export_slug(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}

/// File name for a rendered card asset.
pub fn asset_file_name(number: &str, export_name: &str, respect: u32) -> String {
    format!("{}_{}_{}.png", number, export_slug(export_name), respect)
}
