//! Theme color derivation
//!
//! Restaurants pick a single base hex color; detail pages derive lighter and
//! darker accents from it at render time.

use tracing::warn;

/// Returns the `rgba(...)` form of a `#RRGGBB` color at the given opacity.
///
/// Malformed input falls back to black at the requested opacity.
pub fn lighten(hex: &str, opacity: f64) -> String {
    match channels(hex) {
        Some((r, g, b)) => format!("rgba({r}, {g}, {b}, {opacity})"),
        None => {
            warn!("Malformed hex color {:?}, falling back to black", hex);
            format!("rgba(0, 0, 0, {opacity})")
        }
    }
}

/// Returns the color with every channel reduced by 20, clamped at 0.
///
/// Malformed input is returned unchanged.
pub fn darken(hex: &str) -> String {
    match channels(hex) {
        Some((r, g, b)) => format!(
            "#{:02x}{:02x}{:02x}",
            r.saturating_sub(20),
            g.saturating_sub(20),
            b.saturating_sub(20)
        ),
        None => {
            warn!("Malformed hex color {:?}, returning it unchanged", hex);
            hex.to_string()
        }
    }
}

fn channels(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
