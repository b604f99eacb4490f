//! Price formatting

use tracing::warn;

/// Formats a price for display with a currency label.
///
/// Missing values render as zero, whole values drop the decimal places, and
/// fractional values round to two decimals with trailing zeros stripped.
pub fn format_price(value: Option<f64>, currency: &str) -> String {
    let Some(price) = value else {
        return format!("0 {currency}");
    };

    if !price.is_finite() {
        warn!("Non-finite price {price}, formatting verbatim");
        return format!("{price} {currency}");
    }

    if price.floor() == price {
        format!("{} {currency}", price as i64)
    } else {
        let rounded = format!("{price:.2}");
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        format!("{trimmed} {currency}")
    }
}
