//! Application-wide constants

/// Database name used when `MONGODB_DB_NAME` is not configured.
pub const DEFAULT_DATABASE_NAME: &str = "restaurantDirectory";

/// Fallback accent color for restaurants that chose no theme color.
pub const DEFAULT_THEME_COLOR: &str = "#D97706";

/// Currency label appended to rendered prices.
pub const DEFAULT_CURRENCY: &str = "Birr";
