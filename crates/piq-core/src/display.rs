//! Display defaults for absent report fields.
//!
//! Every optional field has exactly one documented fallback. An empty string
//! counts as absent.

/// Fallback for scalar overview and lead fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fallback for contact channel cells (email, phone, profiles).
pub const NO_VALUE: &str = "--";

/// Fallback for unnamed technologies and competitors.
pub const UNKNOWN: &str = "Unknown";

/// Fallback for news items without a headline.
pub const NO_HEADLINE: &str = "No headline";

/// Treat `None` and `""` alike.
#[must_use]
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Return the value, or `fallback` when it is absent or empty.
#[must_use]
pub fn or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    present(value).unwrap_or(fallback)
}

/// Return the value, or `"N/A"` when it is absent or empty.
#[must_use]
pub fn or_na(value: Option<&str>) -> &str {
    or(value, NOT_AVAILABLE)
}

/// Return the value, or `""` when it is absent.
#[must_use]
pub fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}
