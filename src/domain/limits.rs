//! Compiled-in character limit table.
//!
//! Maps an advertising platform to its ad-field types and their maximum
//! character counts. The table is fixed at build time and read-only at
//! runtime; extending it means editing the literal below.

/// Per-platform field type limits, in display order.
static LIMITS: &[(&str, &[(&str, u32)])] = &[
    (
        "google_ads",
        &[("headline", 30), ("description", 90), ("path", 15)],
    ),
    (
        "facebook_ads",
        &[("primary_text", 125), ("headline", 40), ("description", 30)],
    ),
    (
        "linkedin_ads",
        &[("intro_text", 150), ("headline", 70), ("description", 100)],
    ),
];

/// Platform assumed when a single-item GET request does not name one.
pub const DEFAULT_PLATFORM: &str = "google_ads";

/// Returns the supported platform names, in display order.
pub fn supported_platforms() -> Vec<&'static str> {
    LIMITS.iter().map(|(platform, _)| *platform).collect()
}

/// Returns true if the platform has an entry in the limit table.
pub fn is_supported_platform(platform: &str) -> bool {
    LIMITS.iter().any(|(p, _)| *p == platform)
}

/// Returns the `(type, limit)` pairs for a platform, or `None` when the
/// platform is unknown.
pub fn platform_types(platform: &str) -> Option<&'static [(&'static str, u32)]> {
    LIMITS
        .iter()
        .find(|(p, _)| *p == platform)
        .map(|(_, types)| *types)
}

/// Returns the supported type names for a platform.
pub fn supported_types(platform: &str) -> Vec<&'static str> {
    platform_types(platform)
        .map(|types| types.iter().map(|(t, _)| *t).collect())
        .unwrap_or_default()
}

/// Looks up the character limit for a platform/type pair.
pub fn limit_for(platform: &str, field_type: &str) -> Option<u32> {
    platform_types(platform)?
        .iter()
        .find(|(t, _)| *t == field_type)
        .map(|(_, limit)| *limit)
}
