//! Boolean coercion for rendered template answers

/// Spellings accepted as "yes" after trimming and lowercasing
const TRUTHY: &[&str] = &["y", "yes", "true", "1", "on"];

/// Classify a rendered answer as a boolean.
///
/// Anything outside the accepted spellings (including the empty string) is false.
pub fn is_yes(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    TRUTHY.contains(&normalized.as_str())
}
