//! Suggested next values shown next to the prompts.

use semver::Version;

/// Suggests the next marketing version by bumping the patch component.
///
/// Only values that parse as plain `major.minor.patch` get a suggestion;
/// pre-release and build metadata are dropped from the result.
///
/// # Example
/// ```
/// use bump_version::version::suggest_next_marketing;
/// assert_eq!(suggest_next_marketing("1.0.0"), Some("1.0.1".to_string()));
/// assert_eq!(suggest_next_marketing("$(VERSION)"), None);
/// ```
pub fn suggest_next_marketing(current: &str) -> Option<String> {
    let parsed = Version::parse(current.trim()).ok()?;
    let next = Version::new(parsed.major, parsed.minor, parsed.patch + 1);
    Some(next.to_string())
}

/// Suggests the next build version (current + 1).
pub fn suggest_next_build(current: &str) -> Option<String> {
    let parsed = current.trim().parse::<u64>().ok()?;
    parsed.checked_add(1).map(|n| n.to_string())
}
