//! Version-tag arithmetic over git tag listings.
//!
//! Data snapshots are tagged `v<integer>`. The active version is the highest
//! integer among all well-formed tags; anything else in the listing (release
//! tags, typos, `vfoo`) is ignored.

/// Highest version number among the given tags, or 0 when none parse.
///
/// A tag counts only if it starts with `v` and the remainder parses as an
/// unsigned integer. Duplicates fold through `max`.
pub fn current_version<'a, I>(tags: I) -> u64
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .filter_map(parse_tag)
        .max()
        .unwrap_or(0)
}

/// Next version tag, `v<current + 1>`.
///
/// Saturates at `u64::MAX` rather than wrapping back to `v0`.
pub fn next_version<'a, I>(tags: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    format!("v{}", current_version(tags).saturating_add(1))
}

/// Parse a `v<integer>` tag into its version number.
pub fn parse_tag(tag: &str) -> Option<u64> {
    let tag = tag.trim();
    let suffix = tag.strip_prefix('v')?;
    suffix.parse().ok()
}

/// Split a raw `git tag --list` output into candidate tag lines.
pub fn tags_from_listing(listing: &str) -> Vec<&str> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
