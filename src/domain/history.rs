/// Find the release that came before `current`.
///
/// `tags` must be ordered newest first, as the GitHub releases listing
/// returns them. The previous release is the entry right after the first
/// occurrence of `current`. Returns `None` when `current` is not in the
/// list or is the oldest entry.
///
/// # Example
/// ```
/// use release_notion::domain::previous_tag;
///
/// let tags = ["v1.2.0", "v1.1.0", "v1.0.0"];
/// assert_eq!(previous_tag(&tags, "v1.2.0"), Some("v1.1.0"));
/// assert_eq!(previous_tag(&tags, "v1.0.0"), None);
/// ```
pub fn previous_tag<'a, S: AsRef<str>>(tags: &'a [S], current: &str) -> Option<&'a str> {
    let position = tags.iter().position(|tag| tag.as_ref() == current)?;
    tags.get(position + 1).map(|tag| tag.as_ref())
}
