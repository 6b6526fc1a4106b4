/// Number of characters of content kept in a manuscript title.
pub(crate) const TITLE_MAX_CHARS: usize = 60;

/// Number of characters of content returned by the history feed.
pub(crate) const HISTORY_PREVIEW_CHARS: usize = 200;

const UNTITLED: &str = "Untitled";
const ELLIPSIS: &str = "...";

/// Derives a manuscript title from its content.
///
/// Takes the first 60 characters (not bytes), trims trailing whitespace left
/// by the cut and appends `...` when the content was longer. Empty content
/// yields `Untitled`.
pub fn derive_title(content: &str) -> String {
    if content.trim().is_empty() {
        return UNTITLED.to_string();
    }

    let head: String = content.chars().take(TITLE_MAX_CHARS).collect();
    let truncated = content.chars().count() > TITLE_MAX_CHARS;

    let mut title = head.trim_end().to_string();
    if truncated {
        title.push_str(ELLIPSIS);
    }
    title
}

/// Returns at most the first 200 characters of `content`.
pub fn content_preview(content: &str) -> String {
    content.chars().take(HISTORY_PREVIEW_CHARS).collect()
}
