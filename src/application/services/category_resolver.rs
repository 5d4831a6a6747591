use crate::domain::{CategoryResolution, DisruptorCategory};

/// Maps free-text model output onto a category.
///
/// Categories are tried in [`DisruptorCategory::ALL`] order as case-insensitive
/// substrings, so when a reply names several, the earliest in that order wins
/// regardless of where it appears in the text. Output naming none of them
/// resolves to [`CategoryResolution::DefaultFallback`].
pub fn resolve_category(raw_output: &str) -> CategoryResolution {
    let normalized = raw_output.trim().to_lowercase();

    DisruptorCategory::ALL
        .into_iter()
        .find(|category| normalized.contains(category.as_str()))
        .map(CategoryResolution::Matched)
        .unwrap_or(CategoryResolution::DefaultFallback)
}
