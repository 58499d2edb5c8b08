//! Slugs for variants and download filenames.

/// Derive a URL-safe variant slug from a display name.
///
/// Lowercases, drops everything outside `[a-z0-9]`, whitespace and `-`, turns
/// whitespace runs into a single hyphen, collapses repeated hyphens and trims
/// hyphens from both ends. Idempotent.
///
/// ```
/// use lolev_label::codec::derive_variant;
///
/// assert_eq!(derive_variant("Session IPA #2!"), "session-ipa-2");
/// ```
pub fn derive_variant(name: &str) -> String {
    hyphenate(name, |ch| ch == '-' || ch.is_whitespace())
}

/// Filename-safe slug joining `name` and `variant` with a hyphen.
///
/// Every character outside `[a-z0-9]` becomes a hyphen before collapsing, so
/// `"Pils/Lager"` becomes `"pils-lager"`. Returns an empty string when nothing
/// survives.
pub fn slug(name: &str, variant: &str) -> String {
    filename_slug(&format!("{}-{}", name, variant))
}

/// [`slug`] for a single piece of text.
pub fn filename_slug(text: &str) -> String {
    hyphenate(text, |_| true)
}

/// Lowercase `text`, keeping `[a-z0-9]` runs joined by single hyphens.
///
/// Characters matching `is_separator` split words; any other character is
/// dropped. No leading, trailing or doubled hyphens.
fn hyphenate(text: &str, is_separator: impl Fn(char) -> bool) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if is_separator(ch) {
            pending_hyphen = true;
        }
    }

    slug
}

/// Suggested download filename for an exported label.
pub fn export_filename(name: &str, variant: &str) -> String {
    let slug = slug(name, variant);
    if slug.is_empty() {
        "label.svg".to_string()
    } else {
        format!("{}.svg", slug)
    }
}
