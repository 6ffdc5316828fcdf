/// Convert a display name into a lookup id.
///
/// Lowercases the text and drops everything outside `[a-z0-9]`, so
/// `"Mr. Mime"` becomes `"mrmime"`.
pub fn to_id(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
