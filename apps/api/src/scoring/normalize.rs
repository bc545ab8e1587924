//! Text normalization for the similarity backend.

/// Normalizes raw extracted text: lowercase, every character other than
/// ASCII letters/digits/whitespace becomes a space, whitespace runs
/// collapse to a single space, leading/trailing whitespace trimmed.
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mapped: String = lowered
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
