#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryTextError {
    #[error("Entry text cannot be empty")]
    EmptyText,
}

/// Trims the text and rejects it when nothing is left.
pub(super) fn normalize(text: &str) -> Result<String, EntryTextError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EntryTextError::EmptyText);
    }
    Ok(text.to_string())
}
