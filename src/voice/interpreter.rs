//! Trigger-phrase detection in the speech transcript

use uuid::Uuid;

use crate::todo::TodoStore;

/// Trigger phrase recognized by default.
pub const DEFAULT_TRIGGER: &str = "add todo";

/// Watches the speech transcript for the trigger phrase and forwards the
/// extracted item text to the to-do store.
///
/// The interpreter keeps no memory of already-processed speech; clearing
/// the transcript after a successful dispatch is what prevents the same
/// command from firing again on the next update.
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    trigger: String,
}

impl CommandInterpreter {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
        }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Extract the item text following the first occurrence of the trigger
    /// phrase.
    ///
    /// Matching is ASCII case-insensitive; the extracted text keeps its
    /// original case. Text before the trigger is discarded, and later
    /// occurrences are not treated specially. Returns `None` when the
    /// trigger is absent or nothing follows it.
    pub fn extract<'a>(&self, transcript: &'a str) -> Option<&'a str> {
        let after = find_after(transcript, &self.trigger)?;
        let text = transcript[after..].trim();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Run one transcript update.
    ///
    /// If the trigger phrase is present with a non-empty payload, create
    /// the item and clear the transcript in the same step so rapid
    /// follow-up updates cannot re-dispatch the same speech. A trigger with
    /// an empty payload leaves the transcript as-is. Returns the id of the
    /// created item, if any.
    pub fn dispatch(&self, transcript: &mut String, store: &mut TodoStore) -> Option<Uuid> {
        let text = self.extract(transcript)?.to_string();
        let id = store.create(&text).map(|item| item.id)?;
        transcript.clear();
        Some(id)
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER)
    }
}

/// Byte offset just past the first case-insensitive occurrence of `needle`
/// in `haystack`. The needle is ASCII, so a match consists of ASCII bytes
/// and the returned offset is always a char boundary.
fn find_after(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
        .map(|i| i + needle.len())
}
