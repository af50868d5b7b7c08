//! Incremental find: a session-scoped forward/backward literal search
//!
//! A find session lives from opening the find panel until closing it. Within a
//! session, repeated finds resume from where the previous one stopped. When a
//! search reaches the document boundary without a hit, the resume point wraps
//! to the opposite end but the search is NOT retried in the same call; the
//! next call searches from the wrapped position.

use crate::editable::TextBuffer;

/// Direction of a find invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// Find next (↓, Enter)
    Forward,
    /// Find previous (↑)
    Backward,
}

/// Result of a single find invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// No session is open
    Inactive,
    /// The query is empty; nothing happened
    EmptyQuery,
    /// A match was selected
    Found { start: usize, end: usize },
    /// Reached the document boundary; the next find starts from the other end
    Wrapped,
}

/// State of one find session
#[derive(Debug, Clone, Default)]
pub struct FindSession {
    query: String,
    /// Exclusive start point for the next search in the active direction
    cursor: usize,
    initialized: bool,
}

impl FindSession {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            cursor: 0,
            initialized: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Change the query. The resume point is kept, so a new term continues
    /// from wherever the previous search stopped.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Resume point, None until the first non-empty find of the session
    pub fn resume_offset(&self) -> Option<usize> {
        self.initialized.then_some(self.cursor)
    }

    /// Search the buffer and select the match on success
    pub fn find(&mut self, buffer: &mut TextBuffer, direction: SearchDirection) -> FindOutcome {
        if self.query.is_empty() {
            return FindOutcome::EmptyQuery;
        }

        if !self.initialized {
            self.cursor = 0;
            self.initialized = true;
        }

        let len = buffer.len_chars();
        let from = self.cursor.min(len);

        let found = match direction {
            SearchDirection::Forward => find_forward(buffer, &self.query, from),
            SearchDirection::Backward => find_backward(buffer, &self.query, from),
        };

        match found {
            Some((start, end)) => {
                buffer.select_range(start, end);
                self.cursor = match direction {
                    SearchDirection::Forward => end,
                    SearchDirection::Backward => start,
                };
                tracing::debug!(
                    query = %self.query,
                    ?direction,
                    start,
                    end,
                    "find: match"
                );
                FindOutcome::Found { start, end }
            }
            None => {
                self.cursor = match direction {
                    SearchDirection::Forward => 0,
                    SearchDirection::Backward => len,
                };
                tracing::debug!(query = %self.query, ?direction, "find: wrapped");
                FindOutcome::Wrapped
            }
        }
    }
}

/// First occurrence of `needle` starting at or after char offset `from`
pub fn find_forward(buffer: &TextBuffer, needle: &str, from: usize) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let rope = buffer.rope();
    let haystack = rope.to_string();
    let from_byte = rope.char_to_byte(from);
    let match_byte = from_byte + haystack[from_byte..].find(needle)?;
    let start = rope.byte_to_char(match_byte);
    Some((start, start + needle.chars().count()))
}

/// Last occurrence of `needle` ending at or before char offset `before`
pub fn find_backward(buffer: &TextBuffer, needle: &str, before: usize) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let rope = buffer.rope();
    let haystack = rope.to_string();
    let before_byte = rope.char_to_byte(before);
    let match_byte = haystack[..before_byte].rfind(needle)?;
    let start = rope.byte_to_char(match_byte);
    Some((start, start + needle.chars().count()))
}

/// The find panel: `Idle` when `session` is None, `SessionActive` otherwise
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    session: Option<FindSession>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&FindSession> {
        self.session.as_ref()
    }

    /// Start a fresh session, pre-filled with `initial_query` (the last search term).
    /// Reopening while a session is active starts over.
    pub fn open(&mut self, initial_query: Option<&str>) {
        self.session = Some(FindSession::new(initial_query.unwrap_or_default()));
    }

    /// End the session, returning its final query
    pub fn close(&mut self) -> Option<String> {
        self.session.take().map(|s| s.query)
    }

    /// Returns false when no session is open
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.set_query(query);
                true
            }
            None => false,
        }
    }

    pub fn find(&mut self, buffer: &mut TextBuffer, direction: SearchDirection) -> FindOutcome {
        match self.session.as_mut() {
            Some(session) => session.find(buffer, direction),
            None => FindOutcome::Inactive,
        }
    }
}
