//! Pending song titles awaiting lookup.

/// Ordered list of titles entered by the user, newest first.
///
/// Duplicates are allowed; nothing is deduplicated until the lookup
/// service returns its keyed results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongQueue {
    titles: Vec<String>,
}

impl SongQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if queue is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Get queue length.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// All queued titles, most recently added first.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Insert a trimmed title at the front.
    ///
    /// Returns `false` (and leaves the queue untouched) when the title is
    /// empty or whitespace-only.
    pub fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.titles.insert(0, title.to_string());
        true
    }

    /// Remove the title at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Views only offer removal for rows
    /// they rendered, so a bad index is a caller bug.
    pub fn remove_at(&mut self, index: usize) -> String {
        assert!(
            index < self.titles.len(),
            "queue index {} out of range (len {})",
            index,
            self.titles.len()
        );
        self.titles.remove(index)
    }

    /// Clear the queue.
    pub fn clear(&mut self) {
        self.titles.clear();
    }
}
