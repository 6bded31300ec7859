//! User-controlled ordering of looked-up songs.

/// Ordered titles, a view over the lyrics store's keys.
///
/// The sequence is replaced wholesale by drag reordering and is not checked
/// against the store; stale titles are handled when the export payload is
/// built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderModel {
    titles: Vec<String>,
}

impl OrderModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Current order, read-only.
    pub fn snapshot(&self) -> &[String] {
        &self.titles
    }

    /// Replace the order with a sequence delivered by the reordering view.
    pub fn reorder(&mut self, titles: Vec<String>) {
        self.titles = titles;
    }

    /// Append a title that is not yet ordered.
    pub(crate) fn push_if_absent(&mut self, title: &str) -> bool {
        if self.titles.iter().any(|t| t == title) {
            return false;
        }
        self.titles.push(title.to_string());
        true
    }

    /// Replace every occurrence of `old` with `new`, keeping one row for `new`.
    ///
    /// The surviving row sits where `old` first appeared. A row that already
    /// held `new` is dropped, since its record was overwritten by the rename.
    /// If `old` is not ordered at all, the order is left alone.
    pub(crate) fn rename(&mut self, old: &str, new: &str) {
        let Some(first) = self.titles.iter().position(|t| t == old) else {
            return;
        };
        let mut kept = Vec::with_capacity(self.titles.len());
        for (i, title) in self.titles.drain(..).enumerate() {
            if i == first {
                kept.push(new.to_string());
            } else if title != old && title != new {
                kept.push(title);
            }
        }
        self.titles = kept;
    }
}
