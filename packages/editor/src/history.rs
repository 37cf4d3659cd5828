//! # Undo/Redo History
//!
//! Linear log of document snapshots with a cursor.
//!
//! ## Design
//!
//! - Entry 0 is the base document (empty, or whatever was last loaded)
//! - Recording truncates everything after the cursor, then appends
//! - Undo/redo only move the cursor; snapshots are never edited
//! - Snapshots share unchanged subtrees, so keeping many is cheap
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(Document::new());
//! history.record(doc_with_header);
//!
//! history.undo();              // back to the empty document
//! history.redo();              // header again
//! ```

use sitebuilder_document::Document;

#[derive(Debug, Clone)]
pub struct History {
    /// Snapshots, oldest first. Never empty.
    entries: Vec<Document>,

    /// Index of the active snapshot
    cursor: usize,

    /// Maximum number of undo steps kept (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// History holding only `base`
    pub fn new(base: Document) -> Self {
        Self::with_max_levels(base, 0)
    }

    /// History that forgets the oldest snapshot beyond `max_levels` undo steps
    pub fn with_max_levels(base: Document, max_levels: usize) -> Self {
        Self {
            entries: vec![base],
            cursor: 0,
            max_levels,
        }
    }

    /// The active snapshot
    pub fn current(&self) -> &Document {
        &self.entries[self.cursor]
    }

    /// Push a new snapshot, discarding the redo branch
    pub fn record(&mut self, doc: Document) {
        let dropped = self.entries.len() - self.cursor - 1;
        self.entries.truncate(self.cursor + 1);
        self.entries.push(doc);

        if self.max_levels > 0 && self.entries.len() > self.max_levels + 1 {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;

        if dropped > 0 {
            tracing::debug!("Discarded {} redo entries", dropped);
        }
    }

    /// Step back one snapshot. Returns false at the base.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one snapshot. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of snapshots, base included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    pub fn entries(&self) -> &[Document] {
        &self.entries
    }

    /// Forget everything and start over from `base`
    pub fn reset(&mut self, base: Document) {
        self.entries.clear();
        self.entries.push(base);
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Document::new())
    }
}
