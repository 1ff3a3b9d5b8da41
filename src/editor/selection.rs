//! Selection over the document buffer.

use std::ops::Range;

/// A byte range of the buffer, always ordered so `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection from two ends in either order.
    pub fn new(anchor: usize, head: usize) -> Self {
        Self {
            start: anchor.min(head),
            end: anchor.max(head),
        }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check that both ends fall on char boundaries of `text`.
    pub fn is_valid_for(&self, text: &str) -> bool {
        self.end <= text.len() && text.is_char_boundary(self.start) && text.is_char_boundary(self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_ends() {
        let sel = Selection::new(5, 2);
        assert_eq!(sel.start, 2);
        assert_eq!(sel.end, 5);
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.range(), 2..5);
    }

    #[test]
    fn test_collapsed_is_empty() {
        assert!(Selection::collapsed(3).is_empty());
        assert!(!Selection::new(0, 1).is_empty());
    }

    #[test]
    fn test_valid_for() {
        let text = "aé";
        assert!(Selection::new(0, 1).is_valid_for(text));
        assert!(Selection::new(1, 3).is_valid_for(text));
        // Inside the two-byte 'é'
        assert!(!Selection::new(0, 2).is_valid_for(text));
        assert!(!Selection::new(0, 4).is_valid_for(text));
    }
}
