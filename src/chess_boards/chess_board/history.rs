/// Encoded positions, one per committed move, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<String>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, encoded: String) {
        self.entries.push(encoded);
    }

    /// Drops the most recent entry and returns the one now on top, if any.
    pub fn undo(&mut self) -> Option<&str> {
        self.entries.pop();
        self.entries.last().map(String::as_str)
    }

    pub fn peek(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
