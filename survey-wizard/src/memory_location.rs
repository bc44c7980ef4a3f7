use survey_wizard_types::Location;

/// An in-memory navigation history, like a browser tab's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::at("")
    }
}

impl MemoryLocation {
    /// A history with a single empty token.
    pub fn new() -> Self {
        Self::default()
    }

    /// A history with a single entry holding `token`.
    pub fn at(token: impl Into<String>) -> Self {
        Self {
            entries: vec![token.into()],
            cursor: 0,
        }
    }

    /// Every entry, including ones ahead of the cursor.
    pub fn history(&self) -> &[String] {
        &self.entries
    }

    /// Step back one entry. Returns `false` at the start of the history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of the history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl Location for MemoryLocation {
    fn token(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Drops every entry ahead of the cursor.
    fn push(&mut self, token: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(token.to_string());
        self.cursor += 1;
    }

    fn replace(&mut self, token: &str) {
        self.entries[self.cursor] = token.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_replace() {
        let mut location = MemoryLocation::new();
        location.push("#intro");
        location.replace("#survey");
        assert_eq!(location.token(), "#survey");
        assert_eq!(location.history(), ["", "#survey"]);
    }

    #[test]
    fn back_and_forward() {
        let mut location = MemoryLocation::new();
        location.push("#intro");
        location.push("#survey");

        assert!(location.back());
        assert_eq!(location.token(), "#intro");
        assert!(location.back());
        assert!(!location.back());
        assert_eq!(location.token(), "");

        assert!(location.forward());
        assert!(location.forward());
        assert!(!location.forward());
        assert_eq!(location.token(), "#survey");
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut location = MemoryLocation::new();
        location.push("#intro");
        location.push("#survey");
        location.back();
        location.push("#home");

        assert_eq!(location.history(), ["", "#intro", "#home"]);
        assert!(!location.forward());
    }
}
