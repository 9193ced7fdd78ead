// src/core/field.rs
use std::ops::Range;

// Upper bound of the select-all range, as a text input's setSelectionRange(0, 999)
pub const SELECTION_LIMIT: usize = 999;

/// Read-only text field showing the current password.
#[derive(Debug, Clone)]
pub struct DisplayField {
    placeholder: &'static str,
    text: String,
    selection: Option<Range<usize>>,
}

impl DisplayField {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            text: String::new(),
            selection: None,
        }
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    // New text drops any selection
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.selection = None;
        }
    }

    pub fn select_all(&mut self) {
        self.selection = Some(0..self.text.len().min(SELECTION_LIMIT));
    }

    #[cfg(test)]
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection.clone().map(|range| &self.text[range])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_covers_whole_text() {
        let mut field = DisplayField::new("Password");
        field.set_text("Ab3$xyz9");
        field.select_all();
        assert_eq!(field.selection(), Some(0..8));
        assert_eq!(field.selected_text(), Some("Ab3$xyz9"));
    }

    #[test]
    fn empty_field_selects_nothing() {
        let mut field = DisplayField::new("Password");
        field.select_all();
        assert_eq!(field.selection(), Some(0..0));
        assert_eq!(field.placeholder(), "Password");
    }

    #[test]
    fn replacing_text_clears_selection() {
        let mut field = DisplayField::new("Password");
        field.set_text("abcdef");
        field.select_all();
        field.set_text("abcdef");
        assert!(field.selection().is_some());
        field.set_text("ghijkl");
        assert!(field.selection().is_none());
    }
}
