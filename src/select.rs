//! SingleSelect - single-choice selection over a fixed option set
//!
//! Drives the network picker. Selection starts empty and, once made,
//! can only be replaced by another valid option or cleared by an
//! external `reset` - never by the component itself.

/// Single-choice selection state with a highlight cursor for
/// keyboard-driven pickers.
#[derive(Clone, Debug)]
pub struct SingleSelect<T> {
    options: Vec<T>,
    selected: Option<usize>,
    highlight: usize,
}

impl<T: PartialEq + Clone> SingleSelect<T> {
    pub fn new(options: Vec<T>) -> Self {
        SingleSelect {
            options,
            selected: None,
            highlight: 0,
        }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Select `value` if it is a member of the option set; foreign
    /// values are ignored and the current selection stands.
    pub fn select(&mut self, value: &T) {
        if let Some(idx) = self.options.iter().position(|o| o == value) {
            self.selected = Some(idx);
            self.highlight = idx;
        }
    }

    /// Select the currently highlighted option
    pub fn select_highlighted(&mut self) {
        if self.highlight < self.options.len() {
            self.selected = Some(self.highlight);
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|i| self.options.get(i))
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// External reset back to the empty state
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.selected = None;
        self.highlight = 0;
    }

    pub fn highlighted(&self) -> usize {
        self.highlight
    }

    pub fn highlight_next(&mut self) {
        if !self.options.is_empty() {
            self.highlight = (self.highlight + 1) % self.options.len();
        }
    }

    pub fn highlight_prev(&mut self) {
        if !self.options.is_empty() {
            self.highlight = self
                .highlight
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn networks() -> SingleSelect<&'static str> {
        SingleSelect::new(vec!["base-sepolia", "base-mainnet"])
    }

    #[test]
    fn starts_empty() {
        let select = networks();
        assert!(select.is_empty());
        assert_eq!(select.selected(), None);
    }

    #[test]
    fn selects_members_only() {
        let mut select = networks();
        select.select(&"base-mainnet");
        assert_eq!(select.selected(), Some(&"base-mainnet"));

        select.select(&"dogecoin");
        // foreign value rejected, selection unchanged
        assert_eq!(select.selected(), Some(&"base-mainnet"));
    }

    #[test]
    fn cannot_become_empty_once_selected() {
        let mut select = networks();
        select.select(&"base-sepolia");
        select.select(&"not-a-network");
        assert!(!select.is_empty());
        select.reset();
        assert!(select.is_empty());
    }

    #[test]
    fn highlight_wraps_and_confirms() {
        let mut select = networks();
        select.highlight_next();
        assert_eq!(select.highlighted(), 1);
        select.highlight_next();
        assert_eq!(select.highlighted(), 0);
        select.highlight_prev();
        assert_eq!(select.highlighted(), 1);
        select.select_highlighted();
        assert_eq!(select.selected(), Some(&"base-mainnet"));
    }
}
