//! Widget state machine: input text, filtered view, and dropdown visibility.

use crate::filter::{exact_match, filter_options};

/// Visibility state of the suggestion dropdown.
///
/// The three visible variants record how the current view was produced:
/// the full list (empty input or a fresh focus), a narrowed list, or a
/// filter that matched nothing. Rendering only shows the list for the
/// non-empty visible variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Hidden,
    VisibleAll,
    VisibleFiltered,
    VisibleEmpty,
}

/// Self-contained state for one autocomplete input.
///
/// The option list is fixed at construction. Every method is a total,
/// synchronous transition; selection is reported back to the caller as the
/// return value so the host can forward it to its callback.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteModel {
    options: Vec<String>,
    input: String,
    filtered: Vec<String>,
    dropdown: DropdownState,
}

impl AutocompleteModel {
    /// Creates a closed widget over a fixed option list.
    /// Duplicates in `options` are kept and will appear twice in results.
    pub fn new(options: Vec<String>) -> Self {
        let filtered = options.clone();
        Self {
            options,
            input: String::new(),
            filtered,
            dropdown: DropdownState::Hidden,
        }
    }

    /// Current text in the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Options currently eligible for display, in option-list order.
    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    pub fn dropdown(&self) -> DropdownState {
        self.dropdown
    }

    /// True when the dropdown is in any visible state. The rendered list is
    /// additionally gated on `filtered()` being non-empty.
    pub fn is_open(&self) -> bool {
        self.dropdown != DropdownState::Hidden
    }

    /// Text edited to `value`: recompute the filtered view and show the
    /// dropdown, even when nothing matches.
    pub fn edit(&mut self, value: &str) {
        self.input = value.to_string();
        self.filtered = filter_options(&self.options, value);
        self.dropdown = if value.is_empty() {
            DropdownState::VisibleAll
        } else if self.filtered.is_empty() {
            DropdownState::VisibleEmpty
        } else {
            DropdownState::VisibleFiltered
        };
    }

    /// Input focused: discard any prior narrowing and show the full list.
    /// The entered text itself is left untouched.
    pub fn focus(&mut self) {
        self.filtered = self.options.clone();
        self.dropdown = DropdownState::VisibleAll;
    }

    /// An item was activated (clicked, or resolved from Enter): the input
    /// takes the item's exact text and the dropdown closes.
    pub fn activate(&mut self, option: &str) {
        log::debug!("activated option: {option}");
        self.input = option.to_string();
        self.dropdown = DropdownState::Hidden;
    }

    /// Enter pressed. While the dropdown is visible with at least one match,
    /// activates the case-insensitive exact match for the current text, or
    /// the first match when there is none, and returns the activated text.
    /// Otherwise a no-op returning `None`.
    pub fn submit(&mut self) -> Option<String> {
        if !self.is_open() || self.filtered.is_empty() {
            return None;
        }
        let choice = exact_match(&self.filtered, &self.input)
            .unwrap_or(&self.filtered[0])
            .clone();
        self.activate(&choice);
        Some(choice)
    }

    /// Pointer-down outside the widget: close the dropdown, change nothing else.
    pub fn dismiss(&mut self) {
        self.dropdown = DropdownState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::{AutocompleteModel, DropdownState};

    fn model() -> AutocompleteModel {
        AutocompleteModel::new(
            ["Japan", "Germany", "France"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_starts_hidden_with_full_list() {
        let m = model();
        assert_eq!(m.dropdown(), DropdownState::Hidden);
        assert_eq!(m.input(), "");
        assert_eq!(m.filtered().len(), 3);
    }

    #[test]
    fn test_edit_narrows_and_shows() {
        let mut m = model();
        m.edit("pan");
        assert_eq!(m.filtered(), ["Japan".to_string()]);
        assert_eq!(m.dropdown(), DropdownState::VisibleFiltered);
    }

    #[test]
    fn test_edit_to_empty_restores_full_list() {
        let mut m = model();
        m.edit("pan");
        m.edit("");
        assert_eq!(m.filtered().len(), 3);
        assert_eq!(m.dropdown(), DropdownState::VisibleAll);
    }

    #[test]
    fn test_edit_with_no_match_is_visible_empty() {
        let mut m = model();
        m.edit("xyz");
        assert!(m.filtered().is_empty());
        assert_eq!(m.dropdown(), DropdownState::VisibleEmpty);
        // Enter is a no-op with nothing to pick
        assert_eq!(m.submit(), None);
    }

    #[test]
    fn test_focus_resets_filter_view_but_not_text() {
        let mut m = model();
        m.edit("pan");
        m.focus();
        assert_eq!(m.input(), "pan");
        assert_eq!(m.filtered().len(), 3);
        assert_eq!(m.dropdown(), DropdownState::VisibleAll);
    }

    #[test]
    fn test_activate_sets_text_and_hides() {
        let mut m = model();
        m.edit("pan");
        m.activate("Japan");
        assert_eq!(m.input(), "Japan");
        assert_eq!(m.dropdown(), DropdownState::Hidden);
    }

    #[test]
    fn test_submit_prefers_exact_match_ignoring_case() {
        let mut m = model();
        m.edit("germany");
        assert_eq!(m.submit(), Some("Germany".to_string()));
        assert_eq!(m.input(), "Germany");
        assert_eq!(m.dropdown(), DropdownState::Hidden);
    }

    #[test]
    fn test_submit_falls_back_to_first_match() {
        let mut m = model();
        // "an" matches Japan, Germany, and France; none equals "an"
        m.edit("an");
        assert_eq!(m.filtered().len(), 3);
        assert_eq!(m.submit(), Some("Japan".to_string()));
        assert_eq!(m.input(), "Japan");
    }

    #[test]
    fn test_submit_is_noop_while_hidden() {
        let mut m = model();
        assert_eq!(m.submit(), None);
        m.edit("pan");
        m.dismiss();
        assert_eq!(m.submit(), None);
        // dismiss left the text alone
        assert_eq!(m.input(), "pan");
    }

    #[test]
    fn test_dismiss_hides_without_other_changes() {
        let mut m = model();
        m.edit("fr");
        m.dismiss();
        assert_eq!(m.dropdown(), DropdownState::Hidden);
        assert_eq!(m.input(), "fr");
        assert_eq!(m.filtered(), ["France".to_string()]);
    }
}
