//! Platform-independent logic for the autocomplete input widget.
//!
//! This crate provides:
//! - `filter`: case-insensitive substring matching over an option list
//! - `model`: the widget state machine (input text, filtered view, dropdown)
//! - `options`: parsing of embedded option-list fixtures
//!
//! Nothing here touches the DOM, so everything is unit-testable natively.

pub mod filter;
pub mod model;
pub mod options;

pub use model::{AutocompleteModel, DropdownState};
