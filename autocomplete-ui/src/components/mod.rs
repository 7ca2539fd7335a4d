//! Reusable Dioxus RSX components for the autocomplete demo apps.

mod autocomplete_input;
mod page_header;
mod selection_banner;

pub use autocomplete_input::AutocompleteInput;
pub use page_header::PageHeader;
pub use selection_banner::SelectionBanner;
