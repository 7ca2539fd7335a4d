//! Confirmation line for the current selection.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectionBannerProps {
    /// Label shown before the value
    #[props(default = "Currently selected:".to_string())]
    pub label: String,
    pub value: String,
}

/// Shows the most recently confirmed selection. The host renders this only
/// once a selection exists; there is no deselection path.
#[component]
pub fn SelectionBanner(props: SelectionBannerProps) -> Element {
    rsx! {
        p {
            style: "margin: 16px 0 0 0; font-size: 14px; color: #333;",
            "{props.label} "
            strong { "{props.value}" }
        }
    }
}
