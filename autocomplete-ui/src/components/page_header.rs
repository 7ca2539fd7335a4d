//! Page header component with title and instruction line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Page title
    pub title: String,
    /// Short instruction text shown under the title
    #[props(default = String::new())]
    pub instructions: String,
}

/// Header showing the page title and optional instructions.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h1 {
                style: "margin: 0 0 6px 0; font-size: 24px; color: #2c3e50;",
                "{props.title}"
            }
            if !props.instructions.is_empty() {
                p {
                    style: "margin: 0; font-size: 14px; color: #666;",
                    "{props.instructions}"
                }
            }
        }
    }
}
