//! Country name autocomplete demo.
//!
//! A single page: a title, an instruction line, the autocomplete input over a
//! fixed country list, and a confirmation line once a country is chosen.
//!
//! The country list is embedded at compile time from `fixtures/countries.txt`
//! and handed to the widget at mount; the widget reports selections back
//! through its `onselect` callback, and this host keeps the authoritative
//! Selection. The list intentionally contains a duplicate entry ("Brazil"),
//! which displays twice.

use autocomplete_ui::components::{AutocompleteInput, PageHeader, SelectionBanner};
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

const COUNTRIES_TXT: &str = include_str!("../fixtures/countries.txt");

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting country search demo");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("country-search-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let countries = use_hook(|| autocomplete_core::options::parse_option_list(COUNTRIES_TXT));
    let mut selected_country: Signal<Option<String>> = use_signal(|| None);

    rsx! {
        div {
            style: "max-width: 480px; margin: 0 auto; padding: 20px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader {
                title: "Country Search".to_string(),
                instructions: "Suggestions narrow as you type.".to_string(),
            }

            AutocompleteInput {
                options: countries,
                placeholder: "Type or pick a country".to_string(),
                onselect: move |country: String| {
                    info!("Selected country: {country}");
                    selected_country.set(Some(country));
                },
            }

            if let Some(country) = selected_country() {
                SelectionBanner {
                    label: "Currently selected country:".to_string(),
                    value: country,
                }
            }
        }
    }
}
