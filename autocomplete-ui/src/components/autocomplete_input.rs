//! Text input with a filtering suggestion dropdown.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use autocomplete_core::AutocompleteModel;
use dioxus::prelude::*;

use crate::dom::OutsideClickListener;

/// Distinguishes wrapper element ids when several widgets are mounted.
static NEXT_WIDGET_ID: AtomicUsize = AtomicUsize::new(0);

/// Autocomplete text input.
///
/// Owns its own entry text, filtered view, and dropdown visibility via
/// [`AutocompleteModel`]; the host only learns about confirmed selections
/// through `onselect`. The option list is fixed at mount.
///
/// Typing narrows the list (case-insensitive substring), focus restores the
/// full list, Enter activates the exact match or else the first suggestion,
/// and pointer-down outside the widget closes the dropdown.
#[component]
pub fn AutocompleteInput(
    options: Vec<String>,
    #[props(default = "Type or choose an option".to_string())] placeholder: String,
    #[props(default)] onselect: Option<EventHandler<String>>,
) -> Element {
    let mut model = use_signal(move || AutocompleteModel::new(options));
    let wrapper_id = use_hook(|| {
        format!(
            "autocomplete-input-{}",
            NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)
        )
    });

    // Document-level mousedown listener for outside-click dismissal.
    // Acquired once after mount, released when the component scope drops,
    // whatever the dropdown's visibility at that point.
    let listener: Rc<RefCell<Option<OutsideClickListener>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    {
        let listener = listener.clone();
        let wrapper_id = wrapper_id.clone();
        use_effect(move || {
            if listener.borrow().is_none() {
                *listener.borrow_mut() = OutsideClickListener::register(&wrapper_id, move || {
                    model.write().dismiss();
                });
            }
        });
    }
    use_drop(move || {
        listener.borrow_mut().take();
    });

    // Snapshot the model for rendering; handlers re-borrow at event time.
    let current = model.read();
    let input_value = current.input().to_string();
    let show_list = current.is_open() && !current.filtered().is_empty();
    let suggestions: Vec<String> = current.filtered().to_vec();
    drop(current);

    let on_input = move |evt: Event<FormData>| {
        model.write().edit(&evt.value());
    };

    let on_focus = move |_| {
        model.write().focus();
    };

    let on_key_down = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter {
            let activated = model.write().submit();
            if let Some(choice) = activated {
                if let Some(handler) = onselect {
                    handler.call(choice);
                }
            }
        }
    };

    rsx! {
        div {
            id: "{wrapper_id}",
            style: "position: relative; max-width: 320px;",

            input {
                r#type: "text",
                value: "{input_value}",
                placeholder: "{placeholder}",
                autocomplete: "off",
                style: "width: 100%; box-sizing: border-box; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                oninput: on_input,
                onfocus: on_focus,
                onkeydown: on_key_down,
            }

            // The list renders only while visible with at least one match;
            // a filter that matches nothing shows no list at all.
            if show_list {
                ul {
                    style: "position: absolute; left: 0; right: 0; margin: 2px 0 0 0; padding: 0; list-style: none; background: #fff; border: 1px solid #ddd; border-radius: 4px; max-height: 220px; overflow-y: auto; z-index: 10;",
                    for (idx, option) in suggestions.iter().enumerate() {
                        li {
                            key: "{idx}",
                            style: "padding: 6px 12px; cursor: pointer; font-size: 14px;",
                            onclick: {
                                let option = option.clone();
                                move |_| {
                                    model.write().activate(&option);
                                    if let Some(handler) = onselect {
                                        handler.call(option.clone());
                                    }
                                }
                            },
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}
