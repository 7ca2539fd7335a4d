//! Document-level pointer listener for outside-click dismissal.
//!
//! The dropdown must close when the user presses the pointer anywhere outside
//! the widget's rendered region. Dioxus event handlers only see events inside
//! the component's own tree, so this goes through `web-sys`: a `mousedown`
//! listener on `document`, held for the widget's lifetime and removed when
//! the guard is dropped.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

/// RAII guard for a document-level `mousedown` listener.
///
/// While alive, invokes the callback for every pointer-down whose target is
/// not contained in the element identified by `wrapper_id`. Dropping the
/// guard unregisters the listener unconditionally.
pub struct OutsideClickListener {
    document: web_sys::Document,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl OutsideClickListener {
    /// Registers the listener. Returns `None` outside a browser context
    /// (no window/document), in which case dismissal is simply inactive.
    pub fn register(wrapper_id: &str, mut on_outside: impl FnMut() + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let id = wrapper_id.to_string();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            // The wrapper is looked up per event: it may not exist yet when
            // the listener is registered, or may have been re-created.
            let inside = match (
                event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok()),
                doc.get_element_by_id(&id),
            ) {
                (Some(node), Some(wrapper)) => wrapper.contains(Some(&node)),
                _ => false,
            };
            if !inside {
                on_outside();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        if document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to register document mousedown listener");
            return None;
        }

        Some(Self { document, closure })
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousedown", self.closure.as_ref().unchecked_ref());
    }
}
