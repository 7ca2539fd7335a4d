//! Shared Dioxus components for the autocomplete demo apps.
//!
//! This crate provides:
//! - `dom`: a scoped document-level pointer listener for outside-click dismissal
//! - `components`: reusable RSX components (the autocomplete input, header, banner)

pub mod components;
pub mod dom;
