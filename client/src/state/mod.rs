//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`contact`, `nav`) so components depend on small
//! focused models. Each model is provided through Leptos context as an
//! `RwSignal` by the root `App`.

pub mod contact;
pub mod nav;
