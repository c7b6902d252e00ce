//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per page section. Components read/write shared state from
//! Leptos context providers installed by `App`.

pub mod about;
pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod projects;
pub mod skills;
