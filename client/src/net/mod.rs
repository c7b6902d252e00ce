//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` posts the contact form to the message-delivery endpoint and
//! drives the submission state machine.

pub mod contact;
