//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shortener_form` and `result_card` carry the submission flow; `header`
//! and `footer` are static chrome.

pub mod footer;
pub mod header;
pub mod result_card;
pub mod shortener_form;
