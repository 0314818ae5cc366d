//! ui
//!
//! Presentation of ranked standings.
//!
//! # Modules
//!
//! - [`render`] - Text, markdown, and JSON renderers
//! - [`badge`] - Badge color to style lookup
//! - [`output`] - Diagnostic output and verbosity
//!
//! # Design
//!
//! The UI layer consumes [`crate::core::ranking::Standings`] and podium
//! layouts as plain data. It never ranks or reorders users.

pub mod badge;
pub mod output;
pub mod render;
