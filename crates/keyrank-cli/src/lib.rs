//! CLI library components for keyrank.

pub mod document;
pub mod inspect;
pub mod logging;
