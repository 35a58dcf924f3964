//! Output formatting for evaluated curve reports.

pub mod json;
pub mod terminal;
