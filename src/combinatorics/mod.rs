//! Exact combinatorics backing k-out-of-n evaluation.

mod binomial;
mod combinations;

pub use binomial::{binomial, binomial_table};
pub use combinations::CombinationSet;
