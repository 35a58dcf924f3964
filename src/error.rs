//! Error types for RBD evaluation.

use thiserror::Error;

/// Errors produced by block evaluation.
///
/// Every failure is reported synchronously by the entry point that hit it;
/// on `Err` the contents of any output buffer are unspecified and must not
/// be consumed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RbdError {
    /// A block was given zero components.
    #[error("block has no components")]
    NoComponents,

    /// Sample buffer length does not divide into whole component curves.
    #[error("sample buffer of {len} values does not divide into {count} component curves")]
    LayoutMismatch {
        /// Total samples supplied.
        len: usize,
        /// Component count the buffer was declared with.
        count: u8,
    },

    /// Bridge blocks are defined over exactly five components.
    #[error("bridge blocks require exactly 5 components, got {got}")]
    BridgeComponentCount {
        /// Component count supplied.
        got: u8,
    },

    /// Output buffer does not match the component curve length.
    #[error("output buffer holds {got} values, expected {expected}")]
    OutputLength {
        /// Time samples the inputs describe.
        expected: usize,
        /// Length of the buffer supplied.
        got: usize,
    },

    /// A binomial coefficient required by the identical-components
    /// expansion does not fit in 64 bits.
    #[error("binomial expansion overflows u64 for {n} components at order {k}")]
    BinomialOverflow {
        /// Component count.
        n: u8,
        /// First expansion order (after duality normalization).
        k: u8,
    },

    /// The shared worker pool could not be built.
    #[error("worker pool initialization failed: {0}")]
    ThreadPool(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RbdError>;
