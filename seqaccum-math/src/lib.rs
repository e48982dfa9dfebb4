/// Affine sequence accumulation, `result = i * base + result`
pub mod accumulate;

/// Traits and implementations of BLAS providers
pub mod blas;

/// Error type shared by the vector operations and the accumulator
pub mod error;

/// numpy style text rendering for vectors
pub mod format;

/// Implementations for vector operations and structures
pub mod tensor;

pub use accumulate::{accumulate, accumulate_checked, accumulate_using};
pub use error::Error;
pub use format::PrintOptions;
pub use tensor::Vector;
