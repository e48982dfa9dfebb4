use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot accumulate over an empty vector")]
    Empty,

    #[error("operands could not be broadcast together with lengths {lhs} and {rhs}")]
    ShapeMismatch { lhs: usize, rhs: usize },

    #[error("iteration index {index} is not representable in the element type")]
    IndexOutOfRange { index: usize },

    #[error("overflow at iteration {iteration}, position {position}")]
    Overflow { iteration: usize, position: usize },
}
