use thiserror::Error;

/// Errors raised by the staging buffer.
///
/// `Overflow` and `Range` indicate a caller bug (the producer or consumer
/// outran its own free-space/used-space check) and should never occur in a
/// correct integration. `Allocation` is the only variant a caller is
/// expected to handle gracefully.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("allocation of {elements} elements failed")]
    Allocation { elements: usize },

    #[error("commit of {requested} elements exceeds free space ({free})")]
    Overflow { requested: usize, free: usize },

    #[error("compact of {requested} elements exceeds used length ({used})")]
    Range { requested: usize, used: usize },
}
