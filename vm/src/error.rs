use thiserror::Error;

/// Violations of the engine's operational preconditions.
///
/// All of these are unrecoverable by contract: they signal a malformed
/// operation sequence, not a runtime condition to absorb. There is no
/// rollback of state already mutated and no retry path; callers respect the
/// preconditions instead of handling the error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    /// Push attempted with the root stack at capacity.
    #[error("stack overflow")]
    StackOverflow,
    /// Pop (or pair construction) attempted without enough roots.
    #[error("stack underflow")]
    StackUnderflow,
    /// The heap's object handle space is exhausted.
    #[error("allocation failure: object handle space exhausted")]
    AllocationFailure,
}
