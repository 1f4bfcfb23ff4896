//! Error type for arena allocation failures.

use thiserror::Error;

/// Errors produced by [`crate::Arena`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArenaError {
    /// The underlying system allocator refused a block request.
    #[error("arena out of memory: requested {requested} bytes, block size {block_size} bytes")]
    OutOfMemory {
        requested: usize,
        block_size: usize,
    },
}
