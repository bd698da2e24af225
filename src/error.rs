use core::fmt;

/// Errors returned by [`AvlTree`](crate::AvlTree) mutations.
///
/// Either way the tree is left exactly as it was before the call.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AvlError {
    /// `insert` was given a key that is already present.
    DuplicateKey(i32),
    /// `delete` was given a key that is not present.
    KeyNotFound(i32),
}

impl AvlError {
    /// The key the failed operation was called with.
    #[must_use]
    pub const fn key(self) -> i32 {
        match self {
            AvlError::DuplicateKey(key) | AvlError::KeyNotFound(key) => key,
        }
    }
}

impl fmt::Display for AvlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvlError::DuplicateKey(key) => write!(f, "key {key} is already present"),
            AvlError::KeyNotFound(key) => write!(f, "key {key} is not present"),
        }
    }
}

impl core::error::Error for AvlError {}

/// Result type for tree mutations.
pub type Result<T> = core::result::Result<T, AvlError>;
