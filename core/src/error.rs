// defer_branch/src/error.rs
use thiserror::Error;

/// Errors raised while building a branch chain.
///
/// Only registration can fail. Whatever the user's callables do at `run`/`resolve`
/// time (panics, `Err` results) is passed through untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BranchError {
  /// A value that has to be callable (branch, condition or handler) was absent.
  #[error("Invalid argument: {argument} must be a function")]
  InvalidArgument { argument: &'static str },
}

impl BranchError {
  pub(crate) fn invalid_argument(argument: &'static str) -> Self {
    BranchError::InvalidArgument { argument }
  }
}

pub type BranchResult<T, E = BranchError> = std::result::Result<T, E>;
