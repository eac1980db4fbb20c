// defer_branch/src/conditional/static_branch.rs

//! Implements `DeferBranch`, the selector whose conditions are plain booleans
//! known when each branch is added.

use crate::core::callable::{Action, IntoAction, IntoEagerHandler};
use crate::error::{BranchError, BranchResult};
use tracing::{event, Level};

/// Fluent replacement for an `if / else if / else` chain over pre-computed conditions.
///
/// `A` is the run-time argument value handed to the chosen branch (`()` for none,
/// a tuple for several). `R` is what that branch returns.
///
/// Matching is decided on every [`add`](Self::add): the first branch added with a
/// `true` condition is selected and can never be replaced by a later one.
///
/// ```
/// use defer_branch::defer_branch;
///
/// let mut branch = defer_branch::<u32, String>();
/// branch
///   .add(false, |n: u32| format!("small {n}"))?
///   .add(true, |n: u32| format!("medium {n}"))?
///   .add(true, |n: u32| format!("large {n}"))?;
///
/// assert_eq!(branch.run(7), Some("medium 7".to_string()));
/// # Ok::<(), defer_branch::BranchError>(())
/// ```
pub struct DeferBranch<A, R> {
  selected: Option<Action<A, R>>,
  deferred_nomatch: Option<Action<A, R>>,
}

impl<A, R> DeferBranch<A, R> {
  pub fn new() -> Self {
    Self {
      selected: None,
      deferred_nomatch: None,
    }
  }

  /// Adds a branch.
  ///
  /// If `condition` is `true` and no earlier branch matched, `branch` becomes the
  /// selected branch. Once a branch is selected, later branches are ignored even
  /// when their condition is `true`.
  ///
  /// Fails with `InvalidArgument` if `branch` is `None`; the selector is left as it was.
  pub fn add<B>(&mut self, condition: bool, branch: B) -> BranchResult<&mut Self>
  where
    B: IntoAction<A, R>,
  {
    let branch = branch.into_action().ok_or_else(|| {
      event!(Level::ERROR, "DeferBranch::add called without a branch function.");
      BranchError::invalid_argument("branch")
    })?;

    if condition && self.selected.is_none() {
      event!(Level::DEBUG, "Branch matched and selected.");
      self.selected = Some(branch);
    } else {
      event!(Level::TRACE, condition, already_matched = self.selected.is_some(), "Branch not selected.");
    }
    Ok(self)
  }

  /// Runs `handler` right now, with no arguments, if no branch has matched yet.
  ///
  /// The handler is not stored and its return value is dropped, so branches added
  /// afterwards can't undo this call, and [`run`](Self::run) never sees it.
  /// Use [`deferred_fallback`](Self::deferred_fallback) for a fallback that runs later.
  pub fn fallback<H, T>(&mut self, handler: H) -> BranchResult<&mut Self>
  where
    H: IntoEagerHandler<T>,
  {
    let handler = handler.into_eager_handler().ok_or_else(|| {
      event!(Level::ERROR, "DeferBranch::fallback called without a handler function.");
      BranchError::invalid_argument("handler")
    })?;

    if self.selected.is_none() {
      event!(Level::DEBUG, "No branch matched so far. Invoking fallback handler immediately.");
      let _ = handler();
    }
    Ok(self)
  }

  /// Stores a handler that [`run`](Self::run) invokes, with its arguments, when no branch matched.
  ///
  /// Replaces any previously stored deferred fallback.
  pub fn deferred_fallback<H>(&mut self, handler: H) -> BranchResult<&mut Self>
  where
    H: IntoAction<A, R>,
  {
    let handler = handler.into_action().ok_or_else(|| {
      event!(Level::ERROR, "DeferBranch::deferred_fallback called without a handler function.");
      BranchError::invalid_argument("handler")
    })?;

    event!(Level::TRACE, "Deferred fallback handler stored.");
    self.deferred_nomatch = Some(handler);
    Ok(self)
  }

  /// Invokes the selected branch with `args`, or the deferred fallback if nothing matched.
  ///
  /// Returns `None` when there is neither.
  pub fn run(&self, args: A) -> Option<R> {
    if let Some(branch) = &self.selected {
      return Some(branch(args));
    }

    if let Some(nomatch) = &self.deferred_nomatch {
      event!(Level::DEBUG, "No branch matched. Running deferred fallback handler.");
      return Some(nomatch(args));
    }

    event!(Level::DEBUG, "No branch matched and no deferred fallback registered.");
    None
  }

  /// Whether a branch has been selected.
  pub fn is_matched(&self) -> bool {
    self.selected.is_some()
  }

  pub fn has_deferred_fallback(&self) -> bool {
    self.deferred_nomatch.is_some()
  }
}

impl<A, R> Default for DeferBranch<A, R> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A, R> std::fmt::Debug for DeferBranch<A, R> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DeferBranch")
      .field("matched", &self.is_matched())
      .field("deferred_fallback_present", &self.has_deferred_fallback())
      .finish()
  }
}
