// defer_branch/src/conditional/dynamic_branch.rs

//! Implements `DeferBranchDynamic`, the selector whose conditions are predicates
//! evaluated lazily by an explicit `resolve` step.

use crate::conditional::entry::BranchEntry;
use crate::core::callable::{Action, IntoAction, IntoPredicate};
use crate::error::{BranchError, BranchResult};
use tracing::{event, instrument, Level};

/// Fluent replacement for an `if / else if / else` chain whose conditions are
/// evaluated later, on demand.
///
/// Usage is two-phase:
/// 1. [`resolve`](Self::resolve) evaluates the conditions in registration order and
///    selects the branch of the first one that holds (or fires the fallback).
/// 2. [`run`](Self::run) invokes the selected branch. It never evaluates conditions.
///
/// `resolve` may be called again at any time; each call starts from scratch with
/// the branches registered so far.
///
/// ```
/// use defer_branch::defer_branch_dynamic;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
///
/// let level = Arc::new(AtomicU32::new(3));
/// let (low, high) = (level.clone(), level.clone());
///
/// let mut branch = defer_branch_dynamic::<&str, String>();
/// branch
///   .add(move || low.load(Ordering::SeqCst) < 5, |who: &str| format!("{who}: low"))?
///   .add(move || high.load(Ordering::SeqCst) >= 5, |who: &str| format!("{who}: high"))?;
///
/// branch.resolve("probe");
/// assert_eq!(branch.run("sensor"), Some("sensor: low".to_string()));
///
/// level.store(9, Ordering::SeqCst);
/// branch.resolve("probe");
/// assert_eq!(branch.run("sensor"), Some("sensor: high".to_string()));
/// # Ok::<(), defer_branch::BranchError>(())
/// ```
pub struct DeferBranchDynamic<A, R> {
  entries: Vec<BranchEntry<A, R>>,
  // Index into `entries` chosen by the latest `resolve`. Entries are never removed.
  selected: Option<usize>,
  nomatch: Option<Action<A, ()>>,
}

impl<A, R> DeferBranchDynamic<A, R> {
  pub fn new() -> Self {
    Self {
      entries: Vec::new(),
      selected: None,
      nomatch: None,
    }
  }

  /// Registers a (condition, branch) pair. Nothing is evaluated until [`resolve`](Self::resolve).
  ///
  /// Fails with `InvalidArgument` if either `condition` or `branch` is `None`
  /// (the condition is checked first); the selector is left as it was.
  pub fn add<C, B>(&mut self, condition: C, branch: B) -> BranchResult<&mut Self>
  where
    C: IntoPredicate,
    B: IntoAction<A, R>,
  {
    let condition = condition.into_predicate().ok_or_else(|| {
      event!(Level::ERROR, "DeferBranchDynamic::add called without a condition function.");
      BranchError::invalid_argument("condition")
    })?;
    let branch = branch.into_action().ok_or_else(|| {
      event!(Level::ERROR, "DeferBranchDynamic::add called without a branch function.");
      BranchError::invalid_argument("branch")
    })?;

    self.entries.push(BranchEntry::new(condition, branch));
    event!(Level::TRACE, num_entries = self.entries.len(), "Branch entry registered.");
    Ok(self)
  }

  /// Stores a handler that [`resolve`](Self::resolve) invokes, with its arguments,
  /// when no condition holds. Replaces any previously stored handler.
  ///
  /// The handler only runs for its side effects: whatever it returns is dropped,
  /// and [`run`](Self::run) never calls it.
  pub fn fallback<H, T>(&mut self, handler: H) -> BranchResult<&mut Self>
  where
    H: IntoAction<A, T>,
    A: 'static,
    T: 'static,
  {
    let handler = handler.into_action().ok_or_else(|| {
      event!(Level::ERROR, "DeferBranchDynamic::fallback called without a handler function.");
      BranchError::invalid_argument("handler")
    })?;

    event!(Level::TRACE, "Fallback handler stored.");
    self.nomatch = Some(Box::new(move |args: A| {
      let _ = handler(args);
    }));
    Ok(self)
  }

  /// Evaluates the conditions in registration order and selects the branch of the
  /// first one that returns `true`. Later conditions are not evaluated.
  ///
  /// If none holds, the selection is cleared and the fallback (if any) is invoked with `args`.
  #[instrument(
        name = "DeferBranchDynamic::resolve",
        skip_all,
        fields(num_entries = self.entries.len())
    )]
  pub fn resolve(&mut self, args: A) {
    self.selected = None;

    for (idx, entry) in self.entries.iter().enumerate() {
      if entry.is_condition_met() {
        event!(Level::DEBUG, entry_index = idx, "Condition matched. Branch selected.");
        self.selected = Some(idx);
        return;
      }
    }

    match &self.nomatch {
      Some(nomatch) => {
        event!(Level::DEBUG, "No condition matched. Invoking fallback handler.");
        nomatch(args);
      }
      None => {
        event!(Level::DEBUG, "No condition matched and no fallback registered.");
      }
    }
  }

  /// Invokes the branch selected by the latest [`resolve`](Self::resolve) with `args`.
  ///
  /// Returns `None` if `resolve` was never called or nothing matched.
  pub fn run(&self, args: A) -> Option<R> {
    let entry = self.selected.and_then(|idx| self.entries.get(idx));
    if entry.is_none() {
      event!(Level::DEBUG, "No branch selected. Nothing to run.");
    }
    entry.map(|entry| (entry.action)(args))
  }

  /// Number of registered branches.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Whether the latest `resolve` selected a branch.
  pub fn is_matched(&self) -> bool {
    self.selected.is_some()
  }

  pub fn has_fallback(&self) -> bool {
    self.nomatch.is_some()
  }
}

impl<A, R> Default for DeferBranchDynamic<A, R> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A, R> std::fmt::Debug for DeferBranchDynamic<A, R> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DeferBranchDynamic")
      .field("entries", &self.entries)
      .field("selected_index", &self.selected)
      .field("fallback_present", &self.has_fallback())
      .finish()
  }
}
