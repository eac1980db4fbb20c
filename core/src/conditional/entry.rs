// defer_branch/src/conditional/entry.rs

//! Defines `BranchEntry`, one (condition, action) pair registered on a
//! [`DeferBranchDynamic`](crate::conditional::dynamic_branch::DeferBranchDynamic).

use crate::core::callable::{Action, Predicate};

/// A single registered branch: a deferred condition and the action it guards.
///
/// The condition is evaluated only by `resolve`, never at registration.
pub(crate) struct BranchEntry<A, R> {
  pub(crate) condition: Predicate,
  pub(crate) action: Action<A, R>,
}

impl<A, R> BranchEntry<A, R> {
  pub(crate) fn new(condition: Predicate, action: Action<A, R>) -> Self {
    Self { condition, action }
  }

  pub(crate) fn is_condition_met(&self) -> bool {
    (self.condition)()
  }
}

// Boxed closures don't implement Debug.
impl<A, R> std::fmt::Debug for BranchEntry<A, R> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BranchEntry")
      .field("action_type", &std::any::type_name::<Action<A, R>>())
      .finish_non_exhaustive()
  }
}
