// src/lib.rs

//! defer-branch: a fluent, type-safe replacement for `if / else if / else` chains.
//!
//! Register ordered (condition, branch) pairs on a selector, optionally add a
//! fallback, then invoke whichever branch matched first:
//!  - [`DeferBranch`]: conditions are `bool`s known up front. The first `true`
//!    condition wins at `add` time and can't be overridden.
//!  - [`DeferBranchDynamic`]: conditions are predicates, evaluated in order by an
//!    explicit `resolve` step that short-circuits on the first match.
//!
//! `run` returns `Option<R>`: `None` means no branch (and no deferred fallback)
//! ran, which stays distinguishable from a branch that returned `None` itself.

pub mod conditional;
pub mod core;
pub mod error;

// --- Re-exports for the Public API ---

pub use crate::conditional::{DeferBranch, DeferBranchDynamic};
pub use crate::core::{Action, IntoAction, IntoEagerHandler, IntoPredicate, Predicate};
pub use crate::error::{BranchError, BranchResult};

/// Creates an empty [`DeferBranch`].
pub fn defer_branch<A, R>() -> DeferBranch<A, R> {
  DeferBranch::new()
}

/// Creates an empty [`DeferBranchDynamic`].
pub fn defer_branch_dynamic<A, R>() -> DeferBranchDynamic<A, R> {
  DeferBranchDynamic::new()
}

/*
    Typical flow:
    1. `let mut branch = defer_branch::<Args, Out>();`
    2. Chain `.add(condition, |args| ...)?` once per arm, in priority order.
    3. Optionally `.fallback(|| ...)?` (fires now, if nothing matched yet) and/or
       `.deferred_fallback(|args| ...)?` (fires from `run`).
    4. `branch.run(args)` -> `Option<Out>`.

    The dynamic variant swaps step 2 for `.add(|| predicate, |args| ...)?` and
    needs a `branch.resolve(args)` before `run`.
*/
