// defer_branch/src/conditional/mod.rs

//! The branch selectors.
//!
//! `DeferBranch` decides its match while the chain is being built, from plain
//! booleans. `DeferBranchDynamic` stores predicates and decides its match only
//! when `resolve` is called, so the same chain can be re-resolved as the world changes.

pub mod dynamic_branch;
mod entry;
pub mod static_branch;

pub use dynamic_branch::DeferBranchDynamic;
pub use static_branch::DeferBranch;
