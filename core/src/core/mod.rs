pub mod callable;

// Re-export key types for easier access from other modules (and lib.rs)
pub use callable::{Action, IntoAction, IntoEagerHandler, IntoPredicate, Predicate};
