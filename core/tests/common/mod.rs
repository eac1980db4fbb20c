// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Argument Types ---
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Order {
  pub id: u32,
  pub total_cents: u64,
  pub express: bool,
}

// --- Common Error Type for Fallible Branches ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Test branch failed: {0}")]
  Branch(String),
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counters for checking execution counts ---
pub static BRANCH_A_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static BRANCH_B_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static FALLBACK_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static DEFERRED_FALLBACK_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  BRANCH_A_EXEC_COUNTER.store(0, Ordering::SeqCst);
  BRANCH_B_EXEC_COUNTER.store(0, Ordering::SeqCst);
  FALLBACK_EXEC_COUNTER.store(0, Ordering::SeqCst);
  DEFERRED_FALLBACK_EXEC_COUNTER.store(0, Ordering::SeqCst);
}

// --- Predicate helpers for the dynamic selector ---

/// A predicate that returns `outcome` and counts how many times it was evaluated.
pub fn counting_predicate(outcome: bool, evaluations: Arc<AtomicUsize>) -> impl Fn() -> bool + Send + Sync + 'static {
  move || {
    evaluations.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(target: "test_predicates", outcome, "predicate evaluated");
    outcome
  }
}

/// A predicate whose outcome can be flipped between resolves.
pub fn switchable_predicate(switch: Arc<std::sync::atomic::AtomicBool>) -> impl Fn() -> bool + Send + Sync + 'static {
  move || switch.load(Ordering::SeqCst)
}

pub fn new_counter() -> Arc<AtomicUsize> {
  Arc::new(AtomicUsize::new(0))
}
