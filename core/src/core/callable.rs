// defer_branch/src/core/callable.rs

//! Stored callable types and the conversions the builders accept.
//!
//! Every registration method takes "something that may be a function": either a
//! closure / fn item, or an `Option` of one. An absent callable (`None`) is the
//! only way to hand a builder a non-callable value, and it is rejected with
//! [`BranchError::InvalidArgument`](crate::error::BranchError::InvalidArgument).

/// An action owned by a selector. Receives the run-time argument value `A`.
///
/// Multiple run-time arguments are passed as a tuple, none as `()`.
pub type Action<A, R> = Box<dyn Fn(A) -> R + Send + Sync + 'static>;

/// A deferred, zero-argument condition owned by a dynamic selector.
pub type Predicate = Box<dyn Fn() -> bool + Send + Sync + 'static>;

/// Conversion into a stored [`Action`]. Returns `None` when no callable was supplied.
pub trait IntoAction<A, R> {
  fn into_action(self) -> Option<Action<A, R>>;
}

impl<A, R, F> IntoAction<A, R> for F
where
  F: Fn(A) -> R + Send + Sync + 'static,
{
  fn into_action(self) -> Option<Action<A, R>> {
    Some(Box::new(self))
  }
}

impl<A, R, F> IntoAction<A, R> for Option<F>
where
  F: Fn(A) -> R + Send + Sync + 'static,
{
  fn into_action(self) -> Option<Action<A, R>> {
    self.map(|f| Box::new(f) as Action<A, R>)
  }
}

/// Conversion into a stored [`Predicate`]. Returns `None` when no callable was supplied.
pub trait IntoPredicate {
  fn into_predicate(self) -> Option<Predicate>;
}

impl<F> IntoPredicate for F
where
  F: Fn() -> bool + Send + Sync + 'static,
{
  fn into_predicate(self) -> Option<Predicate> {
    Some(Box::new(self))
  }
}

impl<F> IntoPredicate for Option<F>
where
  F: Fn() -> bool + Send + Sync + 'static,
{
  fn into_predicate(self) -> Option<Predicate> {
    self.map(|f| Box::new(f) as Predicate)
  }
}

/// A handler that is invoked at most once, right where it is registered, and never stored.
///
/// Because it never outlives the call, it may be `FnOnce` and may borrow locals.
/// Its return value `T` is discarded by the caller.
pub trait IntoEagerHandler<T> {
  type Handler: FnOnce() -> T;

  fn into_eager_handler(self) -> Option<Self::Handler>;
}

impl<T, F> IntoEagerHandler<T> for F
where
  F: FnOnce() -> T,
{
  type Handler = F;

  fn into_eager_handler(self) -> Option<F> {
    Some(self)
  }
}

impl<T, F> IntoEagerHandler<T> for Option<F>
where
  F: FnOnce() -> T,
{
  type Handler = F;

  fn into_eager_handler(self) -> Option<F> {
    self
  }
}
