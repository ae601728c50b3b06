//! Stateless higher-order functions for building pipelines over `Either`.
//!
//! In a `bind` chain the left side carries the value being worked on and the
//! right side carries whatever stopped the chain. Once a right value shows up
//! it passes through every later step untouched.

use crate::util::Either;

mod combine;
pub use combine::{combine, then};

/// Lifts `f` so it can be fed an `Either<A, C>`.
///
/// A left `A` goes through `f` and the result is returned as is, a right `C`
/// is passed along without calling `f`.
pub fn bind<A, B, C, F>(f: F) -> impl Fn(Either<A, C>) -> Either<B, C>
where
    F: Fn(A) -> Either<B, C>,
{
    move |e| e.dispatch(&f, Either::Right)
}

/// Runs `action` on the value for its side effect and hands the value back.
pub fn return_param<T, F>(action: F) -> impl Fn(T) -> T
where
    F: Fn(&T),
{
    move |arg| {
        action(&arg);
        arg
    }
}

/// Turns a plain `A -> A` step into one that answers with a left `Either`,
/// ready to be given to `bind`.
pub fn return_either_left<A, B, F>(f: F) -> impl Fn(A) -> Either<A, B>
where
    F: Fn(A) -> A,
{
    move |arg| Either::Left(f(arg))
}

/// Returns `f` untouched. Handy for pinning down the `Either` shape of a
/// closure when it is stored before being called.
#[inline]
pub fn identity<A, B, C, F>(f: F) -> F
where
    F: Fn(A) -> Either<B, C>,
{
    f
}
