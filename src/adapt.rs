//! Turning a callable of any supported shape into a promise.
//!
//! There is one impl per strategy, keyed by the [`Shape`] marker:
//!
//! | shape             | promise                                              |
//! |-------------------|------------------------------------------------------|
//! | `unary/raw`       | `Deferred<Curried<F, A>>`, ready with `f(arg)`       |
//! | `nullary/raw`     | `Deferred<F>`, ready with `f()`; `arg` is dropped    |
//! | `unary/status`    | whatever `f(arg)` returned, called right away        |
//! | `nullary/status`  | `f` itself, polled as is; `arg` is dropped           |
//! | `nullary/promise` | the poller `f()` returned, called right away; `arg` is dropped |
//!
//! The shape is inferred from the callable. Zero-argument callables never see
//! the argument, it is dropped without being looked at.
//!
//! An `FnOnce() -> Poll<T>` that is not also `FnMut` fits none of these:
//! it would be indistinguishable from an `FnMut` poller, which must stay its
//! own promise. Wrap it in [`lazy`](crate::lazy).
use std::task::Poll;

use crate::shape::{Classify, Nullary, Promised, Raw, Shape, Status, Unary, Value};
use crate::{Curried, Deferred, Promise};

/// Adapts `Self`, called with an `A`, into a promise.
///
/// `S` is a marker that the compiler infers; it is never named by callers.
pub trait Adapt<A, S: Classify> {
    type Promise: Promise;

    fn adapt(self, arg: A) -> Self::Promise;
}

/// The promise type `F` adapts to when given an `A`.
pub type PromiseOf<A, F, S> = <F as Adapt<A, S>>::Promise;

// f(A) -> T: capture the argument, resolve with the value on first poll.
impl<A, F, R> Adapt<A, Shape<Unary, Raw>> for F
where
    F: FnOnce(A) -> R,
    R: Value,
{
    type Promise = Deferred<Curried<F, A>>;

    #[inline]
    fn adapt(self, arg: A) -> Self::Promise {
        Deferred::new(Curried::new(self, arg))
    }
}

// f() -> T: drop the argument.
impl<A, F, R> Adapt<A, Shape<Nullary, Raw>> for F
where
    F: FnOnce() -> R,
    R: Value,
{
    type Promise = Deferred<F>;

    #[inline]
    fn adapt(self, arg: A) -> Self::Promise {
        drop(arg);
        Deferred::new(self)
    }
}

// f(A) -> Promise: already a factory, use it.
impl<A, F, P> Adapt<A, Shape<Unary, Status>> for F
where
    F: FnOnce(A) -> P,
    P: Promise,
{
    type Promise = P;

    #[inline]
    fn adapt(self, arg: A) -> P {
        self(arg)
    }
}

// A promise (e.g. FnMut() -> Poll<T>) is its own factory; drop the argument.
impl<A, F> Adapt<A, Shape<Nullary, Status>> for F
where
    F: Promise,
{
    type Promise = F;

    #[inline]
    fn adapt(self, arg: A) -> F {
        drop(arg);
        self
    }
}

// f() -> (FnMut() -> Poll<T>): build the poller now; drop the argument.
impl<A, F, P, T> Adapt<A, Shape<Nullary, Promised>> for F
where
    F: FnOnce() -> P,
    P: FnMut() -> Poll<T>,
{
    type Promise = P;

    #[inline]
    fn adapt(self, arg: A) -> P {
        drop(arg);
        self()
    }
}

/// Adapts `f` and `arg` into a promise.
///
/// ```
/// use promise_factory::{adapt, Promise};
/// use std::task::Poll;
///
/// assert_eq!(adapt(|x: u8| x * 2, 21).poll(), Poll::Ready(42));
/// assert_eq!(adapt(|| "no argument needed", 21).poll(), Poll::Ready("no argument needed"));
/// ```
///
/// A callable fitting no shape does not compile:
///
/// ```compile_fail
/// use promise_factory::adapt;
///
/// struct Opaque;
/// let _ = adapt(|x: u8| Opaque, 1);
/// ```
#[inline]
pub fn adapt<A, F, S>(f: F, arg: A) -> F::Promise
where
    F: Adapt<A, S>,
    S: Classify,
{
    f.adapt(arg)
}
