//! Adapts arbitrary callables into uniformly pollable promises.
//!
//! A [`Promise`] is polled periodically until it yields [`Poll::Ready`]. A
//! promise factory creates such a promise, and is invoked at the state
//! transitions of whatever drives the computation.
//!
//! Formally a factory is `f(A) -> Promise<T>`, which is awkward to write by
//! hand, so [`Factory`] accepts callables of several shapes and adapts them:
//!
//! - `FnOnce(A) -> T` captures its argument and resolves with `T` on the
//!   first poll.
//! - `FnOnce() -> T` drops the argument and resolves with `T`.
//! - `FnOnce(A) -> P` where `P: Promise` (a settled `Poll<T>` included) is
//!   called right away and `P` is the promise.
//! - `FnOnce() -> P` where `P` is an `FnMut() -> Poll<T>` is called right
//!   away and `P` is the promise.
//! - Any `Promise`, for instance an `FnMut() -> Poll<T>`, is its own factory.
//!   A callable that returns a status but can only be called once goes
//!   through [`lazy`].
//!
//! Any return type the crate does not know as a plain value can be marked as
//! one with [`Done`].
//!
//! Consumers run a factory either once or repeatedly over the life of an
//! enclosing promise, so two methods are provided: [`Factory::once`] moves
//! the callable out, [`Factory::repeated`] clones it.
//!
//! # Examples
//!
//! ```
//! use promise_factory::{Factory, Promise};
//! use std::task::Poll;
//!
//! let mut promise = Factory::new(|x: i32| x + 1).once(5);
//! assert_eq!(promise.poll(), Poll::Ready(6));
//!
//! let poll_fn = |x: i32| if x > 0 { Poll::Ready(x) } else { Poll::Pending };
//! let factory = Factory::new(poll_fn);
//! assert_eq!(factory.repeated(0).poll(), Poll::Pending);
//! assert_eq!(factory.repeated(3).poll(), Poll::Ready(3));
//! ```
use std::task::Poll;

pub mod adapt;
pub mod curried;
pub mod deferred;
pub mod factory;
pub mod future;
pub mod shape;

pub use adapt::{adapt, Adapt, PromiseOf};
pub use curried::{Curried, Thunk};
pub use deferred::{lazy, Deferred, Lazy};
pub use factory::{Factory, NullaryFactory};
pub use future::PromiseFuture;
pub use shape::Done;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("promise polled after it resolved")]
    Spent,
}

/// Something that is polled until it is ready.
///
/// Promises carry no waker; whoever polls them decides when to poll again.
pub trait Promise {
    type Output;

    fn poll(&mut self) -> Poll<Self::Output>;
}

impl<F, T> Promise for F
where
    F: FnMut() -> Poll<T>,
{
    type Output = T;

    #[inline]
    fn poll(&mut self) -> Poll<T> {
        self()
    }
}

/// An already settled status. The first poll hands it out, every later poll
/// is `Pending`.
///
/// ```
/// use promise_factory::Promise;
/// use std::task::Poll;
///
/// let mut settled = Poll::Ready("done");
/// assert_eq!(settled.poll(), Poll::Ready("done"));
/// assert_eq!(settled.poll(), Poll::Pending);
/// ```
impl<T> Promise for Poll<T> {
    type Output = T;

    #[inline]
    fn poll(&mut self) -> Poll<T> {
        std::mem::replace(self, Poll::Pending)
    }
}
