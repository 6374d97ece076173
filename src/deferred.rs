use std::task::Poll;

use crate::{Error, Promise, Thunk};

/// A promise that runs its thunk on the first poll and is ready at once.
///
/// Raw-value callables become promises this way, so the callable does not run
/// until whoever owns the promise first polls it.
///
/// # Examples
///
/// ```
/// use promise_factory::{Deferred, Promise};
/// use std::task::Poll;
///
/// let mut promise = Deferred::new(|| 42);
/// assert!(!promise.is_spent());
/// assert_eq!(promise.poll(), Poll::Ready(42));
/// assert!(promise.is_spent());
/// ```
#[derive(Debug, Clone)]
pub struct Deferred<T> {
    thunk: Option<T>,
}

impl<T: Thunk> Deferred<T> {
    pub fn new(thunk: T) -> Self {
        Self { thunk: Some(thunk) }
    }

    pub fn is_spent(&self) -> bool {
        self.thunk.is_none()
    }

    /// Like [`Promise::poll`], but reports a second poll as [`Error::Spent`]
    /// instead of panicking.
    pub fn try_poll(&mut self) -> Result<Poll<T::Output>, Error> {
        match self.thunk.take() {
            Some(thunk) => Ok(Poll::Ready(thunk.invoke())),
            None => {
                log::debug!("deferred promise polled after it resolved");
                Err(Error::Spent)
            }
        }
    }
}

impl<T: Thunk> Promise for Deferred<T> {
    type Output = T::Output;

    /// # Panics
    ///
    /// Panics if the promise already resolved.
    fn poll(&mut self) -> Poll<T::Output> {
        match self.try_poll() {
            Ok(status) => status,
            Err(err) => panic!("{err}"),
        }
    }
}

/// A promise built by a zero-argument callable on its first poll.
///
/// The callable runs once; what it returns is polled from then on. This is
/// how a callable that can only be called once, yet returns a status, becomes
/// a promise: a plain `FnOnce() -> Poll<T>` cannot be told apart from an
/// `FnMut` poller, so it has to say so by going through [`lazy`].
///
/// ```
/// use promise_factory::{lazy, NullaryFactory, Promise};
/// use std::task::Poll;
///
/// let greeting = String::from("hello");
/// let factory = NullaryFactory::new(lazy(move || Poll::Ready(greeting)));
/// assert_eq!(factory.once().poll(), Poll::Ready(String::from("hello")));
/// ```
#[derive(Debug, Clone)]
#[must_use = "promises do nothing unless polled"]
pub struct Lazy<F, P> {
    f: Option<F>,
    promise: Option<P>,
}

pub fn lazy<F, P>(f: F) -> Lazy<F, P>
where
    F: FnOnce() -> P,
    P: Promise,
{
    Lazy {
        f: Some(f),
        promise: None,
    }
}

impl<F, P> Lazy<F, P> {
    pub fn is_started(&self) -> bool {
        self.f.is_none()
    }
}

impl<F, P> Promise for Lazy<F, P>
where
    F: FnOnce() -> P,
    P: Promise,
{
    type Output = P::Output;

    fn poll(&mut self) -> Poll<P::Output> {
        if let Some(f) = self.f.take() {
            self.promise = Some(f());
        }
        match self.promise.as_mut() {
            Some(promise) => promise.poll(),
            // Only reachable if the callable panicked on an earlier poll.
            None => Poll::Pending,
        }
    }
}
