//! Awaiting promises from ordinary `async` code.
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::Promise;

/// A [`Future`] that drives a [`Promise`].
///
/// Promises have no way to say when they are worth polling again, so a
/// pending poll wakes the task straight away and the executor comes back
/// around on its next turn.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use promise_factory::{Factory, PromiseFuture};
/// use std::task::Poll;
///
/// let mut polls = 0;
/// let factory = Factory::<(), _, _>::new(move || {
///     polls += 1;
///     if polls < 3 { Poll::Pending } else { Poll::Ready(polls) }
/// });
/// assert_eq!(block_on(PromiseFuture::new(factory.once(()))), 3);
/// ```
#[derive(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct PromiseFuture<P> {
    promise: P,
}

// The promise is only ever reached through `&mut`, never pinned.
impl<P> Unpin for PromiseFuture<P> {}

impl<P: Promise> PromiseFuture<P> {
    pub fn new(promise: P) -> Self {
        Self { promise }
    }

    pub fn into_inner(self) -> P {
        self.promise
    }
}

impl<P: Promise> Future for PromiseFuture<P> {
    type Output = P::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.get_mut().promise.poll() {
            Poll::Ready(value) => Poll::Ready(value),
            Poll::Pending => {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }
}
