use std::fmt;
use std::marker::PhantomData;

use crate::adapt::{Adapt, PromiseOf};
use crate::shape::{Classify, Nullary, Shape};

/// A callable that produces a promise when handed an `A`.
///
/// The callable may take the argument or ignore it, and may return a plain
/// value or a promise; see the [`adapt`](mod@crate::adapt) module for the rules.
/// Both [`once`](Self::once) and [`repeated`](Self::repeated) return the same
/// promise type, so a loop can use `once` on its last turn and `repeated`
/// before that without caring which one it got.
///
/// # Examples
///
/// ```
/// use promise_factory::{Factory, Promise};
/// use std::task::Poll;
///
/// let factory = Factory::new(|x: i32| x + 1);
/// for i in 0..3 {
///     assert_eq!(factory.repeated(i).poll(), Poll::Ready(i + 1));
/// }
/// assert_eq!(factory.once(5).poll(), Poll::Ready(6));
/// ```
///
/// `once` uses the factory up:
///
/// ```compile_fail
/// use promise_factory::Factory;
///
/// let factory = Factory::new(|x: i32| x + 1);
/// let _first = factory.once(1);
/// let _second = factory.once(2);
/// ```
///
/// `S` is the [shape](crate::shape) of the callable. It is inferred by
/// [`new`](Self::new) and only needs spelling out when the type is named, as
/// in a struct field.
///
///
/// and `repeated` needs a callable that can be cloned:
///
/// ```compile_fail
/// use promise_factory::Factory;
///
/// struct Token;
/// let token = Token;
/// let factory = Factory::new(move |n: usize| {
///     let _held = &token;
///     n
/// });
/// let _ = factory.repeated(1);
/// ```
pub struct Factory<A, F, S> {
    f: F,
    _marker: PhantomData<fn(A) -> S>,
}

impl<A, F, S> Factory<A, F, S> {
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<A, F, S> Factory<A, F, S>
where
    F: Adapt<A, S>,
    S: Classify,
{
    /// Wraps `f`, settling its shape `S` on the spot.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }

    /// Moves the callable out to build the promise.
    pub fn once(self, arg: A) -> PromiseOf<A, F, S> {
        log::trace!("promise factory: once ({})", S::NAME);
        self.f.adapt(arg)
    }

    /// Builds a promise from a clone of the callable, leaving the factory
    /// usable.
    pub fn repeated(&self, arg: A) -> PromiseOf<A, F, S>
    where
        F: Clone,
    {
        log::trace!("promise factory: repeated ({})", S::NAME);
        self.f.clone().adapt(arg)
    }
}

impl<A, F: Clone, S> Clone for Factory<A, F, S> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, F, S: Classify> fmt::Debug for Factory<A, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("shape", &S::NAME)
            .finish_non_exhaustive()
    }
}

/// A factory whose promises take no argument.
///
/// Only zero-argument callables fit: ones returning a value, ones returning
/// a callable promise, and promises.
///
/// ```
/// use promise_factory::{NullaryFactory, Promise};
/// use std::task::Poll;
///
/// let factory = NullaryFactory::new(|| 42);
/// assert_eq!(factory.repeated().poll(), Poll::Ready(42));
/// assert_eq!(factory.once().poll(), Poll::Ready(42));
/// ```
///
/// ```compile_fail
/// use promise_factory::NullaryFactory;
///
/// let _ = NullaryFactory::new(|x: i32| x).once();
/// ```
pub struct NullaryFactory<F, R> {
    f: F,
    _marker: PhantomData<fn() -> R>,
}

impl<F, R> NullaryFactory<F, R> {
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F, R> NullaryFactory<F, R>
where
    F: Adapt<(), Shape<Nullary, R>>,
    Shape<Nullary, R>: Classify,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }

    pub fn once(self) -> PromiseOf<(), F, Shape<Nullary, R>> {
        log::trace!("promise factory: once ({})", <Shape<Nullary, R>>::NAME);
        self.f.adapt(())
    }

    pub fn repeated(&self) -> PromiseOf<(), F, Shape<Nullary, R>>
    where
        F: Clone,
    {
        log::trace!("promise factory: repeated ({})", <Shape<Nullary, R>>::NAME);
        self.f.clone().adapt(())
    }
}

impl<F: Clone, R> Clone for NullaryFactory<F, R> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, R> fmt::Debug for NullaryFactory<F, R>
where
    Shape<Nullary, R>: Classify,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullaryFactory")
            .field("shape", &<Shape<Nullary, R>>::NAME)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Factory, NullaryFactory};
    use crate::shape::{Raw, Shape, Unary};
    use crate::{lazy, Deferred, Promise};
    use std::cell::Cell;
    use std::mem::size_of_val;
    use std::task::Poll;

    #[test]
    fn test_once_and_repeated_share_a_type() {
        let factory = Factory::new(|x: u16| x * 2);
        let mut promises = vec![factory.repeated(1), factory.repeated(2)];
        promises.push(factory.once(3));
        let results: Vec<_> = promises.iter_mut().map(|p| p.poll()).collect();
        assert_eq!(results, [Poll::Ready(2), Poll::Ready(4), Poll::Ready(6)]);
    }

    #[test]
    fn test_repeated_is_stable() {
        let factory = Factory::new(|name: &str| name.len());
        for _ in 0..5 {
            assert_eq!(factory.repeated("ferris").poll(), Poll::Ready(6));
        }
    }

    #[test]
    fn test_once_moves_non_clone_callable() {
        let owned = String::from("moved in");
        let factory = Factory::new(move |suffix: &str| owned + suffix);
        assert_eq!(factory.once("!").poll(), Poll::Ready(String::from("moved in!")));
    }

    #[test]
    fn test_status_factory_with_pending() {
        let factory = Factory::new(|x: i32| if x > 0 { Poll::Ready(x) } else { Poll::Pending });
        assert_eq!(factory.repeated(0).poll(), Poll::Pending);
        assert_eq!(factory.repeated(3).poll(), Poll::Ready(3));
    }

    #[test]
    fn test_nullary_callable_in_argument_factory() {
        let seen = Cell::new(false);
        let factory = Factory::<Vec<u8>, _, _>::new(|| {
            seen.set(true);
            "constant"
        });
        let mut promise = factory.once(vec![1, 2, 3]);
        assert!(!seen.get());
        assert_eq!(promise.poll(), Poll::Ready("constant"));
        assert!(seen.get());
    }

    #[test]
    fn test_nullary_factory_status() {
        let factory = NullaryFactory::new(|| Poll::Ready(1.5));
        assert_eq!(factory.repeated().poll(), Poll::Ready(1.5));
        assert_eq!(factory.once().poll(), Poll::Ready(1.5));
    }

    #[test]
    fn test_factory_named_types() {
        fn double(x: u32) -> u32 {
            x * 2
        }
        fn nine() -> u32 {
            9
        }
        let factory: Factory<u32, fn(u32) -> u32, Shape<Unary, Raw>> =
            Factory::new(double as fn(u32) -> u32);
        let mut promise: Deferred<_> = factory.once(4);
        assert_eq!(promise.poll(), Poll::Ready(8));

        let nullary: NullaryFactory<fn() -> u32, Raw> = NullaryFactory::new(nine as fn() -> u32);
        assert_eq!(nullary.once().poll(), Poll::Ready(9));
    }

    #[test]
    fn test_debug_shows_shape() {
        let factory: Factory<u8, _, Shape<Unary, Raw>> = Factory::new(|x: u8| x);
        assert_eq!(format!("{factory:?}"), "Factory { shape: \"unary/raw\", .. }");
        let nullary: NullaryFactory<_, Raw> = NullaryFactory::new(|| 0u8);
        assert_eq!(format!("{nullary:?}"), "NullaryFactory { shape: \"nullary/raw\", .. }");
    }

    #[test]
    fn test_stateless_factory_is_zero_sized() {
        let factory = Factory::new(|x: u64| x);
        assert_eq!(size_of_val(&factory), 0);
        let _ = factory.once(1);
    }

    #[test]
    fn test_shape_settled_by_new() {
        let factory = Factory::new(|x: i32| x);
        assert_eq!(format!("{factory:?}"), "Factory { shape: \"unary/raw\", .. }");
        let nullary = NullaryFactory::new(|| 'c');
        assert_eq!(format!("{nullary:?}"), "NullaryFactory { shape: \"nullary/raw\", .. }");
    }

    #[test]
    fn test_clone_keeps_shape() {
        let factory = Factory::new(|x: u8| Poll::Ready(x));
        let copy = factory.clone();
        assert_eq!(format!("{copy:?}"), "Factory { shape: \"unary/status\", .. }");
        assert_eq!(copy.once(4).poll(), Poll::Ready(4));
        assert_eq!(factory.once(5).poll(), Poll::Ready(5));
    }

    #[test]
    fn test_once_only_status_closure() {
        let owned = String::from("only once");
        let factory = NullaryFactory::new(lazy(move || Poll::Ready(owned)));
        assert_eq!(factory.once().poll(), Poll::Ready(String::from("only once")));
    }

    #[test]
    fn test_nullary_promise_in_argument_factory() {
        let factory = Factory::<&str, _, _>::new(|| {
            let mut polls = 0;
            move || {
                polls += 1;
                if polls < 2 {
                    Poll::Pending
                } else {
                    Poll::Ready(polls)
                }
            }
        });
        assert_eq!(format!("{factory:?}"), "Factory { shape: \"nullary/promise\", .. }");
        let mut first = factory.repeated("ignored");
        assert_eq!(first.poll(), Poll::Pending);
        assert_eq!(first.poll(), Poll::Ready(2));
        // Each run builds a fresh poller.
        let mut second = factory.once("ignored");
        assert_eq!(second.poll(), Poll::Pending);
        assert_eq!(second.poll(), Poll::Ready(2));
    }

    #[test]
    fn test_nullary_factory_promise() {
        let factory = NullaryFactory::new(|| {
            let mut left = 1;
            move || {
                if left == 0 {
                    Poll::Ready("drained")
                } else {
                    left -= 1;
                    Poll::Pending
                }
            }
        });
        let mut promise = factory.repeated();
        assert_eq!(promise.poll(), Poll::Pending);
        assert_eq!(promise.poll(), Poll::Ready("drained"));
        assert_eq!(factory.once().poll(), Poll::Pending);
    }

    #[test]
    fn test_into_inner() {
        let factory = Factory::<u8, _, Shape<Unary, Raw>>::new(|x: u8| x + 1);
        assert_eq!((factory.into_inner())(1), 2);
    }
}
