/// A zero-argument callable that is used up by calling it.
pub trait Thunk {
    type Output;

    fn invoke(self) -> Self::Output;
}

impl<F, R> Thunk for F
where
    F: FnOnce() -> R,
{
    type Output = R;

    #[inline]
    fn invoke(self) -> R {
        self()
    }
}

/// A callable bound to the argument it will be called with.
///
/// Invoking it moves both out and returns `f(arg)`. Nothing is cloned and
/// nothing outlives the `Curried` itself; if `F` and `A` are zero-sized, so is
/// this.
///
/// # Examples
///
/// ```
/// use promise_factory::{Curried, Thunk};
///
/// let greet = Curried::new(|name: String| format!("hello {name}"), "ferris".to_string());
/// assert_eq!(greet.invoke(), "hello ferris");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Curried<F, A> {
    f: F,
    arg: A,
}

impl<F, A> Curried<F, A> {
    pub fn new(f: F, arg: A) -> Self {
        Self { f, arg }
    }

    /// Hands back the callable and argument without calling anything.
    pub fn into_inner(self) -> (F, A) {
        (self.f, self.arg)
    }
}

impl<F, A, R> Thunk for Curried<F, A>
where
    F: FnOnce(A) -> R,
{
    type Output = R;

    #[inline]
    fn invoke(self) -> R {
        (self.f)(self.arg)
    }
}
