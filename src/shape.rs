//! Compile-time classification of factory callables.
//!
//! A callable's shape is the pair (arity, return category). Each shape is a
//! distinct marker type, [`Shape<Ar, Ret>`], so picking an adaptation is
//! trait resolution and never a runtime branch. Exactly one shape applies to
//! any supported callable; a callable that fits none is rejected by the
//! compiler.
//!
//! Raw returns are recognised by the [`Value`] marker. It is implemented for
//! the usual standard library types and deliberately not for
//! [`Poll`](std::task::Poll), which is what keeps the raw and status shapes
//! apart. Your own return types opt in with an empty impl:
//!
//! ```
//! use promise_factory::{shape::Value, Factory, Promise};
//! use std::task::Poll;
//!
//! #[derive(Debug, PartialEq)]
//! struct Reply(u32);
//! impl Value for Reply {}
//!
//! let mut promise = Factory::new(|id: u32| Reply(id)).once(7);
//! assert_eq!(promise.poll(), Poll::Ready(Reply(7)));
//! ```
//!
//! Types from other crates are returned wrapped in [`Done`].
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::error::Error;
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use crate::Adapt;

/// A raw value a callable may return, to be wrapped into `Poll::Ready`.
pub trait Value {}

macro_rules! value_types {
    ($($ty:ty),* $(,)?) => {
        $(impl Value for $ty {})*
    };
}

value_types!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    str, String, PathBuf, Duration, Instant, SystemTime, Ordering,
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6,
    dyn Error, dyn Error + Send, dyn Error + Send + Sync,
);

macro_rules! value_tuples {
    ($(($($name:ident),+)),* $(,)?) => {
        $(impl<$($name),+> Value for ($($name,)+) {})*
    };
}

value_tuples!((A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, F));

impl<T: ?Sized> Value for &T {}
impl<T: ?Sized> Value for &mut T {}
impl<T> Value for [T] {}
impl<T, const N: usize> Value for [T; N] {}
impl Value for Cow<'_, str> {}
impl<T: Clone> Value for Cow<'_, [T]> {}
impl<T> Value for Option<T> {}
impl<T, E> Value for Result<T, E> {}
impl<T> Value for Vec<T> {}
impl<T> Value for VecDeque<T> {}
impl<K, V, S> Value for HashMap<K, V, S> {}
impl<K, V> Value for BTreeMap<K, V> {}
impl<T, S> Value for HashSet<T, S> {}
impl<T> Value for BTreeSet<T> {}
// Only boxes of values: a boxed closure may well be a promise.
impl<T: Value + ?Sized> Value for Box<T> {}
impl<T: Value + ?Sized> Value for Rc<T> {}
impl<T: Value + ?Sized> Value for Arc<T> {}

/// Marks any `T` as a raw value.
///
/// For return types that are neither listed above nor yours to implement
/// [`Value`] for. The promise resolves with the `Done` itself.
///
/// ```
/// use promise_factory::{Done, Factory, Promise};
/// use std::any::TypeId;
/// use std::task::Poll;
///
/// let mut promise = Factory::new(|_: u8| Done(TypeId::of::<u8>())).once(0);
/// assert_eq!(promise.poll(), Poll::Ready(Done(TypeId::of::<u8>())));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Done<T>(pub T);

impl<T> Done<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Done<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Done<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Value for Done<T> {}

mod sealed {
    pub trait Sealed {}
}

/// Takes no argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nullary;

/// Takes the factory's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unary;

/// Returns a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Raw;

/// Returns (or is) something already speaking the promise contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Status;

/// Returns a callable promise, to be built as soon as the factory runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Promised;

pub struct Shape<Ar, Ret>(PhantomData<fn() -> (Ar, Ret)>);

impl sealed::Sealed for Nullary {}
impl sealed::Sealed for Unary {}
impl sealed::Sealed for Raw {}
impl sealed::Sealed for Status {}
impl sealed::Sealed for Promised {}
impl<Ar: Arity, Ret: Returns> sealed::Sealed for Shape<Ar, Ret> {}

pub trait Arity: sealed::Sealed {
    const ARGS: usize;
}

impl Arity for Nullary {
    const ARGS: usize = 0;
}

impl Arity for Unary {
    const ARGS: usize = 1;
}

pub trait Returns: sealed::Sealed {
    const STATUS: bool;
    #[doc(hidden)]
    const KIND: u8;
}

impl Returns for Raw {
    const STATUS: bool = false;
    const KIND: u8 = 0;
}

impl Returns for Status {
    const STATUS: bool = true;
    const KIND: u8 = 1;
}

impl Returns for Promised {
    const STATUS: bool = true;
    const KIND: u8 = 2;
}

/// Facts about a resolved shape, available as constants.
pub trait Classify: sealed::Sealed {
    const ARITY: usize;
    const RETURNS_STATUS: bool;
    const NAME: &'static str;
}

impl<Ar: Arity, Ret: Returns> Classify for Shape<Ar, Ret> {
    const ARITY: usize = Ar::ARGS;
    const RETURNS_STATUS: bool = Ret::STATUS;
    const NAME: &'static str = match (Ar::ARGS, Ret::KIND) {
        (0, 0) => "nullary/raw",
        (0, 1) => "nullary/status",
        (0, _) => "nullary/promise",
        (_, 0) => "unary/raw",
        (_, 1) => "unary/status",
        (_, _) => "unary/promise",
    };
}

/// Names the shape the compiler picked for `f` when given an `A`.
///
/// ```
/// use promise_factory::shape::shape_of;
///
/// assert_eq!(shape_of::<i32, _, _>(&|x: i32| x * 2), "unary/raw");
/// assert_eq!(shape_of::<i32, _, _>(&|| "ignored"), "nullary/raw");
/// ```
pub fn shape_of<A, F, S>(_f: &F) -> &'static str
where
    F: Adapt<A, S>,
    S: Classify,
{
    S::NAME
}
