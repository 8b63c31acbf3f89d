use std::future::{Future, IntoFuture};

use futures::FutureExt;
use futures::future::{self, BoxFuture, Either};

/// Whether a handler answered, in the loose sense used by [`either`].
///
/// `None`, `false`, zero, `NaN` and empty strings are falsy. Responses and
/// `Err` values are always truthy, so handler failures reach the caller
/// unchanged instead of triggering a fallback.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy, E> Truthy for Result<T, E> {
    fn is_truthy(&self) -> bool {
        match self {
            Ok(value) => value.is_truthy(),
            Err(_) => true,
        }
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<B> Truthy for http::Response<B> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! int_truthy {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

int_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

/// A handler result: available now, or after one suspension.
pub enum Reply<'a, T> {
    Ready(T),
    Pending(BoxFuture<'a, T>),
}

impl<'a, T> Reply<'a, T> {
    pub fn ready(value: T) -> Self {
        Reply::Ready(value)
    }

    pub fn pending<F>(fut: F) -> Self
    where
        F: Future<Output = T> + Send + 'a,
    {
        Reply::Pending(fut.boxed())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Reply::Ready(_))
    }

    /// The value if no suspension is needed, otherwise the reply itself.
    pub fn try_ready(self) -> Result<T, Self> {
        match self {
            Reply::Ready(value) => Ok(value),
            pending => Err(pending),
        }
    }

    pub fn map<U, F>(self, f: F) -> Reply<'a, U>
    where
        F: FnOnce(T) -> U + Send + 'a,
        T: 'a,
    {
        match self {
            Reply::Ready(value) => Reply::Ready(f(value)),
            Reply::Pending(fut) => Reply::Pending(fut.map(f).boxed()),
        }
    }
}

impl<'a, T: Send + 'a> IntoFuture for Reply<'a, T> {
    type Output = T;
    type IntoFuture = Either<future::Ready<T>, BoxFuture<'a, T>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Reply::Ready(value) => Either::Left(future::ready(value)),
            Reply::Pending(fut) => Either::Right(fut),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Reply<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Reply::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Runs `primary`; when its (resolved) result is falsy, returns `fallback(req)`.
///
/// A pending primary is awaited before the check, and `fallback` is only
/// called after it resolved.
pub fn either<'a, R, T, F, G>(req: &'a R, primary: F, fallback: G) -> Reply<'a, T>
where
    R: Sync + ?Sized,
    T: Truthy + Send + 'a,
    F: FnOnce(&'a R) -> Reply<'a, T>,
    G: FnOnce(&'a R) -> T + Send + 'a,
{
    match primary(req) {
        Reply::Ready(value) if value.is_truthy() => Reply::Ready(value),
        Reply::Ready(_) => Reply::Ready(fallback(req)),
        Reply::Pending(fut) => Reply::pending(async move {
            let value = fut.await;
            if value.is_truthy() {
                value
            } else {
                fallback(req)
            }
        }),
    }
}
