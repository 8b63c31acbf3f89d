//! Method and path dispatch over a single request.
//!
//! Every function here is a pure function of its inputs. "Absent" outcomes
//! (`None`) mean the request was not for this handler; they are never errors.

mod either;
mod response;

pub use either::{Reply, Truthy, either};
pub use response::{FromResponse, empty, error, not_allowed, not_found};

use crate::enums::HttpMethod;
use crate::pattern::{Pattern, PatternMatch, match_pattern, test_pattern};
use crate::request::RequestLike;
use crate::types::{Groups, Response};

/// Exact, case-sensitive method comparison.
pub fn is_method<R, M>(req: &R, method: M) -> bool
where
    R: RequestLike + ?Sized,
    M: AsRef<str>,
{
    req.method() == method.as_ref()
}

pub fn test_any<R: RequestLike + ?Sized>(req: &R, pattern: &Pattern) -> bool {
    test_pattern(req.path(), pattern)
}

/// `None` when the method differs, otherwise whether the path matches.
pub fn test<R, M>(req: &R, method: M, pattern: &Pattern) -> Option<bool>
where
    R: RequestLike + ?Sized,
    M: AsRef<str>,
{
    is_method(req, method).then(|| test_any(req, pattern))
}

pub fn match_any<R: RequestLike + ?Sized>(req: &R, pattern: &Pattern) -> Option<PatternMatch> {
    match_pattern(req.path(), pattern)
}

/// Outer `None` when the method differs; inner `None` when the path does not match.
pub fn match_method<R, M>(req: &R, method: M, pattern: &Pattern) -> Option<Option<PatternMatch>>
where
    R: RequestLike + ?Sized,
    M: AsRef<str>,
{
    is_method(req, method).then(|| match_any(req, pattern))
}

/// Calls `handler` with the named groups when the path matches.
pub fn any<R, T, H>(req: &R, pattern: &Pattern, handler: H) -> Option<T>
where
    R: RequestLike + ?Sized,
    H: FnOnce(&R, &Groups) -> T,
{
    let found = match_any(req, pattern)?;
    Some(handler(req, found.groups()))
}

pub fn method<R, M, T, H>(req: &R, method: M, pattern: &Pattern, handler: H) -> Option<T>
where
    R: RequestLike + ?Sized,
    M: AsRef<str>,
    H: FnOnce(&R, &Groups) -> T,
{
    if !is_method(req, method) {
        return None;
    }
    any(req, pattern, handler)
}

macro_rules! verb {
    ($($(#[$meta:meta])* $name:ident => $verb:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $name<R, T, H>(req: &R, pattern: &Pattern, handler: H) -> Option<T>
            where
                R: RequestLike + ?Sized,
                H: FnOnce(&R, &Groups) -> T,
            {
                method(req, $verb, pattern, handler)
            }
        )*
    };
}

verb! {
    get => HttpMethod::Get;
    head => HttpMethod::Head;
    options => HttpMethod::Options;
    post => HttpMethod::Post;
    put => HttpMethod::Put;
    patch => HttpMethod::Patch;
    delete => HttpMethod::Delete;
}

/// When the path matches, runs `handler` and answers 404 if it declines.
pub fn sub<'a, R, T, H>(req: &'a R, pattern: &Pattern, handler: H) -> Option<Reply<'a, T>>
where
    R: RequestLike + Sync + ?Sized,
    T: Truthy + FromResponse + Send + 'a,
    H: FnOnce(&'a R) -> Reply<'a, T>,
{
    if !test_any(req, pattern) {
        return None;
    }
    Some(either(req, handler, |req| {
        tracing::debug!(method = req.method(), path = req.path(), "sub handler declined");
        T::from_response(not_found(req))
    }))
}

/// Like [`sub`], but a declining handler yields 405: the path exists, the
/// method does not.
pub fn methods<'a, R, T, H>(req: &'a R, pattern: &Pattern, handler: H) -> Option<Reply<'a, T>>
where
    R: RequestLike + Sync + ?Sized,
    T: Truthy + FromResponse + Send + 'a,
    H: FnOnce(&'a R) -> Reply<'a, T>,
{
    if !test_any(req, pattern) {
        return None;
    }
    Some(either(req, handler, |req| {
        tracing::debug!(method = req.method(), path = req.path(), "no handler for method");
        T::from_response(not_allowed(req))
    }))
}

/// Guard: `None` if the request method is one of `allowed`, otherwise 405.
pub fn only<R, I, M>(req: &R, allowed: I) -> Option<Response>
where
    R: RequestLike + ?Sized,
    I: IntoIterator<Item = M>,
    M: AsRef<str>,
{
    if allowed.into_iter().any(|m| is_method(req, m)) {
        None
    } else {
        Some(not_allowed(req))
    }
}

pub fn only_get<R: RequestLike + ?Sized>(req: &R) -> Option<Response> {
    only(req, [HttpMethod::Get])
}

pub fn only_head<R: RequestLike + ?Sized>(req: &R) -> Option<Response> {
    only(req, [HttpMethod::Head])
}

pub fn only_options<R: RequestLike + ?Sized>(req: &R) -> Option<Response> {
    only(req, [HttpMethod::Options])
}

pub fn only_post<R: RequestLike + ?Sized>(req: &R) -> Option<Response> {
    only(req, [HttpMethod::Post])
}

pub fn only_put<R: RequestLike + ?Sized>(req: &R) -> Option<Response> {
    only(req, [HttpMethod::Put])
}

pub fn only_patch<R: RequestLike + ?Sized>(req: &R) -> Option<Response> {
    only(req, [HttpMethod::Patch])
}

pub fn only_delete<R: RequestLike + ?Sized>(req: &R) -> Option<Response> {
    only(req, [HttpMethod::Delete])
}

/// HEAD and OPTIONS get an empty 200; everything else is `None`.
pub fn preflight<R: RequestLike + ?Sized>(req: &R) -> Option<Response> {
    preflight_with(req, |_| empty())
}

pub fn preflight_with<R, T, H>(req: &R, handler: H) -> Option<T>
where
    R: RequestLike + ?Sized,
    H: FnOnce(&R) -> T,
{
    if matches!(
        req.standard_method(),
        Some(HttpMethod::Head | HttpMethod::Options)
    ) {
        Some(handler(req))
    } else {
        None
    }
}
