use http::StatusCode;

use crate::request::RequestLike;
use crate::types::Response;

fn respond(status: StatusCode, body: String) -> Response {
    let mut res = Response::new(body);
    *res.status_mut() = status;
    res
}

/// 404 for a request no endpoint answered.
pub fn not_found<R: RequestLike + ?Sized>(req: &R) -> Response {
    respond(
        StatusCode::NOT_FOUND,
        format!("no endpoint for {} {}", req.method(), req.path()),
    )
}

/// 405 for a path that exists but does not accept this method.
pub fn not_allowed<R: RequestLike + ?Sized>(req: &R) -> Response {
    respond(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("method {} not allowed for path {}", req.method(), req.path()),
    )
}

pub fn empty() -> Response {
    respond(StatusCode::OK, String::new())
}

/// 500 carrying the error's display text.
pub fn error<E: std::fmt::Display + ?Sized>(err: &E) -> Response {
    respond(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

/// Handler result types that can absorb a built-in fallback response.
pub trait FromResponse {
    fn from_response(res: Response) -> Self;
}

impl FromResponse for Response {
    fn from_response(res: Response) -> Self {
        res
    }
}

impl<T: FromResponse> FromResponse for Option<T> {
    fn from_response(res: Response) -> Self {
        Some(T::from_response(res))
    }
}

impl<T: FromResponse, E> FromResponse for Result<T, E> {
    fn from_response(res: Response) -> Self {
        Ok(T::from_response(res))
    }
}
