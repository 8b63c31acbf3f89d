mod error;

pub use error::{RequestError, RequestResult};

use http::Method;

use crate::enums::HttpMethod;
use url::Url;

/// What the dispatcher reads from a request: its method and path.
pub trait RequestLike {
    fn method(&self) -> &str;
    fn path(&self) -> &str;

    /// The method as a standard verb, `None` for extension methods or
    /// non-canonical casing.
    fn standard_method(&self) -> Option<HttpMethod> {
        self.method().parse().ok()
    }
}

impl<T: RequestLike + ?Sized> RequestLike for &T {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn path(&self) -> &str {
        (**self).path()
    }
}

impl<B> RequestLike for http::Request<B> {
    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}

/// A request value with a pre-parsed url.
///
/// Built once per incoming request by the http layer and passed by reference
/// into dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Req {
    method: Method,
    url: Url,
}

impl Req {
    pub fn new(method: &str, url: &str) -> RequestResult<Self> {
        let method =
            Method::from_bytes(method.as_bytes()).map_err(|_| RequestError::InvalidMethod {
                method: method.to_string(),
            })?;
        let url = Url::parse(url).map_err(|err| RequestError::InvalidUrl {
            input: url.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self { method, url })
    }

    pub fn get(url: &str) -> RequestResult<Self> {
        Self::new(HttpMethod::Get.as_str(), url)
    }

    pub fn from_parts(method: Method, url: Url) -> Self {
        Self { method, url }
    }

    pub fn http_method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl RequestLike for Req {
    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn path(&self) -> &str {
        self.url.path()
    }
}

impl<B> TryFrom<&http::Request<B>> for Req {
    type Error = RequestError;

    fn try_from(req: &http::Request<B>) -> RequestResult<Self> {
        let uri = req.uri().to_string();
        let url = Url::parse(&uri).map_err(|err| RequestError::InvalidUrl {
            input: uri,
            reason: err.to_string(),
        })?;
        Ok(Self::from_parts(req.method().clone(), url))
    }
}
