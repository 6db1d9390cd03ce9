//! The greeting response
//!
//! Every request gets the same answer, so the body is a `'static` slice
//! wrapped in `Bytes::from_static` - no allocation in the hot path.

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response};
use std::convert::Infallible;

/// The fixed response body (12 bytes, trailing newline included)
pub const GREETING: &[u8] = b"Hello World\n";

/// Content type of the greeting
pub const CONTENT_TYPE: &str = "text/plain";

/// Build the greeting response
pub fn greeting() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .body(Full::new(Bytes::from_static(GREETING)))
        .unwrap()
}

/// Request handler: method, path, headers, and body are all ignored
pub async fn handle(_req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(greeting())
}
