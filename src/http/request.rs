/// The parsed first line of an HTTP request.
///
/// Only the request line is ever extracted; any header or body bytes the
/// client sent are read off the socket and discarded. The method is kept as
/// the raw token rather than an enum so that policy (GET-only, everything
/// else answered with 405) lives in the router, not the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The HTTP method token, e.g. "GET" (never empty)
    pub method: String,
    /// The request path, e.g. "/health" (never empty)
    pub path: String,
    /// HTTP version token, e.g. "HTTP/1.1" (may be empty)
    pub version: String,
}

impl RequestLine {
    /// True when the method is exactly `GET`, byte for byte.
    /// `get` and `Get` do not count.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
