/// HTTP status codes the server can answer with.
///
/// Exactly four outcomes exist:
/// - `Ok` (200): routed request
/// - `BadRequest` (400): unparseable request line
/// - `NotFound` (404): no route for the path
/// - `MethodNotAllowed` (405): anything other than GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// `Content-Type`, `Content-Length` and `Connection: close` are emitted by
/// the writer on every response; `extra_headers` holds anything beyond those
/// (currently only `Allow` on 405), in insertion order so that identical
/// requests always produce byte-identical responses.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers beyond the fixed set, in the order they will be written
    pub extra_headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use tinyhttp::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::MethodNotAllowed)
///     .header("Allow", "GET")
///     .body(b"method not allowed\n".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    extra_headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            extra_headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header beyond the fixed set.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((key.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            extra_headers: self.extra_headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .body(body.into())
            .build()
    }

    /// Creates the 400 Bad Request response for an unparseable request line.
    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest)
            .body(b"bad request\n".to_vec())
            .build()
    }

    /// Creates the 404 Not Found response for unknown paths.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .body(b"not found\n".to_vec())
            .build()
    }

    /// Creates the 405 response for non-GET methods, advertising `Allow: GET`.
    pub fn method_not_allowed() -> Self {
        ResponseBuilder::new(StatusCode::MethodNotAllowed)
            .header("Allow", "GET")
            .body(b"method not allowed\n".to_vec())
            .build()
    }

    /// Exact byte length of the body, as written into `Content-Length`.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
