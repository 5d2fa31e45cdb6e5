use crate::http::parser::ParseError;
use crate::http::request::RequestLine;
use crate::http::response::Response;

/// Maps one parse outcome to exactly one response.
///
/// This is the entire decision surface of the server:
///
/// - parse failure → 400
/// - any method other than `GET` → 405 with `Allow: GET`
/// - `/` → 200, `/health` → 200, anything else → 404
///
/// Paths match exactly; there is no prefix or wildcard matching and the
/// table is fixed at build time.
pub fn dispatch(parsed: Result<RequestLine, ParseError>) -> Response {
    let req = match parsed {
        Ok(req) => req,
        Err(_) => return Response::bad_request(),
    };

    if !req.is_get() {
        return Response::method_not_allowed();
    }

    match req.path.as_str() {
        "/" => Response::ok("hello tinyhttp\n"),
        "/health" => Response::ok("ok\n"),
        _ => Response::not_found(),
    }
}
