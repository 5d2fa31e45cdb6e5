use crate::http::request::RequestLine;

/// Widest method token kept; longer ones are truncated.
pub const MAX_METHOD_LEN: usize = 15;
/// Widest path token kept; longer ones are truncated.
pub const MAX_PATH_LEN: usize = 1023;
/// Widest version token kept; longer ones are truncated.
pub const MAX_VERSION_LEN: usize = 15;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than two whitespace-delimited tokens on the first line.
    MissingTokens,
    /// The first line is not valid UTF-8.
    InvalidEncoding,
}

/// Parses the request line out of the start of `buf`.
///
/// Only the first line is inspected: everything up to the first CR or LF,
/// or the whole buffer if no line terminator made it into the read. Tokens
/// are split on ASCII whitespace and bounded by the `MAX_*_LEN` widths;
/// over-long tokens are truncated, not rejected. Method and path are
/// required, the version is optional.
pub fn parse_request_line(buf: &[u8]) -> Result<RequestLine, ParseError> {
    let line_end = buf
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(buf.len());

    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::InvalidEncoding)?;

    let mut tokens = line.split_whitespace();

    let method = tokens.next().ok_or(ParseError::MissingTokens)?;
    let path = tokens.next().ok_or(ParseError::MissingTokens)?;
    let version = tokens.next().unwrap_or("");

    Ok(RequestLine {
        method: truncate(method, MAX_METHOD_LEN).to_string(),
        path: truncate(path, MAX_PATH_LEN).to_string(),
        version: truncate(version, MAX_VERSION_LEN).to_string(),
    })
}

/// Cuts `s` down to at most `max` bytes without splitting a UTF-8 sequence.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
