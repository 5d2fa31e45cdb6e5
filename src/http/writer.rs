use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Renders a response into the exact wire format.
///
/// CRLF-terminated lines, fixed order: status line, `Content-Type`,
/// `Content-Length` (exact body byte count), `Connection: close`, any extra
/// headers, blank line, body verbatim.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    buf.extend_from_slice(b"Content-Type: text/plain; charset=utf-8\r\n");
    buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.content_length()).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");

    for (k, v) in &resp.extra_headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Writes the serialized response until every byte is on the wire or a
    /// write fails. Partial writes resume where they left off; already-sent
    /// bytes are never retracted. On error the remainder is abandoned and
    /// the caller closes the connection either way.
    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
