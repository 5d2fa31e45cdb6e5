use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::http::parser::parse_request_line;
use crate::http::response::Response;
use crate::http::router;
use crate::http::writer::ResponseWriter;

/// Upper bound on how much of a request is ever seen. One read, one buffer,
/// never grown or refilled; whatever does not fit in the first read is
/// silently ignored.
pub const MAX_REQUEST_BYTES: usize = 4096;

pub struct Connection {
    stream: TcpStream,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Response),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to completion: one read, one response, close.
    ///
    /// Every path ends in `Closed` and the stream is dropped when the
    /// connection is. A peer that sends nothing (EOF on first read) gets no
    /// response; a read error propagates to the listener, which logs it and
    /// moves on.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(response) => {
                            self.state = ConnectionState::Processing(response);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(response) => {
                    let writer = ResponseWriter::new(response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    // Best effort; the connection closes whether or not
                    // every byte made it out.
                    let result = writer.write_to_stream(&mut self.stream).await;
                    self.state = ConnectionState::Closed;
                    result?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs the single bounded read and picks the response.
    ///
    /// Returns `None` when the peer closed before sending anything.
    async fn read_request(&mut self) -> anyhow::Result<Option<Response>> {
        let mut buf = [0u8; MAX_REQUEST_BYTES];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        debug!("request ({} bytes): {:?}", n, String::from_utf8_lossy(&buf[..n]));

        let response = router::dispatch(parse_request_line(&buf[..n]));
        Ok(Some(response))
    }
}
