use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Pending-connection queue depth for `listen(2)`.
const BACKLOG: u32 = 128;

/// Binds the listening socket: IPv4 stream socket, address reuse enabled,
/// bound to the configured address, listening with a backlog of 128.
///
/// Every step here is a startup failure if it errors; callers propagate
/// and the process exits non-zero.
pub fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = cfg.listen_addr().parse()?;

    let socket = TcpSocket::new_v4()?;
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;

    let listener = socket.listen(BACKLOG)?;
    Ok(listener)
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg)?;
    serve(listener).await
}

/// Accept loop. Takes a pre-bound listener so tests can inject one on an
/// ephemeral port.
///
/// Strictly one connection at a time: the next accept does not happen until
/// the current connection is fully handled and closed. A slow or silent
/// client therefore stalls the whole server; there are no read or write
/// timeouts. That is the intended model, not an accident.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    info!("listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("client connected: {}", peer);

        let mut conn = Connection::new(socket);
        if let Err(e) = conn.run().await {
            // Connection-scoped I/O failure: drop the client, keep serving.
            error!("connection error from {}: {}", peer, e);
        }
    }
}
