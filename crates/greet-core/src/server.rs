//! HTTP server implementation
//!
//! Listener setup via socket2, accept loop on tokio, one spawned task
//! per connection served by hyper's HTTP/1.1 connection builder.

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::response;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// A bound, passively-open TCP listener serving the greeting
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Bind a listener for the configured address
    ///
    /// Fails with [`Error::Bind`] when the port is already in use or
    /// binding otherwise fails. Callers should report this and exit
    /// non-zero rather than retry.
    pub fn bind(config: &ServerConfig) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.hostname, config.port)
            .parse()
            .map_err(|_| Error::InvalidAddr(format!("{}:{}", config.hostname, config.port)))?;

        let socket = create_listen_socket(&addr).map_err(|source| Error::Bind { addr, source })?;
        let listener = TcpListener::from_std(socket.into())
            .map_err(|source| Error::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// The address the listener is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until the process is terminated
    pub async fn serve(self) -> Result<()> {
        loop {
            let (stream, _) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(_) => continue,
            };

            tokio::spawn(async move {
                let io = TokioIo::new(stream);

                if let Err(e) = http1::Builder::new()
                    .serve_connection(io, service_fn(response::handle))
                    .await
                {
                    // Only log if not a normal connection close
                    if !e.to_string().contains("connection closed") {
                        eprintln!("Connection error: {}", e);
                    }
                }
            });
        }
    }
}

/// Create a TCP listen socket
///
/// SO_REUSEPORT is intentionally not set: a second server on an occupied
/// port must fail to bind, not share the listener.
fn create_listen_socket(addr: &SocketAddr) -> std::io::Result<Socket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR - allow binding to address in TIME_WAIT
    socket.set_reuse_address(true)?;

    // TCP_NODELAY - disable Nagle's algorithm for lower latency
    socket.set_nodelay(true)?;

    // Tokio requires a non-blocking socket
    socket.set_nonblocking(true)?;

    socket.bind(&(*addr).into())?;

    // Listen with backlog
    socket.listen(1024)?;

    Ok(socket)
}
