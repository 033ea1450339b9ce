use async_trait::async_trait;
use nodeval_application::ports::{NodeConnection, NodeTransport};
use nodeval_domain::{Alias, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// Opens plain TCP connections to node aliases.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpNodeTransport;

impl TcpNodeTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NodeTransport for TcpNodeTransport {
    async fn open(
        &self,
        alias: &Alias,
        timeout: Duration,
    ) -> Result<Box<dyn NodeConnection>, DomainError> {
        let server_addr = alias.socket_addr();

        let stream = tokio::time::timeout(timeout, TcpStream::connect(server_addr))
            .await
            .map_err(|_| {
                DomainError::connection(
                    server_addr,
                    format!("timeout after {}ms", timeout.as_millis()),
                )
            })?
            .map_err(|e| DomainError::connection(server_addr, e))?;

        stream.set_nodelay(true).map_err(|e| {
            DomainError::connection(server_addr, format!("failed to set TCP_NODELAY: {}", e))
        })?;

        debug!(server = %server_addr, "TCP connection opened");

        Ok(Box::new(TcpConnection::new(stream, server_addr, timeout)))
    }
}

/// A TCP stream whose reads and writes are bounded by `io_timeout`.
pub struct TcpConnection {
    stream: Option<TcpStream>,
    peer: SocketAddr,
    io_timeout: Duration,
}

impl TcpConnection {
    pub fn new(stream: TcpStream, peer: SocketAddr, io_timeout: Duration) -> Self {
        Self {
            stream: Some(stream),
            peer,
            io_timeout,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    fn stream(&mut self) -> Result<&mut TcpStream, DomainError> {
        let peer = self.peer;
        self.stream
            .as_mut()
            .ok_or_else(|| DomainError::connection(peer, "connection already closed"))
    }
}

#[async_trait]
impl NodeConnection for TcpConnection {
    fn peer(&self) -> SocketAddr {
        self.peer
    }

    async fn write_all(&mut self, buf: &[u8]) -> Result<(), DomainError> {
        let (peer, io_timeout) = (self.peer, self.io_timeout);
        let stream = self.stream()?;

        tokio::time::timeout(io_timeout, stream.write_all(buf))
            .await
            .map_err(|_| DomainError::connection(peer, "timeout writing request"))?
            .map_err(|e| DomainError::connection(peer, format!("write failed: {}", e)))
    }

    async fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), DomainError> {
        let (peer, io_timeout) = (self.peer, self.io_timeout);
        let stream = self.stream()?;

        tokio::time::timeout(io_timeout, stream.read_exact(buf))
            .await
            .map_err(|_| DomainError::connection(peer, "timeout reading response"))?
            .map_err(|e| DomainError::connection(peer, format!("read failed: {}", e)))?;

        Ok(())
    }

    fn close(&mut self) {
        if self.stream.take().is_some() {
            debug!(server = %self.peer, "TCP connection closed");
        }
    }
}
