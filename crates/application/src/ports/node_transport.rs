use async_trait::async_trait;
use nodeval_domain::{Alias, DomainError};
use std::net::SocketAddr;
use std::time::Duration;

/// An open byte stream to one node alias.
#[async_trait]
pub trait NodeConnection: Send {
    fn peer(&self) -> SocketAddr;

    async fn write_all(&mut self, buf: &[u8]) -> Result<(), DomainError>;

    async fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), DomainError>;

    /// Releases the underlying socket. Calling it more than once is a no-op.
    fn close(&mut self);
}

#[async_trait]
pub trait NodeTransport: Send + Sync {
    async fn open(
        &self,
        alias: &Alias,
        timeout: Duration,
    ) -> Result<Box<dyn NodeConnection>, DomainError>;
}
