use super::NodeConnection;
use async_trait::async_trait;
use nodeval_domain::{Credentials, DomainError};

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Runs a single authentication exchange over `conn`.
    async fn authenticate(
        &self,
        conn: &mut dyn NodeConnection,
        credentials: &Credentials,
    ) -> Result<(), DomainError>;
}
