use async_trait::async_trait;
use nodeval_domain::{Alias, DomainError, Host};

#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Resolves every address alias of `host`, in resolution order.
    ///
    /// An empty list is a valid answer; only an unresolvable name is an error
    /// (`DomainError::Resolution`).
    async fn resolve(&self, host: &Host) -> Result<Vec<Alias>, DomainError>;
}
