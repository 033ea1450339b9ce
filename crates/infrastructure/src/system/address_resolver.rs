use async_trait::async_trait;
use nodeval_application::ports::AddressResolver;
use nodeval_domain::{Alias, DomainError, Host};
use tokio::net::lookup_host;
use tracing::debug;

/// Resolves hosts through the operating system resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAddressResolver;

impl SystemAddressResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AddressResolver for SystemAddressResolver {
    async fn resolve(&self, host: &Host) -> Result<Vec<Alias>, DomainError> {
        let addrs = lookup_host((host.name.as_str(), host.port))
            .await
            .map_err(|e| DomainError::Resolution {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

        let mut aliases: Vec<Alias> = Vec::new();
        for addr in addrs {
            let alias = Alias::new(addr.ip(), host.port);
            if !aliases.contains(&alias) {
                aliases.push(alias);
            }
        }

        debug!(host = %host, count = aliases.len(), "System resolver answered");
        Ok(aliases)
    }
}
