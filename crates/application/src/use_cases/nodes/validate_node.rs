use crate::ports::{AddressResolver, Authenticator, InfoClient, NodeTransport};
use crate::services::ScopedConnection;
use nodeval_domain::{Alias, CapabilityFlags, Credentials, DomainError, Host, ValidatedNode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub const NODE_KEY: &str = "node";
pub const FEATURES_KEY: &str = "features";

/// Admits a candidate node: resolves its aliases and returns the first one
/// that completes the info handshake with a node name.
pub struct ValidateNodeUseCase {
    resolver: Arc<dyn AddressResolver>,
    transport: Arc<dyn NodeTransport>,
    authenticator: Arc<dyn Authenticator>,
    info: Arc<dyn InfoClient>,
}

impl ValidateNodeUseCase {
    pub fn new(
        resolver: Arc<dyn AddressResolver>,
        transport: Arc<dyn NodeTransport>,
        authenticator: Arc<dyn Authenticator>,
        info: Arc<dyn InfoClient>,
    ) -> Self {
        Self {
            resolver,
            transport,
            authenticator,
            info,
        }
    }

    pub async fn execute(
        &self,
        host: &Host,
        credentials: Option<&Credentials>,
        connect_timeout: Duration,
    ) -> Result<ValidatedNode, DomainError> {
        let aliases = self.resolver.resolve(host).await?;

        debug!(host = %host, aliases = ?aliases, "Resolved aliases for host");

        if aliases.is_empty() {
            return Err(DomainError::NoAddresses {
                host: host.to_string(),
            });
        }

        let mut first_failure: Option<DomainError> = None;

        for alias in &aliases {
            match self
                .validate_alias(alias, credentials, connect_timeout)
                .await
            {
                Ok(node) => {
                    info!(
                        host = %host,
                        node = %node.name,
                        address = %node.address,
                        "Node validated"
                    );
                    return Ok(node);
                }
                Err(e) => {
                    debug!(alias = %alias, error = %e, "Alias failed");
                    first_failure.get_or_insert(e);
                }
            }
        }

        Err(first_failure.unwrap_or(DomainError::NoAddresses {
            host: host.to_string(),
        }))
    }

    async fn validate_alias(
        &self,
        alias: &Alias,
        credentials: Option<&Credentials>,
        connect_timeout: Duration,
    ) -> Result<ValidatedNode, DomainError> {
        let mut conn = ScopedConnection::new(self.transport.open(alias, connect_timeout).await?);

        if let Some(credentials) = credentials {
            self.authenticator.authenticate(conn.get(), credentials).await?;
        }

        let info = self.info.request(conn.get(), &[NODE_KEY, FEATURES_KEY]).await?;

        let name = match info.get(NODE_KEY) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => return Err(DomainError::protocol(alias, "missing node name")),
        };

        let capabilities = info
            .get(FEATURES_KEY)
            .map(String::as_str)
            .map(CapabilityFlags::parse)
            .unwrap_or_default();

        conn.close();

        Ok(ValidatedNode::new(name, alias.socket_addr(), capabilities))
    }
}
