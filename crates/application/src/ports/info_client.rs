use super::NodeConnection;
use async_trait::async_trait;
use nodeval_domain::DomainError;
use std::collections::HashMap;

pub type InfoMap = HashMap<String, String>;

#[async_trait]
pub trait InfoClient: Send + Sync {
    /// Sends one info request for `keys` and returns the name/value pairs the node answered.
    async fn request(
        &self,
        conn: &mut dyn NodeConnection,
        keys: &[&str],
    ) -> Result<InfoMap, DomainError>;
}
