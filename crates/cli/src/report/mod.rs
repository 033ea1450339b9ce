use nodeval_domain::{DomainError, Host, ValidatedNode};
use serde::Serialize;

/// Outcome of validating one seed, as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub seed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<ValidatedNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SeedReport {
    pub fn new(host: &Host, result: Result<ValidatedNode, DomainError>) -> Self {
        match result {
            Ok(node) => Self {
                seed: host.to_string(),
                node: Some(node),
                error: None,
            },
            Err(e) => Self {
                seed: host.to_string(),
                node: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.node.is_some()
    }

    pub fn render_text(&self) -> String {
        match (&self.node, &self.error) {
            (Some(node), _) => {
                let caps = &node.capabilities;
                format!(
                    "{:<24} ok    node={} address={} float={} batch-index={} replicas-all={}",
                    self.seed,
                    node.name,
                    node.address,
                    caps.has_double,
                    caps.has_batch_index,
                    caps.has_replicas_all
                )
            }
            (None, Some(error)) => format!("{:<24} FAIL  {}", self.seed, error),
            (None, None) => format!("{:<24} FAIL", self.seed),
        }
    }
}
