use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid host: {host}: {reason}")]
    Resolution { host: String, reason: String },

    #[error("Failed to find addresses for {host}")]
    NoAddresses { host: String },

    #[error("Connection to {alias} failed: {reason}")]
    Connection { alias: String, reason: String },

    #[error("Authentication rejected by {alias}: {reason}")]
    Authentication { alias: String, reason: String },

    #[error("Invalid info response from {alias}: {reason}")]
    Protocol { alias: String, reason: String },

    #[error("Invalid host address: {0}")]
    InvalidHost(String),
}

impl DomainError {
    pub fn connection(alias: impl ToString, reason: impl ToString) -> Self {
        Self::Connection {
            alias: alias.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn authentication(alias: impl ToString, reason: impl ToString) -> Self {
        Self::Authentication {
            alias: alias.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn protocol(alias: impl ToString, reason: impl ToString) -> Self {
        Self::Protocol {
            alias: alias.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for errors raised before any alias was tried.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Resolution { .. } | Self::NoAddresses { .. } | Self::InvalidHost(_)
        )
    }

    /// The alias an attempt error belongs to, if any.
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Connection { alias, .. }
            | Self::Authentication { alias, .. }
            | Self::Protocol { alias, .. } => Some(alias),
            _ => None,
        }
    }
}
