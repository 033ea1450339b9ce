//! Nodeval Domain Layer
pub mod capabilities;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod host;
pub mod node;

pub use capabilities::CapabilityFlags;
pub use config::{CliOverrides, Config, ConfigError};
pub use credentials::Credentials;
pub use errors::DomainError;
pub use host::{Alias, Host, DEFAULT_PORT};
pub use node::ValidatedNode;
