pub mod cluster;
pub mod errors;
pub mod logging;
pub mod root;

pub use cluster::ClusterConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
