mod address_resolver;
mod authenticator;
mod info_client;
mod node_transport;

pub use address_resolver::AddressResolver;
pub use authenticator::Authenticator;
pub use info_client::{InfoClient, InfoMap};
pub use node_transport::{NodeConnection, NodeTransport};
