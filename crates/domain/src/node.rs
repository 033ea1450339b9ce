use crate::capabilities::CapabilityFlags;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// A cluster member that answered the info handshake with a node name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedNode {
    pub name: String,
    pub address: SocketAddr,
    pub capabilities: CapabilityFlags,
}

impl ValidatedNode {
    pub fn new(name: String, address: SocketAddr, capabilities: CapabilityFlags) -> Self {
        Self {
            name,
            address,
            capabilities,
        }
    }
}
