pub mod admin;
pub mod header;
pub mod info;

pub use admin::AdminAuthenticator;
pub use header::{frame, read_message, MessageType, ProtoHeader};
pub use info::InfoProtocolClient;
