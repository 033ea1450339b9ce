use nodeval_application::use_cases::ValidateNodeUseCase;
use nodeval_infrastructure::net::TcpNodeTransport;
use nodeval_infrastructure::protocol::{AdminAuthenticator, InfoProtocolClient};
use nodeval_infrastructure::system::SystemAddressResolver;
use std::sync::Arc;
use tracing::debug;

pub struct UseCases {
    pub validate_node: Arc<ValidateNodeUseCase>,
}

impl UseCases {
    pub fn new() -> Self {
        debug!("Wiring node validation with system resolver and TCP transport");

        let validate_node = Arc::new(ValidateNodeUseCase::new(
            Arc::new(SystemAddressResolver::new()),
            Arc::new(TcpNodeTransport::new()),
            Arc::new(AdminAuthenticator::new()),
            Arc::new(InfoProtocolClient::new()),
        ));

        Self { validate_node }
    }
}
