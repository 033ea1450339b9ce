mod validate_node;

pub use validate_node::{ValidateNodeUseCase, FEATURES_KEY, NODE_KEY};
