pub mod nodes;

pub use nodes::ValidateNodeUseCase;
