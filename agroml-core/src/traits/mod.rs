//! Trait seams between the pipeline stages. Concrete implementations live
//! in their own crates; tests substitute mocks.

pub mod assignments;
pub mod gateway;
pub mod store;

pub use assignments::IAssignmentDirectory;
pub use gateway::IPredictionGateway;
pub use store::IPredictionStore;
