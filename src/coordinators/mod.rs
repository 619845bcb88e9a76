// Coordinators layer - Workflow orchestration
//
// Coordinators run one use case per call: validate input, call stores,
// classify the result for the API layer.
pub mod item_coordinator;

pub use item_coordinator::ItemCoordinator;
