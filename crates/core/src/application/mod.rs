// Application Layer - Use Cases and Business Logic

pub mod assignment;
pub mod balancer;

// Re-exports
pub use assignment::{AssignmentReport, AssignmentService, Capacity};
pub use balancer::{max_away, Balancer};
