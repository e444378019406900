// CS Balancer Core - Domain Logic & Ports
// NO infrastructure dependencies (file system, CLI, runtime live in outer crates)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{AssignmentReport, AssignmentService, Balancer, Capacity};
pub use domain::{Agent, AgentId, Customer, DomainError, Outcome, Roster, TIE_SENTINEL};
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
