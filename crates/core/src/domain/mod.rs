// Domain Layer - Pure business logic and entities

pub mod agent;
pub mod customer;
pub mod error;
pub mod match_count;
pub mod roster;

// Re-exports
pub use agent::{Agent, AgentId, Score, TIE_SENTINEL};
pub use customer::Customer;
pub use error::DomainError;
pub use match_count::{AgentMatch, MatchCount, Outcome};
pub use roster::Roster;
