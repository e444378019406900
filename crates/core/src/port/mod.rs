// Port Layer - Interfaces for external dependencies

pub mod roster_source;

// Re-exports
pub use roster_source::{InMemoryRoster, RosterSource};
