// Domain Error Types

use super::AgentId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "Too many unavailable agents: {away} away, at most {max_away} of {total_agents} allowed"
    )]
    TooManyUnavailableAgents {
        away: usize,
        max_away: usize,
        total_agents: usize,
    },

    #[error("No available agents to assign customers to")]
    NoAvailableAgents,

    #[error("Invalid agent id: {0} (0 is reserved)")]
    InvalidAgentId(AgentId),

    #[error("Duplicate agent id: {0}")]
    DuplicateAgentId(AgentId),
}

pub type Result<T> = std::result::Result<T, DomainError>;
