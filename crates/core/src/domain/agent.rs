// Agent Domain Model

use serde::{Deserialize, Serialize};

/// Agent identifier (positive; `0` is reserved for the tie sentinel)
pub type AgentId = u32;

/// Experience score shared by agents and customers
pub type Score = i32;

/// Returned in place of an agent id when no single agent leads
pub const TIE_SENTINEL: AgentId = 0;

/// Customer-service agent with an experience score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub score: Score,
}

impl Agent {
    pub fn new(id: AgentId, score: Score) -> Self {
        Self { id, score }
    }

    /// An agent serves every customer whose score is at or below its own
    pub fn can_serve(&self, customer: &super::Customer) -> bool {
        customer.score <= self.score
    }
}
