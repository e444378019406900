// Assignment Use Case

use super::balancer::{max_away, Balancer};
use crate::domain::{AgentId, MatchCount, Outcome};
use crate::error::Result;
use crate::port::RosterSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Full result of one balancing pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentReport {
    pub outcome: Outcome,
    /// Winner id, `0` on a tie
    pub winner_id: AgentId,

    pub total_agents: usize,
    pub away_agents: usize,
    pub max_away: usize,
    pub available_agents: usize,

    pub customers: usize,
    pub unmatched_customers: usize,
    pub matches: MatchCount,
}

/// Availability headroom of a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub total_agents: usize,
    pub away_agents: usize,
    pub max_away: usize,
}

/// Assignment Service
pub struct AssignmentService {
    source: Arc<dyn RosterSource>,
}

impl AssignmentService {
    pub fn new(source: Arc<dyn RosterSource>) -> Self {
        Self { source }
    }

    /// Load the roster, run the balancer and report the outcome
    pub fn assign(&self) -> Result<AssignmentReport> {
        let roster = self.source.load()?;
        let balancer = Balancer::from_roster(&roster)?;

        let matches = balancer.match_counts();
        let outcome = matches.leader();

        info!(
            outcome = %outcome,
            total_agents = balancer.total_agents(),
            customers = balancer.customer_count(),
            "Assignment completed"
        );

        Ok(AssignmentReport {
            outcome,
            winner_id: outcome.agent_id(),
            total_agents: balancer.total_agents(),
            away_agents: balancer.away_agents(),
            max_away: balancer.max_away(),
            available_agents: balancer.available_agents(),
            customers: balancer.customer_count(),
            unmatched_customers: matches.unmatched(),
            matches,
        })
    }

    /// Validate the roster without sweeping customers
    pub fn check(&self) -> Result<Capacity> {
        let roster = self.source.load()?;
        let balancer = Balancer::from_roster(&roster)?;

        Ok(Capacity {
            total_agents: balancer.total_agents(),
            away_agents: balancer.away_agents(),
            max_away: max_away(balancer.total_agents()),
        })
    }
}
