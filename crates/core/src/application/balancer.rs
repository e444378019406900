//! Balancer - Picks the agent that would serve the most customers
//!
//! Customers are partitioned by score thresholds: sweeping agents in
//! ascending score order, each agent claims every customer still unclaimed
//! whose score is at or below its own. The agent with the strictly largest
//! claim wins; a shared maximum yields [`TIE_SENTINEL`].

use crate::domain::error::{DomainError, Result};
use crate::domain::{
    Agent, AgentId, AgentMatch, Customer, MatchCount, Outcome, Roster, TIE_SENTINEL,
};
use std::collections::HashSet;
use tracing::{debug, info, trace, warn};

/// Largest away list allowed for a roster of `total_agents` agents
pub fn max_away(total_agents: usize) -> usize {
    total_agents / 2
}

/// One-shot balancing pass over a private copy of the roster.
///
/// Inputs are copied and sorted on construction; the caller's slices are
/// never reordered or drained.
#[derive(Debug, Clone)]
pub struct Balancer {
    /// Available agents ordered by `(score, id)`
    available: Vec<Agent>,
    /// Customers in ascending score order
    customers: Vec<Customer>,
    away_agents: usize,
    total_agents: usize,
}

impl Balancer {
    /// Validate the roster and prepare a balancing pass
    ///
    /// # Errors
    /// - `InvalidAgentId` if an agent uses the reserved id `0`
    /// - `DuplicateAgentId` if two agents share an id
    /// - `TooManyUnavailableAgents` if more than half the agents are away
    /// - `NoAvailableAgents` if nobody is left to serve customers
    pub fn new(agents: &[Agent], customers: &[Customer], away_ids: &[AgentId]) -> Result<Self> {
        let mut seen = HashSet::with_capacity(agents.len());
        for agent in agents {
            if agent.id == TIE_SENTINEL {
                warn!(agent_id = agent.id, "Rejected roster: reserved agent id");
                return Err(DomainError::InvalidAgentId(agent.id));
            }
            if !seen.insert(agent.id) {
                warn!(agent_id = agent.id, "Rejected roster: duplicate agent id");
                return Err(DomainError::DuplicateAgentId(agent.id));
            }
        }

        let away: HashSet<AgentId> = away_ids.iter().copied().collect();
        let total_agents = agents.len();
        let max_away = max_away(total_agents);

        if away.len() > max_away {
            warn!(
                away = away.len(),
                max_away = max_away,
                total_agents = total_agents,
                "Rejected roster: too many unavailable agents"
            );
            return Err(DomainError::TooManyUnavailableAgents {
                away: away.len(),
                max_away,
                total_agents,
            });
        }

        let mut available: Vec<Agent> = agents
            .iter()
            .filter(|agent| !away.contains(&agent.id))
            .copied()
            .collect();

        if available.is_empty() {
            warn!(total_agents = total_agents, "Rejected roster: no available agents");
            return Err(DomainError::NoAvailableAgents);
        }

        // Equal scores fall back to id so the sweep never depends on input order
        available.sort_unstable_by_key(|agent| (agent.score, agent.id));

        let mut customers = customers.to_vec();
        customers.sort_unstable_by_key(|c| c.score);

        Ok(Self {
            available,
            customers,
            away_agents: away.len(),
            total_agents,
        })
    }

    pub fn from_roster(roster: &Roster) -> Result<Self> {
        Self::new(&roster.agents, &roster.customers, &roster.away_agent_ids)
    }

    /// Winning agent id, or [`TIE_SENTINEL`] when the maximum is shared
    pub fn execute(&self) -> AgentId {
        self.outcome().agent_id()
    }

    /// Sweep agents over the customer pool and resolve the leader
    pub fn outcome(&self) -> Outcome {
        let counts = self.match_counts();
        let outcome = counts.leader();

        info!(
            available_agents = self.available.len(),
            away_agents = self.away_agents,
            customers = self.customers.len(),
            unmatched = counts.unmatched(),
            winner = outcome.agent_id(),
            "Balanced customers across agents"
        );

        outcome
    }

    /// Customers claimed per available agent, in sweep order
    pub fn match_counts(&self) -> MatchCount {
        let mut matches = Vec::with_capacity(self.available.len());
        let mut cursor = 0;

        for agent in &self.available {
            // Pool is sorted, so the claimable customers form a prefix
            let claimed = self.customers[cursor..].partition_point(|c| agent.can_serve(c));
            cursor += claimed;

            trace!(
                agent_id = agent.id,
                score = agent.score,
                claimed = claimed,
                "Agent claimed customers"
            );

            matches.push(AgentMatch {
                agent_id: agent.id,
                score: agent.score,
                customers: claimed,
            });
        }

        let unmatched = self.customers.len() - cursor;
        debug!(
            matched = cursor,
            unmatched = unmatched,
            "Customer pool partitioned"
        );

        MatchCount::new(matches, unmatched)
    }

    pub fn total_agents(&self) -> usize {
        self.total_agents
    }

    pub fn away_agents(&self) -> usize {
        self.away_agents
    }

    pub fn max_away(&self) -> usize {
        max_away(self.total_agents)
    }

    pub fn available_agents(&self) -> usize {
        self.available.len()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Score;

    fn balancer(agents: &[Score], customers: &[Score], away: &[AgentId]) -> Result<Balancer> {
        Balancer::from_roster(&Roster::from_scores(agents, customers, away))
    }

    #[test]
    fn test_away_agents_are_skipped() {
        let b = balancer(&[60, 20, 95, 75], &[90, 20, 70, 40, 60, 10], &[2, 4]).unwrap();

        assert_eq!(b.execute(), 1);
        assert_eq!(b.available_agents(), 2);

        let counts = b.match_counts();
        assert_eq!(counts.get(1), Some(4));
        assert_eq!(counts.get(3), Some(2));
        assert_eq!(counts.get(2), None);
        assert_eq!(counts.get(4), None);
    }

    #[test]
    fn test_shared_maximum_returns_sentinel() {
        let b = balancer(
            &[11, 21, 31, 3, 4, 5],
            &[10, 10, 10, 20, 20, 30, 30, 30, 20, 60],
            &[],
        )
        .unwrap();

        assert_eq!(b.execute(), TIE_SENTINEL);
        assert_eq!(
            b.outcome(),
            Outcome::Tie {
                customers: 3,
                agents: 3
            }
        );
        assert_eq!(b.match_counts().unmatched(), 1);
    }

    #[test]
    fn test_lowest_available_agent_claims_everything() {
        let b = balancer(
            &[100, 99, 88, 3, 4, 5],
            &[10, 10, 10, 20, 20, 30, 30, 30, 20, 60],
            &[4, 5, 6],
        )
        .unwrap();

        assert_eq!(b.execute(), 3);
        assert_eq!(b.match_counts().get(3), Some(10));
    }

    #[test]
    fn test_too_many_away_agents_rejected() {
        let err = balancer(&[10, 20, 30], &[5], &[1, 2]).unwrap_err();

        assert_eq!(
            err,
            DomainError::TooManyUnavailableAgents {
                away: 2,
                max_away: 1,
                total_agents: 3
            }
        );
        assert!(err.to_string().contains("Too many unavailable agents"));
    }

    #[test]
    fn test_away_list_at_limit_accepted() {
        let b = balancer(&[10, 20, 30, 40], &[5], &[1, 2]).unwrap();

        assert_eq!(b.max_away(), 2);
        assert_eq!(b.away_agents(), 2);
        assert_eq!(b.execute(), 3);
    }

    #[test]
    fn test_duplicate_away_ids_count_once() {
        let b = balancer(&[10, 20, 30], &[5], &[1, 1, 1]).unwrap();

        assert_eq!(b.away_agents(), 1);
        assert_eq!(b.execute(), 2);
    }

    #[test]
    fn test_unknown_away_id_counts_toward_limit() {
        let err = balancer(&[10, 20, 30], &[5], &[1, 42]).unwrap_err();
        assert!(matches!(
            err,
            DomainError::TooManyUnavailableAgents { away: 2, .. }
        ));
    }

    #[test]
    fn test_empty_roster_has_no_available_agents() {
        let err = balancer(&[], &[10], &[]).unwrap_err();
        assert_eq!(err, DomainError::NoAvailableAgents);
    }

    #[test]
    fn test_reserved_agent_id_rejected() {
        let err = Balancer::new(&[Agent::new(0, 10)], &[], &[]).unwrap_err();
        assert_eq!(err, DomainError::InvalidAgentId(0));
    }

    #[test]
    fn test_duplicate_agent_id_rejected() {
        let err = Balancer::new(&[Agent::new(5, 10), Agent::new(5, 20)], &[], &[]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateAgentId(5));
    }

    #[test]
    fn test_customer_above_every_agent_is_unmatched() {
        let b = balancer(&[10, 20], &[5, 15, 25, 35], &[]).unwrap();
        let counts = b.match_counts();

        assert_eq!(counts.get(1), Some(1));
        assert_eq!(counts.get(2), Some(1));
        assert_eq!(counts.unmatched(), 2);
        assert_eq!(b.execute(), TIE_SENTINEL);
    }

    #[test]
    fn test_sweep_claims_exactly_the_servable_prefix() {
        let b = balancer(&[30], &[31, 30, 29, -5], &[]).unwrap();
        let agent = Agent::new(1, 30);
        let servable = [31, 30, 29, -5]
            .iter()
            .filter(|&&s| agent.can_serve(&Customer::new(s)))
            .count();

        assert_eq!(b.match_counts().get(1), Some(servable));
        assert_eq!(b.match_counts().unmatched(), 1);
    }

    #[test]
    fn test_equal_score_customer_matches_agent() {
        let b = balancer(&[20, 50], &[20, 20, 50], &[]).unwrap();

        assert_eq!(b.match_counts().get(1), Some(2));
        assert_eq!(b.execute(), 1);
    }

    #[test]
    fn test_equal_score_agents_ordered_by_id() {
        let agents = [Agent::new(7, 50), Agent::new(3, 50)];
        let customers = [Customer::new(10), Customer::new(20)];
        let b = Balancer::new(&agents, &customers, &[]).unwrap();

        assert_eq!(b.match_counts().get(3), Some(2));
        assert_eq!(b.match_counts().get(7), Some(0));
        assert_eq!(b.execute(), 3);
    }

    #[test]
    fn test_no_customers() {
        assert_eq!(balancer(&[10], &[], &[]).unwrap().execute(), 1);
        assert_eq!(balancer(&[10, 20], &[], &[]).unwrap().execute(), TIE_SENTINEL);
    }

    #[test]
    fn test_caller_input_untouched() {
        let agents = vec![Agent::new(1, 60), Agent::new(2, 20), Agent::new(3, 95)];
        let customers = vec![Customer::new(90), Customer::new(20), Customer::new(70)];
        let away = vec![2];

        let (agents_before, customers_before) = (agents.clone(), customers.clone());
        let b = Balancer::new(&agents, &customers, &away).unwrap();
        b.execute();

        assert_eq!(agents, agents_before);
        assert_eq!(customers, customers_before);
        assert_eq!(away, vec![2]);
    }

    #[test]
    fn test_execute_is_repeatable() {
        let b = balancer(&[60, 20, 95, 75], &[90, 20, 70, 40, 60, 10], &[2, 4]).unwrap();
        let first = b.execute();

        for _ in 0..5 {
            assert_eq!(b.execute(), first);
        }
    }

    #[test]
    fn test_max_away_rounds_down() {
        assert_eq!(max_away(0), 0);
        assert_eq!(max_away(1), 0);
        assert_eq!(max_away(3), 1);
        assert_eq!(max_away(6), 3);
        assert_eq!(max_away(999), 499);
    }
}
