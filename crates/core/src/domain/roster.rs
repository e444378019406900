// Roster Domain Model (input document)

use super::{Agent, AgentId, Customer, Score};
use serde::{Deserialize, Serialize};

/// Everything a balancing pass needs: agents, customers and who is away
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub agents: Vec<Agent>,
    pub customers: Vec<Customer>,

    #[serde(default)]
    pub away_agent_ids: Vec<AgentId>,
}

impl Roster {
    pub fn new(agents: Vec<Agent>, customers: Vec<Customer>, away_agent_ids: Vec<AgentId>) -> Self {
        Self {
            agents,
            customers,
            away_agent_ids,
        }
    }

    /// Build a roster from bare scores; agent ids are assigned 1..=n in order
    pub fn from_scores(agent_scores: &[Score], customer_scores: &[Score], away: &[AgentId]) -> Self {
        let agents = agent_scores
            .iter()
            .zip(1..)
            .map(|(&score, id)| Agent::new(id, score))
            .collect();
        let customers = customer_scores.iter().copied().map(Customer::new).collect();

        Self::new(agents, customers, away.to_vec())
    }

    /// Parse a roster document
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }
}
