// Match Count & Outcome Domain Model

use super::{AgentId, Score, TIE_SENTINEL};
use serde::{Deserialize, Serialize};

/// Customers claimed by a single agent during one balancing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMatch {
    pub agent_id: AgentId,
    pub score: Score,
    pub customers: usize,
}

/// Per-agent match counts for one balancing pass.
///
/// Entries are kept in the order agents were swept (ascending score), so the
/// table reads as the threshold partition of the customer list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCount {
    matches: Vec<AgentMatch>,
    unmatched: usize,
}

impl MatchCount {
    pub fn new(matches: Vec<AgentMatch>, unmatched: usize) -> Self {
        Self { matches, unmatched }
    }

    /// Count for a given agent, `None` if the agent did not take part
    pub fn get(&self, agent_id: AgentId) -> Option<usize> {
        self.matches
            .iter()
            .find(|m| m.agent_id == agent_id)
            .map(|m| m.customers)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentMatch> {
        self.matches.iter()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Customers claimed by any agent
    pub fn total_matched(&self) -> usize {
        self.matches.iter().map(|m| m.customers).sum()
    }

    /// Customers scored above every available agent
    pub fn unmatched(&self) -> usize {
        self.unmatched
    }

    /// Resolve the leading agent in a single pass.
    ///
    /// The fold carries `(leader, best, ties)`; a strictly larger count resets
    /// the tie counter, an equal count increments it.
    pub fn leader(&self) -> Outcome {
        let folded = self.matches.iter().fold(
            None::<(AgentId, usize, usize)>,
            |acc, m| match acc {
                None => Some((m.agent_id, m.customers, 1)),
                Some((_, best, _)) if m.customers > best => Some((m.agent_id, m.customers, 1)),
                Some((leader, best, ties)) if m.customers == best => {
                    Some((leader, best, ties + 1))
                }
                keep => keep,
            },
        );

        match folded {
            Some((agent_id, customers, 1)) => Outcome::Winner {
                agent_id,
                customers,
            },
            Some((_, customers, agents)) => Outcome::Tie { customers, agents },
            None => Outcome::Tie {
                customers: 0,
                agents: 0,
            },
        }
    }
}

impl<'a> IntoIterator for &'a MatchCount {
    type Item = &'a AgentMatch;
    type IntoIter = std::slice::Iter<'a, AgentMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Result of a balancing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// A single agent serves strictly more customers than any other
    Winner { agent_id: AgentId, customers: usize },
    /// `agents` agents share the maximum of `customers`
    Tie { customers: usize, agents: usize },
}

impl Outcome {
    /// Wire value: the winner's id, or [`TIE_SENTINEL`] on a tie
    pub fn agent_id(&self) -> AgentId {
        match self {
            Outcome::Winner { agent_id, .. } => *agent_id,
            Outcome::Tie { .. } => TIE_SENTINEL,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner {
                agent_id,
                customers,
            } => write!(f, "WINNER({agent_id}, {customers} customers)"),
            Outcome::Tie { customers, agents } => {
                write!(f, "TIE({agents} agents at {customers} customers)")
            }
        }
    }
}
