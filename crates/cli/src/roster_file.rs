// JSON roster file adapter for the RosterSource port

use cs_balancer_core::domain::Roster;
use cs_balancer_core::port::RosterSource;
use std::path::PathBuf;
use tracing::debug;

/// Reads a roster document from disk on every load
pub struct JsonFileRoster {
    path: PathBuf,
}

impl JsonFileRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for JsonFileRoster {
    fn load(&self) -> cs_balancer_core::Result<Roster> {
        let raw = std::fs::read_to_string(&self.path)?;
        let roster = Roster::from_json(&raw)?;

        debug!(
            path = %self.path.display(),
            agents = roster.agents.len(),
            customers = roster.customers.len(),
            away = roster.away_agent_ids.len(),
            "Roster loaded"
        );

        Ok(roster)
    }
}
