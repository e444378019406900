// Roster Source Port (where balancing input comes from)

use crate::domain::Roster;
use crate::error::Result;

/// Roster source interface (file, request body, fixture...)
pub trait RosterSource: Send + Sync {
    /// Load the roster for one balancing pass
    fn load(&self) -> Result<Roster>;
}

/// In-memory roster source (tests, embedding callers)
pub struct InMemoryRoster {
    roster: Roster,
}

impl InMemoryRoster {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

impl RosterSource for InMemoryRoster {
    fn load(&self) -> Result<Roster> {
        Ok(self.roster.clone())
    }
}
