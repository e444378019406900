// Customer Domain Model

use super::Score;
use serde::{Deserialize, Serialize};

/// Customer waiting to be served.
///
/// Only the score takes part in matching; any `id` present in a roster
/// document is ignored on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub score: Score,
}

impl Customer {
    pub fn new(score: Score) -> Self {
        Self { score }
    }
}
