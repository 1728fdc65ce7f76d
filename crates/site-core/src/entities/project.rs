use serde::{Deserialize, Serialize};

/// Project entry used to populate the board's project filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
}
