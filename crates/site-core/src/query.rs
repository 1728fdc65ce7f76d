//! Keys for cached dashboard views.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::NotificationFilter;

/// A cached view that a push event may make stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "view", content = "filter")]
pub enum QueryKey {
    NotificationCount,
    Notifications(NotificationFilter),
    Drawings,
    Submittals,
}

impl QueryKey {
    /// Every view refetched when a push event arrives.
    pub const PUSH_FANOUT: [Self; 6] = [
        Self::NotificationCount,
        Self::Notifications(NotificationFilter::All),
        Self::Notifications(NotificationFilter::Unread),
        Self::Notifications(NotificationFilter::Read),
        Self::Drawings,
        Self::Submittals,
    ];
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotificationCount => f.write_str("notification_count"),
            Self::Notifications(filter) => write!(f, "notifications:{filter}"),
            Self::Drawings => f.write_str("drawings"),
            Self::Submittals => f.write_str("submittals"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fanout_keys_are_distinct() {
        let set: HashSet<_> = QueryKey::PUSH_FANOUT.iter().collect();
        assert_eq!(set.len(), QueryKey::PUSH_FANOUT.len());
    }

    #[test]
    fn display_includes_filter() {
        assert_eq!(
            QueryKey::Notifications(NotificationFilter::Unread).to_string(),
            "notifications:unread"
        );
    }
}
