//! Friend Recommendation
//!
//! Pure analysis over the graph: candidates are scored by how many
//! friends they share with the session account. Nothing in here
//! mutates an account.

use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Configuration for friend recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationPolicy {
    /// Minimum number of shared friends before a member is recommended.
    pub min_mutual_friends: usize,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        RecommendationPolicy {
            min_mutual_friends: 2,
        }
    }
}

/// Counts the friends `candidate` and `session` have in common.
///
/// Neither account counts as their own mutual friend: the sets hold
/// usernames of third parties only.
pub(crate) fn mutual_friend_count(candidate: &Account, session: &Account) -> usize {
    candidate
        .friends()
        .intersection(session.friends())
        .count()
}
