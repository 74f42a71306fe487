//! Account Module
//!
//! Represents a member of the social graph: who they are friends with,
//! which requests are in flight, and who they have blocked.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A member of the social graph.
///
/// Relationship state is stored symmetrically: when two accounts become
/// friends, both friend sets are updated in the same call. The pair
/// operations below take both accounts mutably so the two sides can
/// never drift apart.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    /// Unique username (registry key).
    username: String,
    /// Usernames of confirmed friends.
    friends: HashSet<String>,
    /// Usernames that have sent this account a request, awaiting a decision.
    incoming_requests: HashSet<String>,
    /// Usernames this account has sent a request to, awaiting their decision.
    outgoing_requests: HashSet<String>,
    /// Usernames that have blocked this account.
    /// Members listed here are invisible to this account.
    blocked_by: HashSet<String>,
    /// Usernames this account has blocked.
    /// Blocked members are never recommended to this account.
    blocked_users: HashSet<String>,
    /// Whether incoming requests are confirmed immediately.
    auto_accept: bool,
}

impl Account {
    /// Creates a new account with no relationships.
    pub fn new(username: &str) -> Self {
        Account {
            username: username.to_string(),
            friends: HashSet::new(),
            incoming_requests: HashSet::new(),
            outgoing_requests: HashSet::new(),
            blocked_by: HashSet::new(),
            blocked_users: HashSet::new(),
            auto_accept: false,
        }
    }

    /// Returns the account's username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the confirmed friends.
    pub fn friends(&self) -> &HashSet<String> {
        &self.friends
    }

    /// Returns the pending requests awaiting this account's decision.
    pub fn incoming_requests(&self) -> &HashSet<String> {
        &self.incoming_requests
    }

    /// Returns the pending requests this account has sent.
    pub fn outgoing_requests(&self) -> &HashSet<String> {
        &self.outgoing_requests
    }

    /// Returns true if `username` is a confirmed friend.
    pub fn has_friend(&self, username: &str) -> bool {
        self.friends.contains(username)
    }

    // ========================================
    // Friend Requests
    // ========================================

    /// Records a friend request from `from` to this account.
    ///
    /// Updates both sides: `from` gains an outgoing entry, this account
    /// gains an incoming entry. Does nothing if the two are already
    /// friends, so a request can never shadow an existing friendship.
    /// Re-sending a pending request is fine; the sets deduplicate.
    ///
    /// If this account has auto-accept enabled, the request is
    /// confirmed immediately.
    pub fn receive_friend_request(&mut self, from: &mut Account) {
        if self.friends.contains(from.username()) {
            return;
        }
        self.incoming_requests.insert(from.username.clone());
        from.outgoing_requests.insert(self.username.clone());
        if self.auto_accept {
            from.friend_request_accepted(self);
        }
    }

    /// Confirms this account's pending request to `by`.
    ///
    /// This account is the requester, `by` is the member accepting.
    /// Both friend sets gain the other's username and every pending
    /// entry between the two is cleared, in both directions, so crossed
    /// requests collapse into a single friendship. Does nothing unless
    /// a request from this account to `by` is actually pending.
    pub fn friend_request_accepted(&mut self, by: &mut Account) {
        let pending = self.outgoing_requests.contains(by.username())
            && by.incoming_requests.contains(self.username());
        if !pending {
            return;
        }
        self.friends.insert(by.username.clone());
        self.outgoing_requests.remove(by.username());
        self.incoming_requests.remove(by.username());
        by.friends.insert(self.username.clone());
        by.incoming_requests.remove(self.username());
        by.outgoing_requests.remove(self.username());
    }

    /// Withdraws this account's pending request to `by`.
    ///
    /// This account is the requester, `by` is the member rejecting.
    /// Removes the pending entries on both sides. Safe to call when no
    /// request is pending.
    pub fn friend_request_rejected(&mut self, by: &mut Account) {
        self.outgoing_requests.remove(by.username());
        by.incoming_requests.remove(self.username());
    }

    /// Ends the friendship between this account and `with`.
    ///
    /// Removes each from the other's friend set. Safe to call when the
    /// two are not friends.
    pub fn cancel_friendship(&mut self, with: &mut Account) {
        self.friends.remove(with.username());
        with.friends.remove(self.username());
    }

    // ========================================
    // Auto-Accept
    // ========================================

    /// Returns whether incoming requests are confirmed immediately.
    pub fn is_auto_accepting(&self) -> bool {
        self.auto_accept
    }

    /// Confirms all future incoming requests immediately.
    ///
    /// Requests already pending are left for an explicit decision.
    pub fn enable_auto_accept(&mut self) {
        self.auto_accept = true;
    }

    /// Returns incoming requests to manual confirmation.
    pub fn disable_auto_accept(&mut self) {
        self.auto_accept = false;
    }

    // ========================================
    // Blocking
    // ========================================

    /// Returns the usernames that have blocked this account.
    pub fn blocked_by(&self) -> &HashSet<String> {
        &self.blocked_by
    }

    /// Returns the usernames this account has blocked.
    pub fn blocked_users(&self) -> &HashSet<String> {
        &self.blocked_users
    }

    /// Records that `username` has blocked this account.
    pub fn add_blocked_by(&mut self, username: &str) {
        self.blocked_by.insert(username.to_string());
    }

    /// Records that `username` no longer blocks this account.
    pub fn remove_blocked_by(&mut self, username: &str) {
        self.blocked_by.remove(username);
    }

    /// Records that this account has blocked `username`.
    ///
    /// There is no inverse operation: unblocking restores the target's
    /// visibility but this account keeps the entry, so the target stays
    /// out of its recommendations.
    pub fn add_blocked_user(&mut self, username: &str) {
        self.blocked_users.insert(username.to_string());
    }
}

/// Opaque login credential for one account.
///
/// Minted when a member joins and by the trusted authentication seam
/// (`SocialNetwork::credential_for`); holding one is what authorizes a
/// login. The graph itself never validates it further.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountHandle {
    username: String,
}

impl AccountHandle {
    pub(crate) fn new(username: &str) -> Self {
        AccountHandle {
            username: username.to_string(),
        }
    }

    /// Returns the username this handle authenticates.
    pub fn username(&self) -> &str {
        &self.username
    }
}
