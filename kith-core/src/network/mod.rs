// SPDX-FileCopyrightText: 2026 Kith Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Network Orchestrator
//!
//! Main entry point for the Kith API. Owns every account, tracks the
//! single login session, and keeps both sides of every relationship in
//! step when the graph changes.

mod recommend;

pub use recommend::RecommendationPolicy;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::account::{Account, AccountHandle};
use crate::error::{KithError, KithResult};

/// An in-memory social graph with a single login session.
///
/// Members join with a unique username, log in with the handle minted
/// at join time, and then send, answer, or withdraw friend requests,
/// block other members, and ask for recommendations. Everything except
/// joining and logging in requires a session; without one, operations
/// fail with [`KithError::NotLoggedIn`].
///
/// Operations aimed at another member degrade to silent no-ops when
/// the target is missing, invisible, or otherwise in the wrong state.
/// Callers cannot distinguish "no such member" from "member who blocked
/// me", which is the point.
///
/// # Example
///
/// ```
/// use kith_core::SocialNetwork;
///
/// let mut network = SocialNetwork::new();
/// let ana = network.join("ana").unwrap();
/// let bea = network.join("bea").unwrap();
///
/// network.login(&ana);
/// network.send_friendship_to("bea").unwrap();
///
/// network.login(&bea);
/// network.accept_friendship_from("ana").unwrap();
///
/// assert!(network.account("ana").unwrap().has_friend("bea"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SocialNetwork {
    /// Every member of the network, keyed by username.
    members: HashMap<String, Account>,
    /// Username of the logged-in member, if any.
    ///
    /// Sessions are process-local and never survive a snapshot.
    #[serde(skip)]
    session: Option<String>,
    /// Recommendation tuning.
    policy: RecommendationPolicy,
}

impl Default for SocialNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialNetwork {
    /// Creates an empty network with the default recommendation policy.
    pub fn new() -> Self {
        SocialNetwork {
            members: HashMap::new(),
            session: None,
            policy: RecommendationPolicy::default(),
        }
    }

    /// Creates an empty network with a custom recommendation policy.
    pub fn with_policy(policy: RecommendationPolicy) -> Self {
        SocialNetwork {
            members: HashMap::new(),
            session: None,
            policy,
        }
    }

    // === Membership ===

    /// Registers a new member and mints their login credential.
    ///
    /// Returns `None` when the username is empty or already taken;
    /// the existing member is untouched either way. Joining does not
    /// log the new member in.
    pub fn join(&mut self, username: &str) -> Option<AccountHandle> {
        if username.is_empty() || self.members.contains_key(username) {
            debug!("rejected join for {:?}", username);
            return None;
        }
        self.members
            .insert(username.to_string(), Account::new(username));
        info!("{} joined the network", username);
        Some(AccountHandle::new(username))
    }

    /// Mints a login credential for an existing member.
    ///
    /// This is the trusted authentication seam: callers that have
    /// verified a member's identity out of band (or restored a network
    /// with [`from_json`](Self::from_json), which drops all handles)
    /// use it to obtain a fresh handle. Returns `None` for unknown
    /// usernames.
    pub fn credential_for(&self, username: &str) -> Option<AccountHandle> {
        self.members
            .contains_key(username)
            .then(|| AccountHandle::new(username))
    }

    /// Returns the number of members in the network.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns true if nobody has joined yet.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns every member's username, with no visibility filtering.
    ///
    /// This is the registry census for operators and tests; members
    /// going through a session see [`list_members`](Self::list_members)
    /// instead.
    pub fn all_members(&self) -> HashSet<String> {
        self.members.keys().cloned().collect()
    }

    /// Returns a member's account by username.
    pub fn account(&self, username: &str) -> Option<&Account> {
        self.members.get(username)
    }

    // === Sessions ===

    /// Opens a session for the holder of `handle`.
    ///
    /// The handle itself is the credential; no further validation
    /// happens here. Any previous session is replaced. Returns a clone
    /// of the handle for call chaining.
    pub fn login(&mut self, handle: &AccountHandle) -> AccountHandle {
        debug!("session opened for {}", handle.username());
        self.session = Some(handle.username().to_string());
        handle.clone()
    }

    /// Closes the current session, if any.
    pub fn logout(&mut self) {
        if let Some(username) = self.session.take() {
            debug!("session closed for {}", username);
        }
    }

    /// Returns the username of the logged-in member, if any.
    pub fn current_session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Returns the session username or fails with [`KithError::NotLoggedIn`].
    fn session_name(&self) -> KithResult<&str> {
        self.session.as_deref().ok_or(KithError::NotLoggedIn)
    }

    /// Returns disjoint mutable borrows of two distinct accounts.
    ///
    /// `None` when the names are equal or either account is missing,
    /// which makes every pair operation a no-op for self-targets and
    /// departed members.
    fn pair_mut(&mut self, first: &str, second: &str) -> Option<(&mut Account, &mut Account)> {
        if first == second {
            return None;
        }
        let [a, b] = self.members.get_disjoint_mut([first, second]);
        a.zip(b)
    }

    // === Visibility ===

    /// Returns the usernames visible to the logged-in member.
    ///
    /// Everyone is listed except members that have blocked the session
    /// account. The session account sees itself.
    pub fn list_members(&self) -> KithResult<HashSet<String>> {
        let me = self.session_name()?;
        let mut visible: HashSet<String> = self.members.keys().cloned().collect();
        if let Some(session) = self.members.get(me) {
            for blocker in session.blocked_by() {
                visible.remove(blocker);
            }
        }
        Ok(visible)
    }

    /// Returns true if `username` belongs to the network.
    ///
    /// Existence checks consult the full registry, so a member that
    /// blocked the session account still reports as present even
    /// though [`list_members`](Self::list_members) omits them.
    pub fn has_member(&self, username: &str) -> KithResult<bool> {
        self.session_name()?;
        Ok(self.members.contains_key(username))
    }

    // === Friend Requests ===

    /// Sends a friend request from the logged-in member to `username`.
    ///
    /// No-op when the target is not visible to the session (missing,
    /// or has blocked the session account), when the target is the
    /// session account itself, or when the two are already friends.
    /// If the target auto-accepts, the friendship is confirmed in the
    /// same call.
    pub fn send_friendship_to(&mut self, username: &str) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        if !self.list_members()?.contains(username) {
            return Ok(());
        }
        if let Some((target, requester)) = self.pair_mut(username, &me) {
            target.receive_friend_request(requester);
            debug!("{} sent a friend request to {}", me, username);
        }
        Ok(())
    }

    /// Confirms the pending request from `username` to the logged-in
    /// member, making the two friends.
    ///
    /// No-op when no such request is pending.
    pub fn accept_friendship_from(&mut self, username: &str) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        if let Some((requester, confirmer)) = self.pair_mut(username, &me) {
            requester.friend_request_accepted(confirmer);
        }
        Ok(())
    }

    /// Declines the pending request from `username` to the logged-in
    /// member.
    ///
    /// No-op when no such request is pending. The requester learns
    /// nothing beyond their outgoing entry disappearing.
    pub fn reject_friendship_from(&mut self, username: &str) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        if let Some((requester, decliner)) = self.pair_mut(username, &me) {
            requester.friend_request_rejected(decliner);
        }
        Ok(())
    }

    /// Confirms every request currently pending for the logged-in
    /// member.
    pub fn accept_all_friendships(&mut self) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        for requester in self.pending_requests(&me) {
            self.accept_friendship_from(&requester)?;
        }
        Ok(())
    }

    /// Declines every request currently pending for the logged-in
    /// member.
    pub fn reject_all_friendships(&mut self) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        for requester in self.pending_requests(&me) {
            self.reject_friendship_from(&requester)?;
        }
        Ok(())
    }

    /// Snapshot of the requests pending for `username`, for iteration
    /// while the graph is being mutated.
    fn pending_requests(&self, username: &str) -> Vec<String> {
        self.members
            .get(username)
            .map(|account| account.incoming_requests().iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Ends the friendship between the logged-in member and `username`.
    ///
    /// Both friend sets are updated. No-op when the two are not
    /// friends or the target is missing.
    pub fn send_friendship_cancellation_to(&mut self, username: &str) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        if let Some((target, actor)) = self.pair_mut(username, &me) {
            target.cancel_friendship(actor);
            debug!("{} cancelled friendship with {}", me, username);
        }
        Ok(())
    }

    /// Turns on immediate confirmation of incoming requests for the
    /// logged-in member.
    ///
    /// Takes effect for requests that arrive from now on; anything
    /// already pending still needs an explicit decision.
    pub fn auto_accept_friendships(&mut self) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        if let Some(account) = self.members.get_mut(&me) {
            account.enable_auto_accept();
        }
        Ok(())
    }

    /// Returns the logged-in member to deciding each request manually.
    pub fn cancel_auto_accept_friendships(&mut self) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        if let Some(account) = self.members.get_mut(&me) {
            account.disable_auto_accept();
        }
        Ok(())
    }

    // === Blocking ===

    /// Blocks `username` on behalf of the logged-in member.
    ///
    /// The target stops seeing the session account anywhere. Any
    /// pending request from the target is rejected and an existing
    /// friendship is cancelled in the same call. No-op for unknown
    /// targets and for the session account itself. Blocking someone
    /// already blocked changes nothing.
    pub fn block(&mut self, username: &str) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        let Some((blocker, target)) = self.pair_mut(&me, username) else {
            return Ok(());
        };
        blocker.add_blocked_user(target.username());
        target.add_blocked_by(blocker.username());
        if blocker.incoming_requests().contains(target.username()) {
            target.friend_request_rejected(blocker);
        }
        if blocker.has_friend(target.username()) {
            target.cancel_friendship(blocker);
        }
        debug!("{} blocked {}", me, username);
        Ok(())
    }

    /// Restores `username`'s view of the logged-in member.
    ///
    /// Only visibility comes back: the session account keeps the
    /// target in its own blocked list, so the target is still never
    /// recommended to it. Rejected requests and cancelled friendships
    /// stay undone. No-op for unknown targets.
    pub fn unblock(&mut self, username: &str) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        if let Some(target) = self.members.get_mut(username) {
            target.remove_blocked_by(&me);
            debug!("{} unblocked {}", me, username);
        }
        Ok(())
    }

    // === Recommendations ===

    /// Suggests members the logged-in member might want to befriend.
    ///
    /// A member is recommended when they share at least
    /// [`RecommendationPolicy::min_mutual_friends`] friends with the
    /// session account and are not already a friend, not blocked by
    /// the session account, and not the session account itself.
    /// Read-only: asking for recommendations never changes the graph.
    pub fn recommend_friends(&self) -> KithResult<HashSet<String>> {
        let me = self.session_name()?;
        let mut recommended = HashSet::new();
        let Some(session) = self.members.get(me) else {
            return Ok(recommended);
        };
        for (username, candidate) in &self.members {
            if username.as_str() == me
                || session.has_friend(username)
                || session.blocked_users().contains(username)
            {
                continue;
            }
            if recommend::mutual_friend_count(candidate, session) >= self.policy.min_mutual_friends
            {
                recommended.insert(username.clone());
            }
        }
        Ok(recommended)
    }

    // === Departure ===

    /// Removes the logged-in member from the network.
    ///
    /// Every friendship is cancelled and every pending request in
    /// either direction is withdrawn before the account is deleted, so
    /// no other member is left holding a reference to it. Block lists
    /// are left alone; entries naming the departed member are inert.
    /// The session ends in every case.
    pub fn leave(&mut self) -> KithResult<()> {
        let me = self.session_name()?.to_string();
        if let Some(account) = self.members.get(&me) {
            let friends: Vec<String> = account.friends().iter().cloned().collect();
            let incoming: Vec<String> = account.incoming_requests().iter().cloned().collect();
            let outgoing: Vec<String> = account.outgoing_requests().iter().cloned().collect();
            for friend in friends {
                if let Some((other, leaver)) = self.pair_mut(&friend, &me) {
                    other.cancel_friendship(leaver);
                }
            }
            for requester in incoming {
                if let Some((req_account, leaver)) = self.pair_mut(&requester, &me) {
                    req_account.friend_request_rejected(leaver);
                }
            }
            for target in outgoing {
                if let Some((leaver, target_account)) = self.pair_mut(&me, &target) {
                    leaver.friend_request_rejected(target_account);
                }
            }
            self.members.remove(&me);
            info!("{} left the network", me);
        }
        self.session = None;
        Ok(())
    }

    // === Snapshots ===

    /// Serializes the network to JSON.
    ///
    /// The session is not part of the snapshot.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a network from JSON.
    ///
    /// The restored network has no session and no live handles; mint
    /// new ones with [`credential_for`](Self::credential_for).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
