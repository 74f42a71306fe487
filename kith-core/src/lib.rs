//! Kith Core Library
//!
//! In-memory social graph with single-session logins, friend requests,
//! blocking, and mutual-friend recommendations. The graph is the whole
//! state: no storage, transport, or notification machinery lives here.

pub mod account;
pub mod error;
pub mod network;

pub use account::{Account, AccountHandle};
pub use error::{KithError, KithResult};
pub use network::{RecommendationPolicy, SocialNetwork};
