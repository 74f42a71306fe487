// SPDX-FileCopyrightText: 2026 Kith Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Unified error type for the Kith social graph.

use thiserror::Error;

/// Unified error type for Kith operations.
///
/// Operations that target another member never report that the target
/// is missing, already related, or blocked; those degrade to silent
/// no-ops so that a member cannot probe the graph for state they are
/// not allowed to see. The only hard failure is acting without a
/// session.
#[derive(Error, Debug)]
pub enum KithError {
    /// A session-scoped operation was called while nobody was logged in.
    #[error("no user is logged in")]
    NotLoggedIn,
}

/// Result type for Kith operations.
pub type KithResult<T> = Result<T, KithError>;
