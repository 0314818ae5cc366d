//! core
//!
//! Core domain types and ranking logic for the leaderboard.
//!
//! # Modules
//!
//! - [`types`] - Strong types: UserId, User, Stats, Badge
//! - [`ranking`] - Ordering, dense ranks, podium/remainder split
//! - [`podium`] - Rank to podium layout table
//! - [`roster`] - Loading the user list
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Ranking is a pure function of the roster and its parameters
//! - Lookups are finite tables with explicit fallbacks
//! - Invalid identifiers cannot be constructed

pub mod config;
pub mod podium;
pub mod ranking;
pub mod roster;
pub mod types;
