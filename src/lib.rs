//! Leaderboard - A ranked view of community contributors
//!
//! Leaderboard orders contributors by contribution count and presents the
//! result as a podium for the top three plus a list for everyone else,
//! highlighting the viewing user's own row.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, loads inputs)
//! - [`core`] - Domain types, ranking, podium layout, roster, config
//! - [`ui`] - Renderers and diagnostic output
//!
//! # Correctness Invariants
//!
//! 1. Ranks are dense, 1-based, and cover every user exactly once
//! 2. Contribution counts never increase down the ranking
//! 3. Equal counts are ordered by a fixed, documented tie-break
//! 4. At most one user is flagged as the viewer

pub mod cli;
pub mod core;
pub mod ui;
