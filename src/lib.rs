#![cfg_attr(not(feature = "std"), no_std)]

//! Bayesian search-and-rescue simulation.
//!
//! A sailor is hidden in one of three search areas. Each round draws a
//! search effectiveness per area, searches one or two areas by inspecting a
//! random subset of their cells, and revises the probability of each area
//! with Bayes' rule. The core is `no_std` + `alloc`; the text menu, logger
//! and serde support need the `std` feature.

extern crate alloc;

mod area;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod plan;
mod random;
mod search;

pub use area::AreaBounds;
#[cfg(feature = "std")]
pub use cli::{parse_choice, run_session, MenuChoice, SessionSummary};
pub use common::{SearchError, SearchPhase, Termination};
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use plan::{play_round, RoundReport, SearchPlan};
pub use random::{triangular_from_unit, RandomSource};
pub use search::{revise, SearchOutcome, SearchState, TargetLocation};
