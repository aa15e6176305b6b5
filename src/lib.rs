//! Client for the NBStats basketball API.
//!
//! [`teams::TeamsFetcher`] is the entry point for UI code: it lists teams
//! fail-soft, returning an empty list instead of an error.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod teams;
pub mod types;
