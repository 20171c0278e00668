//! # Niya
//!
//! Engine for Niya, a two-player game on a 4×4 grid of tiles where each
//! tile carries a plant and a poem symbol. Players alternately claim tiles
//! matching the previous move's plant or poem; claiming a full row, column,
//! diagonal, or 2×2 square wins, as does locking the opponent out of moves.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: tile layout, claim state machine, packed
//!   win-pattern counters, match driver
//! - [`ai`] — Agent trait and the random / exhaustive-search strategies
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
