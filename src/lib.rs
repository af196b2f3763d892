//! # Connect Four AI
//!
//! Depth-limited adversarial search for Connect Four on the standard 6x7
//! board. Two interchangeable strategies — minimax with alpha-beta pruning
//! and negascout (principal variation search) — pick a column to play, using
//! a pluggable per-window evaluation policy to score non-terminal positions.
//!
//! ## Modules
//!
//! - [`game`] — Board representation, move simulation, win detection,
//!   player-identity allocation
//! - [`ai`] — Agent trait, the two search strategies, evaluation policies,
//!   position evaluator
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
