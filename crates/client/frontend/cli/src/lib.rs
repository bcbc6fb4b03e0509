//! Terminal UI frontend for the live leaderboard.
//!
//! This crate provides a terminal-based table of the standings.
//! It implements the `client_frontend_core::Frontend` trait for pure UI
//! rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime
//! - Subscribes to events and re-reads the standings after each one

mod app;
mod config;
mod event;
mod input;
pub mod logging;
mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;
