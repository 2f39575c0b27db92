//! Pokedex CLI Library
//!
//! This module exposes the application modules for use in integration tests.

pub mod api;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod pokedex;
pub mod repl;
