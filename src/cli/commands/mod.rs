//! CLI command handlers for `LearnTrack`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod catalog;
pub mod config;
pub mod learn;
