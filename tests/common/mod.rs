//! Shared test utilities for studyflow
//!
//! - Session fixtures backed by memory or a temporary database
//! - TUI terminal testing helpers

#![allow(dead_code)]

pub mod fixtures;
pub mod terminal;
