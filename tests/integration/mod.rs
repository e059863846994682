//! Integration tests for studyflow
//!
//! These tests verify that storage, the session bootstrapper, the flow and
//! the renderer work together.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli_binary;
pub mod flow_properties;
pub mod participant_flow;
pub mod rendering;
