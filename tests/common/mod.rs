//! Common test utilities for bbl scenario, property and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated state directory plus helpers to run the `bbl` binary
//! - Fakes: an in-process installer for driving the workflow without a binary
//! - `Workflow`: the real bootstrap stack wired against the local cloud

#![allow(dead_code)]

pub mod env;
pub mod fakes;

pub use env::*;
pub use fakes::*;
