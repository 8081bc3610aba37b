//! Bootstrap Module
//!
//! Orchestrates the end-to-end bootstrap of a director.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`BootstrapOptions`)
//! - `use_case` - Core use case logic (`BootstrapUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use bbl::application::bootstrap::{BootstrapOptions, BootstrapUseCase};
//!
//! let use_case = BootstrapUseCase::new(factory, deployer, key_pairs, BootstrapOptions::default());
//! let checkpoint = use_case.execute(checkpoint)?;
//! ```

mod options;
mod use_case;

pub use options::{BootstrapOptions, DEFAULT_STACK_NAME};
pub use use_case::BootstrapUseCase;
