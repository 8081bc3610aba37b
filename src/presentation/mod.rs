//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Checkpoint summaries and error reports
//!
//! ## Usage
//!
//! ```ignore
//! use bbl::presentation::factory;
//!
//! let use_case = factory::create_bootstrap_use_case(&config, state_dir, events);
//! let repository = factory::create_checkpoint_repository(state_dir);
//! let checkpoint = use_case.execute_and_persist(&repository, &credentials)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_bootstrap_use_case, create_checkpoint_repository, create_event_sink};
