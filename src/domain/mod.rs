//! Domain Layer
//!
//! The core of bbl: the bootstrap model and the rules that keep it
//! resumable, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Checkpoint, Manifest, Stack
//! - `value_objects/` - Immutable value types (KeyPair, SslKeyPair, ManifestProperties)
//! - `services/` - Key pair sync, infrastructure provisioning, manifest assembly
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Manifest sub-builders are pure transformations
//! 3. **Ports & Adapters** - All cloud, installer and persistence access goes through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
