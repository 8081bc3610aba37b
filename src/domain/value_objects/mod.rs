//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cloud_credentials;
mod config_warning;
mod credentials;
mod fingerprint;
mod installer_state;
mod key_pair;
mod manifest_properties;
mod ssl_key_pair;

pub use cloud_credentials::CloudCredentials;
pub use config_warning::ConfigWarning;
pub use credentials::InternalCredentials;
pub use fingerprint::Fingerprint;
pub use installer_state::InstallerState;
pub use key_pair::KeyPair;
pub use manifest_properties::ManifestProperties;
pub use ssl_key_pair::SslKeyPair;
