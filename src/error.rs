//! Configuration resolution errors.

use thiserror::Error;

/// Error raised while resolving an effective option set.
///
/// All variants are caller-input errors (a typo'd preset name); numeric
/// formatting itself never fails for finite input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no such format: {0}")]
    UnknownFormat(String),

    #[error("no such flavor: {0}")]
    UnknownFlavor(String),

    #[error("no such suffixgroup: {0}")]
    UnknownSuffixGroup(String),
}
