//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the factory injection registry
///
/// Both variants carry the identifying name of the interface whose slot was
/// involved, as produced by [`crate::ports::interface_name`]. Errors are
/// returned synchronously to the immediate caller; the registry never logs,
/// retries, or recovers on their behalf.
#[derive(Error, Debug)]
pub enum Error {
    /// A factory for this interface is already registered
    ///
    /// Raised by `register` when the slot is occupied. Non-fatal: the caller
    /// may ignore it or switch to `overwrite` for intentional replacement.
    #[error("factory for interface `{interface}` is already registered")]
    AlreadyRegistered {
        /// Name of the interface whose slot was occupied
        interface: &'static str,
    },

    /// No factory is registered for this interface
    ///
    /// Raised by `get`/`create` when the slot is empty. Indicates a wiring
    /// bug: a lookup happened before the matching registration.
    #[error("no factory registered for interface `{interface}`")]
    NotRegistered {
        /// Name of the interface whose slot was empty
        interface: &'static str,
    },
}

impl Error {
    /// Create an `AlreadyRegistered` error for the given interface name
    pub fn already_registered(interface: &'static str) -> Self {
        Self::AlreadyRegistered { interface }
    }

    /// Create a `NotRegistered` error for the given interface name
    pub fn not_registered(interface: &'static str) -> Self {
        Self::NotRegistered { interface }
    }
}
