//! Domain layer for FIR - Factory Injection Registry
//!
//! Defines the boundary contracts of the factory injection system:
//!
//! - [`error`] - The two domain failure kinds and the crate-wide `Result`
//! - [`ports`] - Factory port traits and the interface-identity helpers
//! - Binding macros ([`bind_interface!`](crate::bind_interface) and
//!   [`bind_factory!`](crate::bind_factory)) that declare which interface a
//!   factory type is filed under
//!
//! This crate carries no registry state of its own. It only declares the
//! contracts that the registry layer resolves against, following the
//! Dependency Inversion Principle: high-level consumers depend on these
//! port traits, never on concrete factories.

/// Error handling types
pub mod error;
/// Factory port traits and interface identity
pub mod ports;

mod macros;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use ports::{
    ConcreteFactory, FactoryBinding, ProductFactory, interface_id, interface_name,
};

// Re-exported so interface authors can extend `Downcast` and call
// `impl_downcast!` without depending on downcast-rs directly
pub use downcast_rs::{Downcast, impl_downcast};
