//! Registry layer for FIR - Factory Injection Registry
//!
//! Hosts the [`FactoryRegistry`], the runtime type-indexed mapping from
//! interface identity to the single live factory instance filed under it.
//! The port traits it resolves against live in `fir-domain`; this crate only
//! adds the storage and the registration/overwrite/lookup protocol.

mod holder;
/// The type-indexed factory registry
pub mod registry;

pub use registry::FactoryRegistry;
