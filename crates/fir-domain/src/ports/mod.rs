//! Domain Port Interfaces
//!
//! Defines the boundary contracts between factory authors and the registry
//! layer. Ports follow the Dependency Inversion Principle: the domain
//! declares the traits, factory authors implement them, and the registry
//! resolves against them without knowing any concrete type.

/// Factory port traits and interface identity resolution
pub mod factory;

// Re-export the port traits for convenience
pub use factory::{
    ConcreteFactory, FactoryBinding, ProductFactory, interface_id, interface_name,
};
