//! # FIR - Factory Injection Registry
//!
//! A runtime type-indexed registry that binds abstract factory interfaces to
//! concrete factory implementations, so call sites resolve collaborators
//! through the interface alone and tests substitute doubles without touching
//! them.
//!
//! This crate is the public facade: it re-exports the domain contracts and
//! the registry itself.
//!
//! ## Example
//!
//! ```
//! use fir::{
//!     Downcast, FactoryRegistry, ProductFactory, bind_factory, bind_interface, impl_downcast,
//! };
//!
//! trait Widget {
//!     fn area(&self) -> u32;
//! }
//!
//! struct Square(u32);
//! impl Widget for Square {
//!     fn area(&self) -> u32 {
//!         self.0 * self.0
//!     }
//! }
//!
//! trait WidgetFactory: Downcast + ProductFactory<Args = u32, Product = Box<dyn Widget>> {}
//! impl_downcast!(WidgetFactory);
//! bind_interface!(WidgetFactory);
//!
//! struct SquareFactory;
//! impl ProductFactory for SquareFactory {
//!     type Args = u32;
//!     type Product = Box<dyn Widget>;
//!
//!     fn create(&self, side: u32) -> Box<dyn Widget> {
//!         Box::new(Square(side))
//!     }
//! }
//! impl WidgetFactory for SquareFactory {}
//! bind_factory!(SquareFactory => WidgetFactory);
//!
//! # fn main() -> fir::Result<()> {
//! let mut registry = FactoryRegistry::new();
//! registry.register(SquareFactory)?;
//!
//! // Concrete and interface names resolve to the same slot
//! let widget = registry.create::<dyn WidgetFactory>(3)?;
//! assert_eq!(widget.area(), 9);
//! assert!(registry.get::<SquareFactory>()?.is::<SquareFactory>());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The workspace is layered, each crate re-exported here:
//!
//! - `domain` - port traits (`FactoryBinding`, `ConcreteFactory`,
//!   `ProductFactory`), interface identity, binding macros, error types
//! - `registry` - the `FactoryRegistry` storage and protocol

/// Domain layer - port traits, identity, and error types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use fir_domain::*;
}

/// Registry layer - the type-indexed factory registry
///
/// Re-exports from the registry crate for convenience
pub mod registry {
    pub use fir_registry::*;
}

// Re-export the whole surface at the crate root
pub use domain::*;
pub use registry::FactoryRegistry;

// Explicit macro re-exports so `use fir::bind_factory` works as documented
pub use fir_domain::{bind_factory, bind_interface, impl_downcast};
