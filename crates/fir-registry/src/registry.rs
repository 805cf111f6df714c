//! The type-indexed factory registry
//!
//! Binds abstract factory interfaces to concrete factory implementations so
//! that call sites resolve their collaborators through the interface alone
//! and a test harness can substitute doubles without touching them.
//!
//! ## Protocol
//!
//! | Operation   | Occupied slot            | Empty slot        |
//! |-------------|--------------------------|-------------------|
//! | `register`  | `AlreadyRegistered`      | installs instance |
//! | `overwrite` | replaces (drops prior)   | installs instance |
//! | `get`       | returns interface view   | `NotRegistered`   |
//! | `create`    | builds one product       | `NotRegistered`   |
//!
//! Every operation accepts either the concrete factory type or its interface
//! type; both resolve to the same slot through
//! [`FactoryBinding`](fir_domain::ports::FactoryBinding).
//!
//! ## Ownership and threading
//!
//! The registry exclusively owns every stored instance and is meant to be
//! held as a long-lived, singular object injected by reference; it is not
//! clonable. Mutation takes `&mut self`, so a reference obtained from
//! [`get`](FactoryRegistry::get) can never be invalidated by a later
//! overwrite - the overlap is a borrow error at compile time. Stored
//! instances carry no `Send`/`Sync` bounds, which leaves the registry
//! confined to the thread that created it; embedders that need several
//! threads use one registry per thread.

use std::any::TypeId;
use std::collections::HashMap;

use tracing::debug;

use fir_domain::error::{Error, Result};
use fir_domain::ports::{
    ConcreteFactory, FactoryBinding, ProductFactory, interface_id, interface_name,
};

use crate::holder::Holder;

/// Runtime type-indexed registry of factory instances, one per interface
#[derive(Debug)]
pub struct FactoryRegistry {
    slots: HashMap<TypeId, Holder>,
}

impl FactoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Install a factory, unconditionally replacing any prior occupant of
    /// its interface slot
    ///
    /// The replaced instance (if any) is dropped here. Subsequent lookups
    /// observe the new instance; nothing else changes. Intended for
    /// deliberate substitution, e.g. a test harness overriding production
    /// wiring.
    pub fn overwrite<F>(&mut self, factory: F)
    where
        F: ConcreteFactory,
    {
        let holder = Holder::new(factory.into_interface());
        let replaced = self.slots.insert(interface_id::<F>(), holder).is_some();

        debug!(
            interface = interface_name::<F>(),
            factory = std::any::type_name::<F>(),
            replaced,
            "factory installed"
        );
    }

    /// Install a factory, failing if its interface slot is occupied
    ///
    /// On [`Error::AlreadyRegistered`] the existing instance is left
    /// untouched. Protects production wiring from accidental
    /// double-registration; use [`overwrite`](Self::overwrite) for
    /// intentional replacement.
    pub fn register<F>(&mut self, factory: F) -> Result<()>
    where
        F: ConcreteFactory,
    {
        if self.slots.contains_key(&interface_id::<F>()) {
            return Err(Error::already_registered(interface_name::<F>()));
        }

        self.overwrite(factory);
        Ok(())
    }

    /// Look up the stored instance for a factory type, viewed as its
    /// interface
    ///
    /// `F` may name the concrete factory or the interface itself. The
    /// registry retains ownership; the returned reference borrows `self`,
    /// and the instance is usable only through the interface's declared
    /// operations. Fails with [`Error::NotRegistered`] when the slot is
    /// empty.
    pub fn get<F>(&self) -> Result<&F::Interface>
    where
        F: FactoryBinding + ?Sized,
    {
        self.slots
            .get(&interface_id::<F>())
            .and_then(|holder| holder.instance::<F::Interface>())
            .ok_or_else(|| Error::not_registered(interface_name::<F>()))
    }

    /// Create one product through the stored factory for `F`
    ///
    /// Equivalent to `self.get::<F>()?.create(args)`; the product is handed
    /// to the caller with full ownership while the factory stays in the
    /// registry. Requires the interface to expose the
    /// [`ProductFactory`] creation operation - interfaces with a different
    /// creation surface are used through [`get`](Self::get) directly.
    pub fn create<F>(
        &self,
        args: <F::Interface as ProductFactory>::Args,
    ) -> Result<<F::Interface as ProductFactory>::Product>
    where
        F: FactoryBinding + ?Sized,
        F::Interface: ProductFactory,
    {
        let factory = self.get::<F>()?;
        Ok(factory.create(args))
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
