//! Type-erased holder for one stored factory instance
//!
//! The registry maps interface identities to heterogeneous factory types, so
//! each slot erases its contents in two layers: an outer `Box<dyn Any>` hides
//! the interface type from the map, while the inner `Box<I>` keeps it intact
//! for the downcast in [`Holder::instance`], the one point where the
//! interface type is statically known again. Invariant: a holder stored
//! under `TypeId::of::<I>()` always contains a `Box<I>`.

use std::any::Any;
use std::fmt;

use downcast_rs::Downcast;

/// Container for one registered factory instance, exclusively owned
pub(crate) struct Holder {
    /// Outer erasure over the inner `Box<I>`
    instance: Box<dyn Any>,
    /// Interface name captured at installation, for diagnostics
    interface: &'static str,
}

impl Holder {
    /// Wrap an interface-erased factory instance
    pub(crate) fn new<I>(instance: Box<I>) -> Self
    where
        I: ?Sized + Downcast,
    {
        Self {
            instance: Box::new(instance),
            interface: std::any::type_name::<I>(),
        }
    }

    /// View the stored instance as the interface type it was filed under
    ///
    /// Returns `None` when `I` is not the interface this holder was built
    /// with, which a registry honoring the key invariant never asks for.
    pub(crate) fn instance<I>(&self) -> Option<&I>
    where
        I: ?Sized + Downcast,
    {
        self.instance.downcast_ref::<Box<I>>().map(|boxed| &**boxed)
    }
}

impl fmt::Debug for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holder")
            .field("interface", &self.interface)
            .finish_non_exhaustive()
    }
}
