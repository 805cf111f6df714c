//! Factory port traits and interface identity resolution
//!
//! A factory participates in the registry under the identity of its
//! *interface*, not its concrete type. [`FactoryBinding`] carries that
//! association as an associated type, so identity resolution happens
//! entirely at compile time: registering `LiveWidgetFactory` and looking up
//! `dyn WidgetFactory` converge on the same slot with no runtime mapping.
//!
//! The three traits split by role:
//!
//! - [`FactoryBinding`] - names the interface a factory type resolves to.
//!   Implemented both by concrete factories and by the interface trait-object
//!   type itself, which is what allows every registry operation to be called
//!   with either name.
//! - [`ConcreteFactory`] - the installable subset: types that can be boxed
//!   and erased to their interface. Only these can be registered.
//! - [`ProductFactory`] - the creation contract consumed by the registry's
//!   `create` operation.
//!
//! Use [`bind_interface!`](crate::bind_interface) and
//! [`bind_factory!`](crate::bind_factory) to generate the impls.

use std::any::TypeId;

use downcast_rs::Downcast;

/// Associates a factory type with the interface it is filed under.
///
/// `Interface` is always a trait-object type (`dyn SomeFactory`). The
/// `Downcast` bound keeps the exact concrete type recoverable through the
/// interface view, which callers use to verify injected doubles in tests.
///
/// A factory type without a `FactoryBinding` impl cannot appear in any
/// registry operation: the missing impl is a build-time error, never a
/// runtime fault.
pub trait FactoryBinding: 'static {
    /// The abstract factory interface this type resolves to
    type Interface: ?Sized + Downcast;
}

/// A concrete factory that can be installed in a registry slot.
///
/// Supplies the one step that needs the concrete type: boxing the value and
/// unsizing it to the bound interface. Interface trait-object types are
/// deliberately excluded (`Sized` bound) - only concrete factories can be
/// registered, while lookup accepts either name.
pub trait ConcreteFactory: FactoryBinding + Sized {
    /// Box the factory and erase it to its bound interface
    fn into_interface(self) -> Box<Self::Interface>;
}

/// Creation contract a factory interface exposes for the registry's `create`
/// operation.
///
/// A factory interface that wants to work with `create` declares this as a
/// supertrait with fixed bindings, for example:
///
/// ```ignore
/// trait WidgetFactory: Downcast + ProductFactory<Args = u32, Product = Box<dyn Widget>> {}
/// ```
///
/// `Product` declares both the product type and its ownership wrapper; the
/// value returned by [`create`](Self::create) is exclusively owned by the
/// caller. Interfaces with richer creation surfaces can skip this trait and
/// expose their own methods, invoked on a `get` reference instead.
pub trait ProductFactory {
    /// Arguments consumed to build one product
    type Args;
    /// The product handed to the caller, exclusively owned
    type Product;

    /// Build one product from the given arguments
    fn create(&self, args: Self::Args) -> Self::Product;
}

/// Resolve the identity token of the interface slot for a factory type.
///
/// Deterministic and pure: the token depends only on the type, never on
/// object state. Two concrete factories bound to the same interface resolve
/// to the same token, as does the interface type itself.
pub fn interface_id<F>() -> TypeId
where
    F: FactoryBinding + ?Sized,
{
    TypeId::of::<F::Interface>()
}

/// Resolve the human-readable interface name for a factory type.
///
/// Used for error payloads and log events. Like [`interface_id`], concrete
/// and interface names converge on the same string.
pub fn interface_name<F>() -> &'static str
where
    F: FactoryBinding + ?Sized,
{
    std::any::type_name::<F::Interface>()
}
