//! Binding macros
//!
//! Generate the [`FactoryBinding`](crate::ports::FactoryBinding) and
//! [`ConcreteFactory`](crate::ports::ConcreteFactory) impls that file a
//! factory type under its interface. Both macros expand to plain trait
//! impls, so a wrong declaration surfaces as a compile error at the
//! declaration site - most usefully, `bind_factory!` naming an interface the
//! factory does not implement fails on the unsizing coercion inside the
//! generated impl.

/// Bind a factory interface to its own identity slot.
///
/// Implements `FactoryBinding` for the trait-object type, which is what lets
/// registry operations name the interface directly
/// (`registry.get::<dyn WidgetFactory>()`).
///
/// # Example
///
/// ```ignore
/// trait WidgetFactory: Downcast {
///     fn build(&self) -> Box<dyn Widget>;
/// }
/// impl_downcast!(WidgetFactory);
/// bind_interface!(WidgetFactory);
/// ```
#[macro_export]
macro_rules! bind_interface {
    ($interface:path) => {
        impl $crate::ports::FactoryBinding for dyn $interface {
            type Interface = dyn $interface;
        }
    };
}

/// Bind a concrete factory to the interface it implements.
///
/// Implements `FactoryBinding` and `ConcreteFactory` for the concrete type,
/// so it can be registered and looked up by its own name
/// (`registry.register(LiveWidgetFactory::new())`,
/// `registry.get::<LiveWidgetFactory>()`).
///
/// # Example
///
/// ```ignore
/// struct LiveWidgetFactory;
/// impl WidgetFactory for LiveWidgetFactory { /* ... */ }
/// bind_factory!(LiveWidgetFactory => WidgetFactory);
/// ```
#[macro_export]
macro_rules! bind_factory {
    ($factory:ty => $interface:path) => {
        impl $crate::ports::FactoryBinding for $factory {
            type Interface = dyn $interface;
        }

        impl $crate::ports::ConcreteFactory for $factory {
            fn into_interface(self) -> ::std::boxed::Box<dyn $interface> {
                ::std::boxed::Box::new(self)
            }
        }
    };
}
