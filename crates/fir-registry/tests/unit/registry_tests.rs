//! Tests for the factory registry
//!
//! Exercises the full registration/overwrite/lookup protocol against a small
//! dummy factory hierarchy: one interface with two interchangeable concrete
//! factories, one interface that never gets a registration, and one factory
//! that counts its drops to observe instance lifecycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fir_domain::{Downcast, Error, ProductFactory, bind_factory, bind_interface, impl_downcast};
use fir_registry::FactoryRegistry;

// ============================================================================
// Dummy product and factory hierarchy
// ============================================================================

trait Dummy: Downcast {}
impl_downcast!(Dummy);

struct Dummy1;
impl Dummy for Dummy1 {}

struct Dummy2;
impl Dummy for Dummy2 {}

trait DummyFactory: Downcast + ProductFactory<Args = (), Product = Box<dyn Dummy>> {}
impl_downcast!(DummyFactory);
bind_interface!(DummyFactory);

struct DummyFactory1;
impl ProductFactory for DummyFactory1 {
    type Args = ();
    type Product = Box<dyn Dummy>;

    fn create(&self, _args: ()) -> Box<dyn Dummy> {
        Box::new(Dummy1)
    }
}
impl DummyFactory for DummyFactory1 {}
bind_factory!(DummyFactory1 => DummyFactory);

struct DummyFactory2;
impl ProductFactory for DummyFactory2 {
    type Args = ();
    type Product = Box<dyn Dummy>;

    fn create(&self, _args: ()) -> Box<dyn Dummy> {
        Box::new(Dummy2)
    }
}
impl DummyFactory for DummyFactory2 {}
bind_factory!(DummyFactory2 => DummyFactory);

// An interface that never receives a registration
trait OtherFactory: Downcast {}
impl_downcast!(OtherFactory);
bind_interface!(OtherFactory);

// A parameterized interface whose product value is comparable
trait LabelFactory: Downcast + ProductFactory<Args = (String, usize), Product = String> {}
impl_downcast!(LabelFactory);
bind_interface!(LabelFactory);

struct RepeatLabelFactory;
impl ProductFactory for RepeatLabelFactory {
    type Args = (String, usize);
    type Product = String;

    fn create(&self, (base, times): (String, usize)) -> String {
        base.repeat(times)
    }
}
impl LabelFactory for RepeatLabelFactory {}
bind_factory!(RepeatLabelFactory => LabelFactory);

// A factory that reports when it is dropped
trait TrackedFactory: Downcast {}
impl_downcast!(TrackedFactory);
bind_interface!(TrackedFactory);

struct CountingFactory {
    drops: Arc<AtomicUsize>,
}
impl TrackedFactory for CountingFactory {}
impl Drop for CountingFactory {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}
bind_factory!(CountingFactory => TrackedFactory);

// ============================================================================
// Registration and lookup
// ============================================================================

mod register_and_get {
    use super::*;

    #[test]
    fn test_get_by_concrete_and_interface_name() {
        let mut registry = FactoryRegistry::new();
        registry.register(DummyFactory1).unwrap();

        let by_concrete = registry.get::<DummyFactory1>().unwrap();
        assert!(
            by_concrete.is::<DummyFactory1>(),
            "Wrong factory type when getting by concrete name"
        );
        assert!(!by_concrete.is::<DummyFactory2>());

        let by_interface = registry.get::<dyn DummyFactory>().unwrap();
        assert!(
            by_interface.is::<DummyFactory1>(),
            "Wrong factory type when getting by interface name"
        );
        assert!(!by_interface.is::<DummyFactory2>());
    }

    #[test]
    fn test_both_names_resolve_to_the_same_instance() {
        let mut registry = FactoryRegistry::new();
        registry.register(DummyFactory1).unwrap();

        let by_concrete = registry
            .get::<DummyFactory1>()
            .unwrap()
            .downcast_ref::<DummyFactory1>()
            .unwrap() as *const DummyFactory1;
        let by_interface = registry
            .get::<dyn DummyFactory>()
            .unwrap()
            .downcast_ref::<DummyFactory1>()
            .unwrap() as *const DummyFactory1;

        assert_eq!(by_concrete, by_interface, "Names must share one stored instance");
    }

    #[test]
    fn test_get_unregistered_interface_fails() {
        let mut registry = FactoryRegistry::new();
        registry.register(DummyFactory1).unwrap();

        let result = registry.get::<dyn OtherFactory>();
        match result {
            Err(Error::NotRegistered { interface }) => {
                assert!(interface.contains("OtherFactory"));
            }
            _ => panic!("Expected NotRegistered error"),
        }
    }

    #[test]
    fn test_get_on_empty_registry_fails() {
        let registry = FactoryRegistry::new();
        assert!(matches!(
            registry.get::<dyn DummyFactory>(),
            Err(Error::NotRegistered { .. })
        ));
    }
}

// ============================================================================
// Double registration and overwrite
// ============================================================================

mod overwrite_and_conflicts {
    use super::*;

    #[test]
    fn test_register_twice_fails_and_preserves_original() {
        let mut registry = FactoryRegistry::new();
        registry.register(DummyFactory1).unwrap();

        let result = registry.register(DummyFactory1);
        match result {
            Err(Error::AlreadyRegistered { interface }) => {
                assert!(interface.contains("DummyFactory"));
            }
            _ => panic!("Expected AlreadyRegistered error"),
        }

        // The occupant must be untouched by the failed attempt
        let factory = registry.get::<dyn DummyFactory>().unwrap();
        assert!(factory.is::<DummyFactory1>());
    }

    #[test]
    fn test_register_conflicts_across_concrete_types_of_one_interface() {
        let mut registry = FactoryRegistry::new();
        registry.register(DummyFactory1).unwrap();

        // A different concrete type still lands on the same interface slot
        assert!(matches!(
            registry.register(DummyFactory2),
            Err(Error::AlreadyRegistered { .. })
        ));
    }

    #[test]
    fn test_overwrite_replaces_registered_factory() {
        let mut registry = FactoryRegistry::new();
        registry.overwrite(DummyFactory1);

        let factory = registry.get::<dyn DummyFactory>().unwrap();
        assert!(factory.is::<DummyFactory1>(), "Wrong factory type after registering");

        registry.overwrite(DummyFactory2);

        let factory = registry.get::<DummyFactory2>().unwrap();
        assert!(!factory.is::<DummyFactory1>(), "Wrong factory type after overwriting");
        assert!(factory.is::<DummyFactory2>(), "Wrong factory type after overwriting");
    }

    #[test]
    fn test_overwrite_after_failed_register_is_allowed() {
        let mut registry = FactoryRegistry::new();
        registry.register(DummyFactory1).unwrap();
        registry.register(DummyFactory2).unwrap_err();

        registry.overwrite(DummyFactory2);
        assert!(registry.get::<dyn DummyFactory>().unwrap().is::<DummyFactory2>());
    }
}

// ============================================================================
// Product creation
// ============================================================================

mod create {
    use super::*;

    #[test]
    fn test_create_by_concrete_and_interface_name() {
        let mut registry = FactoryRegistry::new();
        registry.register(DummyFactory1).unwrap();

        let product = registry.create::<DummyFactory1>(()).unwrap();
        assert!(product.is::<Dummy1>(), "Wrong product type when creating by concrete name");

        let product = registry.create::<dyn DummyFactory>(()).unwrap();
        assert!(product.is::<Dummy1>(), "Wrong product type when creating by interface name");
    }

    #[test]
    fn test_create_matches_explicit_get_then_create() {
        let mut registry = FactoryRegistry::new();
        registry.register(DummyFactory2).unwrap();

        let via_create = registry.create::<dyn DummyFactory>(()).unwrap();
        let via_get = registry.get::<dyn DummyFactory>().unwrap().create(());

        assert!(via_create.is::<Dummy2>());
        assert!(via_get.is::<Dummy2>());
    }

    #[test]
    fn test_create_follows_overwrite() {
        let mut registry = FactoryRegistry::new();
        registry.overwrite(DummyFactory1);
        registry.overwrite(DummyFactory2);

        let product = registry.create::<dyn DummyFactory>(()).unwrap();
        assert!(product.is::<Dummy2>());
        assert!(!product.is::<Dummy1>());
    }

    #[test]
    fn test_create_passes_arguments_through() {
        let mut registry = FactoryRegistry::new();
        registry.register(RepeatLabelFactory).unwrap();

        let via_create = registry
            .create::<dyn LabelFactory>(("ab".to_string(), 3))
            .unwrap();
        let via_get = registry
            .get::<dyn LabelFactory>()
            .unwrap()
            .create(("ab".to_string(), 3));

        assert_eq!(via_create, "ababab");
        assert_eq!(via_create, via_get);
    }

    #[test]
    fn test_create_unregistered_fails() {
        let registry = FactoryRegistry::new();
        assert!(matches!(
            registry.create::<dyn DummyFactory>(()),
            Err(Error::NotRegistered { .. })
        ));
    }
}

// ============================================================================
// Instance lifecycle
// ============================================================================

mod lifecycle {
    use super::*;

    #[test]
    fn test_lookup_never_drops_the_instance() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut registry = FactoryRegistry::new();
        registry
            .register(CountingFactory { drops: Arc::clone(&drops) })
            .unwrap();

        for _ in 0..5 {
            registry.get::<dyn TrackedFactory>().unwrap();
        }
        assert_eq!(drops.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_overwrite_drops_the_replaced_instance() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut registry = FactoryRegistry::new();
        registry.overwrite(CountingFactory { drops: Arc::clone(&drops) });
        assert_eq!(drops.load(Ordering::SeqCst), 0);

        registry.overwrite(CountingFactory { drops: Arc::clone(&drops) });
        assert_eq!(drops.load(Ordering::SeqCst), 1, "Replaced occupant must be dropped");
    }

    #[test]
    fn test_failed_register_drops_only_the_rejected_value() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut registry = FactoryRegistry::new();
        registry
            .register(CountingFactory { drops: Arc::clone(&drops) })
            .unwrap();

        registry
            .register(CountingFactory { drops: Arc::clone(&drops) })
            .unwrap_err();
        assert_eq!(
            drops.load(Ordering::SeqCst),
            1,
            "Rejected value is dropped, stored instance survives"
        );

        registry.get::<dyn TrackedFactory>().unwrap();
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropping_the_registry_drops_stored_instances() {
        let drops = Arc::new(AtomicUsize::new(0));
        {
            let mut registry = FactoryRegistry::new();
            registry
                .register(CountingFactory { drops: Arc::clone(&drops) })
                .unwrap();
        }
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }
}
