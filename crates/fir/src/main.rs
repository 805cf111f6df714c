//! FIR - Entry Point
//!
//! Demonstration binary for the factory injection registry. Lives in the
//! `fir` facade crate to avoid doc output filename collision with the `fir`
//! library crate (cargo issue #6313).
//!
//! Wires a small `Greeter` hierarchy through the registry:
//!
//! | Profile | Installed factory | Behavior |
//! |---------|-------------------|----------|
//! | `live` | `LiveGreeterFactory` | production greeter, value-scaling reply |
//! | `canned` | `CannedGreeterFactory` | test double with a fixed reply |
//!
//! The `canned` profile is installed with `overwrite` on top of the
//! production registration - the same substitution a test harness performs -
//! and the consuming code below never changes.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fir::{
    Downcast, FactoryRegistry, ProductFactory, bind_factory, bind_interface, impl_downcast,
};

/// Something that can produce a greeting
trait Greeter {
    fn greet(&self) -> String;
}

/// Production greeter, parameterized at creation time
struct LiveGreeter {
    value: i32,
}

impl Greeter for LiveGreeter {
    fn greet(&self) -> String {
        format!("Hi from the live greeter! My value is: {}", self.value * 10)
    }
}

/// Test double with a fixed reply
struct CannedGreeter;

impl Greeter for CannedGreeter {
    fn greet(&self) -> String {
        "Hi from the canned greeter!".to_string()
    }
}

/// Factory interface the registry files both concrete factories under
trait GreeterFactory: Downcast + ProductFactory<Args = i32, Product = Box<dyn Greeter>> {}
impl_downcast!(GreeterFactory);
bind_interface!(GreeterFactory);

struct LiveGreeterFactory;

impl ProductFactory for LiveGreeterFactory {
    type Args = i32;
    type Product = Box<dyn Greeter>;

    fn create(&self, value: i32) -> Box<dyn Greeter> {
        Box::new(LiveGreeter { value })
    }
}
impl GreeterFactory for LiveGreeterFactory {}
bind_factory!(LiveGreeterFactory => GreeterFactory);

struct CannedGreeterFactory;

impl ProductFactory for CannedGreeterFactory {
    type Args = i32;
    type Product = Box<dyn Greeter>;

    fn create(&self, _value: i32) -> Box<dyn Greeter> {
        Box::new(CannedGreeter)
    }
}
impl GreeterFactory for CannedGreeterFactory {}
bind_factory!(CannedGreeterFactory => GreeterFactory);

/// Which factory set to install
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Profile {
    /// Production wiring
    Live,
    /// Test-double wiring, installed over the production registration
    Canned,
}

/// Command line interface for the FIR demo
#[derive(Parser, Debug)]
#[command(name = "fir")]
#[command(about = "FIR - Factory Injection Registry demo")]
#[command(version)]
struct Cli {
    /// Factory profile to install
    #[arg(long, value_enum, default_value = "live")]
    profile: Profile,

    /// Number of products to create through the fetched factory
    #[arg(long, default_value_t = 3)]
    count: i32,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut registry = FactoryRegistry::new();

    // Production wiring
    registry.register(LiveGreeterFactory)?;

    // The test profile substitutes its double without touching consumers
    if matches!(cli.profile, Profile::Canned) {
        registry.overwrite(CannedGreeterFactory);
    }

    run(&registry, cli.count)
}

/// Consume the registry the way application code would - by interface only
fn run(registry: &FactoryRegistry, count: i32) -> Result<()> {
    // One-off creation through the convenience path
    let greeter = registry.create::<dyn GreeterFactory>(count)?;
    info!(reply = %greeter.greet(), "created through the registry");

    // Repeated creation through an explicit factory reference
    let factory = registry.get::<dyn GreeterFactory>()?;
    for value in 0..count {
        let greeter = factory.create(value);
        info!(value, reply = %greeter.greet(), "created through the factory");
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FIR_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
