//! Service registry tests
//!
//! Covers register/resolve semantics, instance identity, unregistration,
//! re-registration, scopes, dependency propagation, and concurrent first
//! resolves.

use appshell_domain::error::Error;
use appshell_infrastructure::ioc::{Scope, ServiceRegistry};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn fresh_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::SeqCst)
}

trait Bartender: Send + Sync + std::fmt::Debug {
    fn id(&self) -> u64;
    fn name(&self) -> &'static str;
}

trait Sommeliere: Send + Sync + std::fmt::Debug {
    fn id(&self) -> u64;
}

#[derive(Debug)]
struct John {
    id: u64,
}

impl John {
    fn new() -> Self {
        Self { id: fresh_id() }
    }
}

impl Bartender for John {
    fn id(&self) -> u64 {
        self.id
    }
    fn name(&self) -> &'static str {
        "john"
    }
}

#[derive(Debug)]
struct Jane {
    id: u64,
}

impl Jane {
    fn new() -> Self {
        Self { id: fresh_id() }
    }
}

impl Bartender for Jane {
    fn id(&self) -> u64 {
        self.id
    }
    fn name(&self) -> &'static str {
        "jane"
    }
}

/// One concrete object serving two capabilities
#[derive(Debug)]
struct DualRole {
    id: u64,
}

impl DualRole {
    fn new() -> Self {
        Self { id: fresh_id() }
    }
}

impl Bartender for DualRole {
    fn id(&self) -> u64 {
        self.id
    }
    fn name(&self) -> &'static str {
        "dual"
    }
}

impl Sommeliere for DualRole {
    fn id(&self) -> u64 {
        self.id
    }
}

#[test]
fn test_register_then_resolve_builds_the_implementation() {
    let registry = ServiceRegistry::new();
    registry.register::<dyn Bartender, _>(Scope::Singleton, |_| {
        Ok(Arc::new(John::new()) as Arc<dyn Bartender>)
    });

    let actual = registry.resolve::<dyn Bartender>().unwrap();
    assert_eq!(actual.name(), "john");
}

#[test]
fn test_register_instance_preserves_identity() {
    let registry = ServiceRegistry::new();
    let instance: Arc<dyn Bartender> = Arc::new(DualRole::new());
    registry.register_instance::<dyn Bartender>(instance.clone());

    let resolved = registry.resolve::<dyn Bartender>().unwrap();
    assert!(Arc::ptr_eq(&resolved, &instance));
}

#[test]
fn test_two_capabilities_share_one_implementation() {
    let registry = ServiceRegistry::new();
    let concrete = Arc::new(DualRole::new());
    registry.register_instance::<dyn Bartender>(concrete.clone());
    registry.register_instance::<dyn Sommeliere>(concrete.clone());

    let bartender = registry.resolve::<dyn Bartender>().unwrap();
    let sommeliere = registry.resolve::<dyn Sommeliere>().unwrap();
    assert_eq!(Bartender::id(&*bartender), Sommeliere::id(&*sommeliere));
    assert_eq!(Bartender::id(&*bartender), concrete.id);
}

#[test]
fn test_unregister_instance_makes_resolve_fail() {
    let registry = ServiceRegistry::new();
    registry.register::<dyn Bartender, _>(Scope::Singleton, |_| {
        Ok(Arc::new(John::new()) as Arc<dyn Bartender>)
    });

    let bartender = registry.resolve::<dyn Bartender>().unwrap();
    registry.unregister_instance::<dyn Bartender>(&bartender);

    let err = registry.resolve::<dyn Bartender>().unwrap_err();
    match err {
        Error::NotRegistered { capability } => assert!(capability.contains("Bartender")),
        other => panic!("expected NotRegistered, got {:?}", other),
    }
}

#[test]
fn test_unregister_instance_ignores_a_different_instance() {
    let registry = ServiceRegistry::new();
    let registered: Arc<dyn Bartender> = Arc::new(John::new());
    let stranger: Arc<dyn Bartender> = Arc::new(John::new());
    registry.register_instance::<dyn Bartender>(registered.clone());

    registry.unregister_instance::<dyn Bartender>(&stranger);

    let resolved = registry.resolve::<dyn Bartender>().unwrap();
    assert!(Arc::ptr_eq(&resolved, &registered));
}

#[test]
fn test_reregistering_overwrites_and_drops_the_cached_instance() {
    let registry = ServiceRegistry::new();
    registry.register::<dyn Bartender, _>(Scope::Singleton, |_| {
        Ok(Arc::new(John::new()) as Arc<dyn Bartender>)
    });
    let john = registry.resolve::<dyn Bartender>().unwrap();
    assert_eq!(john.name(), "john");

    registry.register::<dyn Bartender, _>(Scope::Singleton, |_| {
        Ok(Arc::new(Jane::new()) as Arc<dyn Bartender>)
    });
    let jane = registry.resolve::<dyn Bartender>().unwrap();
    assert_eq!(jane.name(), "jane");
    assert_ne!(john.id(), jane.id());
}

#[test]
fn test_singleton_scope_caches_one_instance() {
    let registry = ServiceRegistry::new();
    registry.register::<dyn Bartender, _>(Scope::Singleton, |_| {
        Ok(Arc::new(John::new()) as Arc<dyn Bartender>)
    });

    let first = registry.resolve::<dyn Bartender>().unwrap();
    let second = registry.resolve::<dyn Bartender>().unwrap();
    assert_eq!(first.id(), second.id());
}

#[test]
fn test_per_resolve_scope_builds_fresh_instances() {
    let registry = ServiceRegistry::new();
    registry.register::<dyn Bartender, _>(Scope::PerResolve, |_| {
        Ok(Arc::new(John::new()) as Arc<dyn Bartender>)
    });

    let first = registry.resolve::<dyn Bartender>().unwrap();
    let second = registry.resolve::<dyn Bartender>().unwrap();
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_resolving_an_unregistered_capability_is_a_hard_error() {
    let registry = ServiceRegistry::new();
    let err = registry.resolve::<dyn Sommeliere>().unwrap_err();
    let message = format!("{}", err);
    assert!(message.contains("capability not registered"));
    assert!(message.contains("Sommeliere"));
}

#[test]
fn test_provider_dependency_failures_propagate() {
    let registry = ServiceRegistry::new();
    // the Bartender provider needs a Sommeliere, which nobody registered
    registry.register::<dyn Bartender, _>(Scope::Singleton, |r| {
        let _cellar = r.resolve::<dyn Sommeliere>()?;
        Ok(Arc::new(John::new()) as Arc<dyn Bartender>)
    });

    let err = registry.resolve::<dyn Bartender>().unwrap_err();
    match err {
        Error::NotRegistered { capability } => assert!(capability.contains("Sommeliere")),
        other => panic!("expected NotRegistered, got {:?}", other),
    }
}

#[test]
fn test_providers_resolve_their_dependencies_through_the_registry() {
    let registry = ServiceRegistry::new();
    registry.register::<dyn Sommeliere, _>(Scope::Singleton, |_| {
        Ok(Arc::new(DualRole::new()) as Arc<dyn Sommeliere>)
    });
    registry.register::<dyn Bartender, _>(Scope::Singleton, |r| {
        // constructor-style injection: the dependency comes from the registry
        let _cellar = r.resolve::<dyn Sommeliere>()?;
        Ok(Arc::new(Jane::new()) as Arc<dyn Bartender>)
    });

    assert!(registry.resolve::<dyn Bartender>().is_ok());
}

#[test]
fn test_concurrent_first_resolves_agree_on_one_singleton() {
    let registry = Arc::new(ServiceRegistry::new());
    let built = Arc::new(AtomicUsize::new(0));
    let counter = built.clone();
    registry.register::<dyn Bartender, _>(Scope::Singleton, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(John::new()) as Arc<dyn Bartender>)
    });

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = registry.clone();
        handles.push(std::thread::spawn(move || {
            registry.resolve::<dyn Bartender>().unwrap().id()
        }));
    }
    let ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // duplicates may be built transiently, but every caller sees one winner
    assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(built.load(Ordering::SeqCst) >= 1);
}

#[test]
fn test_is_registered_and_clear() {
    let registry = ServiceRegistry::new();
    assert!(!registry.is_registered::<dyn Bartender>());

    registry.register::<dyn Bartender, _>(Scope::Singleton, |_| {
        Ok(Arc::new(John::new()) as Arc<dyn Bartender>)
    });
    assert!(registry.is_registered::<dyn Bartender>());
    assert_eq!(registry.registration_count(), 1);

    registry.clear();
    assert!(!registry.is_registered::<dyn Bartender>());
    assert!(registry.resolve::<dyn Bartender>().is_err());
}
