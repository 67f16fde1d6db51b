//! Service registry - IoC container
//!
//! Maps capabilities (normally `dyn Trait` ports) to provider functions or
//! pre-built instances, each with a lifetime scope. Providers receive the
//! registry itself, so a capability's dependencies are resolved explicitly
//! through the same registry rather than discovered by reflection.
//!
//! ## Usage
//!
//! ```ignore
//! let registry = ServiceRegistry::new();
//! registry.register::<dyn StorageProvider, _>(Scope::Singleton, |_| {
//!     Ok(Arc::new(LocalStorageProvider::new(data_dir.clone())) as Arc<dyn StorageProvider>)
//! });
//! registry.register::<dyn SettingsService, _>(Scope::Singleton, |r| {
//!     let storage = r.resolve::<dyn StorageProvider>()?;
//!     Ok(SettingsStore::new(storage, global) as Arc<dyn SettingsService>)
//! });
//!
//! let settings: Arc<dyn SettingsService> = registry.resolve()?;
//! ```

use appshell_domain::error::{Error, Result};
use dashmap::DashMap;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Lifetime policy for a resolved capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// One shared instance, built on first resolve and cached
    Singleton,
    /// A fresh instance on every resolve
    PerResolve,
}

/// A resolved instance, type-erased; always holds an `Arc<T>`
type BoxedInstance = Box<dyn Any + Send + Sync>;

/// Provider function building a capability's instance
type ProviderFn = Box<dyn Fn(&ServiceRegistry) -> Result<BoxedInstance> + Send + Sync>;

struct Registration {
    capability: &'static str,
    scope: Scope,
    provider: ProviderFn,
}

/// Capability-to-provider registry with singleton caching
///
/// Registration is expected from a single logical owner at startup; resolves
/// may come from anywhere. The singleton cache uses add-if-absent, so
/// concurrent first resolves of the same capability agree on one instance.
pub struct ServiceRegistry {
    registrations: RwLock<HashMap<TypeId, Arc<Registration>>>,
    instances: DashMap<TypeId, BoxedInstance>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            registrations: RwLock::new(HashMap::new()),
            instances: DashMap::new(),
        }
    }

    /// Register a provider function for capability `T`
    ///
    /// Replaces any previous registration for `T` and drops a cached
    /// singleton, so the next resolve builds fresh.
    pub fn register<T, F>(&self, scope: Scope, provider: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&ServiceRegistry) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        let registration = Arc::new(Registration {
            capability: type_name::<T>(),
            scope,
            provider: Box::new(move |registry| {
                provider(registry).map(|instance| Box::new(instance) as BoxedInstance)
            }),
        });
        debug!(capability = registration.capability, ?scope, "registering capability");

        let mut map = self
            .registrations
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // a stale singleton must not outlive its registration
        self.instances.remove(&key);
        map.insert(key, registration);
    }

    /// Register a pre-built instance for capability `T`
    ///
    /// Seeds the singleton cache immediately: every resolve returns this
    /// exact instance. Registering the same object under a second capability
    /// yields reference-identical instances from both resolves.
    pub fn register_instance<T>(&self, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        let seed = instance.clone();
        let registration = Arc::new(Registration {
            capability: type_name::<T>(),
            scope: Scope::Singleton,
            provider: Box::new(move |_| Ok(Box::new(seed.clone()) as BoxedInstance)),
        });
        debug!(capability = registration.capability, "registering instance");

        let mut map = self
            .registrations
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        map.insert(key, registration);
        self.instances.insert(key, Box::new(instance));
    }

    /// Remove a registration, but only if `instance` is the cached one
    ///
    /// A no-op when the capability is unknown or a different instance is
    /// cached.
    pub fn unregister_instance<T>(&self, instance: &Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        let removed = self.instances.remove_if(&key, |_, cached| {
            cached
                .downcast_ref::<Arc<T>>()
                .is_some_and(|existing| Arc::ptr_eq(existing, instance))
        });
        if removed.is_some() {
            self.registrations
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&key);
        }
    }

    /// Resolve capability `T` to an instance
    ///
    /// Returns the cached singleton when present; otherwise invokes the
    /// registered provider, caching the result for `Scope::Singleton`.
    /// Resolving an unregistered capability is a hard error naming the
    /// capability - a wiring bug, never silently swallowed. Provider
    /// failures (for instance an unregistered dependency) propagate as-is.
    pub fn resolve<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        if let Some(cached) = self.instances.get(&key) {
            return clone_cached::<T>(cached.value());
        }

        let registration = {
            let map = self
                .registrations
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            map.get(&key).cloned()
        };
        let Some(registration) = registration else {
            return Err(Error::not_registered(type_name::<T>()));
        };

        let built = (registration.provider)(self)?;
        match registration.scope {
            Scope::PerResolve => take_built::<T>(built),
            Scope::Singleton => {
                // add-if-absent: the first concurrent resolve wins and every
                // caller gets the winner's instance
                let entry = self.instances.entry(key).or_insert(built);
                clone_cached::<T>(entry.value())
            }
        }
    }

    /// Whether a registration (or seeded instance) exists for `T`
    pub fn is_registered<T>(&self) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        if self.instances.contains_key(&key) {
            return true;
        }
        self.registrations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key)
    }

    /// Number of registered capabilities
    pub fn registration_count(&self) -> usize {
        self.registrations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Drop every registration and cached instance
    pub fn clear(&self) {
        self.instances.clear();
        self.registrations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("registrations", &self.registration_count())
            .field("cached_instances", &self.instances.len())
            .finish()
    }
}

fn clone_cached<T: ?Sized + Send + Sync + 'static>(cached: &BoxedInstance) -> Result<Arc<T>> {
    cached.downcast_ref::<Arc<T>>().cloned().ok_or_else(|| {
        Error::internal(format!(
            "cached instance for '{}' has an unexpected type",
            type_name::<T>()
        ))
    })
}

fn take_built<T: ?Sized + Send + Sync + 'static>(built: BoxedInstance) -> Result<Arc<T>> {
    built.downcast::<Arc<T>>().map(|arc| *arc).map_err(|_| {
        Error::internal(format!(
            "provider for '{}' built an unexpected type",
            type_name::<T>()
        ))
    })
}
